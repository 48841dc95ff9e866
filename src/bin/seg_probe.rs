use std::env;
use std::fmt::Debug;
use std::time::Instant;

use lazy_seg::algebras::{
    add_sum::{RangeAddSum, SumLen},
    affine::{Affine, ModSum, RangeAffineSum},
    assign_min::RangeAssignMin,
    flip::{BitRun, RangeFlipInversions},
};
use lazy_seg::{LazyAlgebra, LazySegTree};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("seg_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Lazy Segment Tree Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each scenario runs 2n random operations (range apply, range query,");
    eprintln!("point set/get, boundary search) on a tree of n slots.");
    eprintln!("  • Correctness: results match a plain Vec model (up to n = {})", options.verify_limit);
    eprintln!("  • Performance: wall-clock time and RSS delta per run");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Range add / range sum...");
    measurements.extend(run_scenario(
        "add_sum",
        &options,
        &mut sys,
        RangeAddSum,
        |rng| SumLen::leaf(rng.gen_range(0..1_000)),
        |rng| rng.gen_range(0..100),
        Some(|bound: i64| move |v: &SumLen| v.sum <= bound),
    ));

    eprintln!("[2/4] Range affine / range sum mod 998244353...");
    let m = RangeAffineSum::default().modulus();
    measurements.extend(run_scenario(
        "affine_sum",
        &options,
        &mut sys,
        RangeAffineSum::default(),
        move |rng| ModSum::leaf(rng.gen_range(0..m)),
        move |rng| Affine {
            mul: rng.gen_range(0..m),
            add: rng.gen_range(0..m),
        },
        None::<fn(i64) -> fn(&ModSum) -> bool>,
    ));

    eprintln!("[3/4] Range flip / inversion count...");
    measurements.extend(run_scenario(
        "flip_inversions",
        &options,
        &mut sys,
        RangeFlipInversions,
        |rng| BitRun::leaf(rng.gen_bool(0.5)),
        |_| true,
        None::<fn(i64) -> fn(&BitRun) -> bool>,
    ));

    eprintln!("[4/4] Range assign / range min...");
    measurements.extend(run_scenario(
        "assign_min",
        &options,
        &mut sys,
        RangeAssignMin,
        |rng| rng.gen_range(-1_000_000..1_000_000),
        |rng| Some(rng.gen_range(-1_000_000..1_000_000)),
        Some(|bound: i64| move |v: &i64| *v >= bound % 1_000_000),
    ));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("seg_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;
        let mut seed = 0x5E6_7EE5u64;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_number(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_number(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = parse_number(value, "seed")?;
            } else if arg == "--seed" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = parse_number(&value, "seed")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            seed,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin seg_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest tree size checked against the Vec model (default: 4096)
  --seed <N>                    Seed for the random workloads
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin seg_probe
  cargo run --release --bin seg_probe -- --format table --verify-limit 1024
"
        );
    }
}

fn parse_number<N: std::str::FromStr>(value: &str, what: &str) -> Result<N, String> {
    value
        .parse::<N>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

/// Run the random workload of one algebra at every probe size.
///
/// `search` builds a monotone predicate from a random bound; scenarios whose
/// aggregates have no natural monotone predicate pass `None`.
#[allow(clippy::too_many_arguments)]
fn run_scenario<A, V, T, S, P>(
    scenario: &'static str,
    options: &Options,
    sys: &mut System,
    algebra: A,
    mut gen_value: V,
    mut gen_tag: T,
    search: Option<S>,
) -> Vec<Measurement>
where
    A: LazyAlgebra + Clone,
    A::Value: PartialEq + Debug,
    V: FnMut(&mut StdRng) -> A::Value,
    T: FnMut(&mut StdRng) -> A::Tag,
    S: Fn(i64) -> P,
    P: Fn(&A::Value) -> bool,
{
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] n={}... ", idx + 1, SIZES.len(), n);
            let mut rng = StdRng::seed_from_u64(options.seed ^ n as u64);
            let values: Vec<A::Value> = (0..n).map(|_| gen_value(&mut rng)).collect();
            let verify = n <= options.verify_limit;

            let m = measure(scenario, n, sys, || {
                let mut tree = LazySegTree::from_values(algebra.clone(), values.clone());
                let mut model = if verify { Some(values.clone()) } else { None };

                for step in 0..2 * n {
                    let lo = rng.gen_range(0..=n);
                    let hi = rng.gen_range(lo..=n);
                    match rng.gen_range(0..6) {
                        0 | 1 => {
                            let tag = gen_tag(&mut rng);
                            if let Some(slots) = model.as_mut() {
                                for slot in &mut slots[lo..hi] {
                                    *slot = algebra.mapping(&tag, slot);
                                }
                            }
                            tree.apply_range(lo, hi, tag);
                        }
                        2 if lo < n => {
                            let value = gen_value(&mut rng);
                            if let Some(slots) = model.as_mut() {
                                slots[lo] = value.clone();
                            }
                            tree.set(lo, value);
                        }
                        3 => {
                            let Some(make) = search.as_ref() else {
                                continue;
                            };
                            let bound = rng.gen_range(0..(n as i64 + 1) * 1_000);
                            let r = tree.max_right(lo, make(bound));
                            let l = tree.min_left(hi, make(bound));
                            if let Some(slots) = model.as_ref() {
                                let expected = (
                                    linear_max_right(&algebra, slots, lo, make(bound)),
                                    linear_min_left(&algebra, slots, hi, make(bound)),
                                );
                                if expected != (r, l) {
                                    return (
                                        VerificationStatus::Failed,
                                        Some(format!(
                                            "step {step}: search from {lo}/{hi} expected {expected:?}, got {:?}",
                                            (r, l)
                                        )),
                                        tree,
                                    );
                                }
                            }
                        }
                        _ => {
                            let got = tree.prod(lo, hi);
                            if let Some(slots) = model.as_ref() {
                                let expected = fold(&algebra, &slots[lo..hi]);
                                if expected != got {
                                    return (
                                        VerificationStatus::Failed,
                                        Some(format!(
                                            "step {step}: prod({lo}, {hi}) expected {expected:?}, got {got:?}"
                                        )),
                                        tree,
                                    );
                                }
                            }
                        }
                    }
                }

                let (status, detail) = match model {
                    Some(slots) if tree.values() != slots => (
                        VerificationStatus::Failed,
                        Some("final slot values diverged".to_string()),
                    ),
                    Some(_) => (VerificationStatus::Passed, None),
                    None => (VerificationStatus::NotChecked, None),
                };
                (status, detail, tree)
            });
            eprintln!(
                "{} time={:.3}s, status={}",
                m.verification_status.icon(),
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn fold<A: LazyAlgebra>(algebra: &A, slots: &[A::Value]) -> A::Value {
    slots
        .iter()
        .fold(algebra.identity(), |acc, x| algebra.op(&acc, x))
}

fn linear_max_right<A: LazyAlgebra>(
    algebra: &A,
    slots: &[A::Value],
    lo: usize,
    pred: impl Fn(&A::Value) -> bool,
) -> usize {
    let mut acc = algebra.identity();
    for (r, slot) in slots.iter().enumerate().skip(lo) {
        let next = algebra.op(&acc, slot);
        if !pred(&next) {
            return r;
        }
        acc = next;
    }
    slots.len()
}

fn linear_min_left<A: LazyAlgebra>(
    algebra: &A,
    slots: &[A::Value],
    hi: usize,
    pred: impl Fn(&A::Value) -> bool,
) -> usize {
    let mut acc = algebra.identity();
    for l in (0..hi).rev() {
        let next = algebra.op(&slots[l], &acc);
        if !pred(&next) {
            return l + 1;
        }
        acc = next;
    }
    0
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Failed)
        .count();
    let passed = measurements
        .iter()
        .filter(|m| m.verification_status == VerificationStatus::Passed)
        .count();

    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "Summary: {} runs, {} passed, {} failed, {} not checked",
        measurements.len(),
        passed,
        failed,
        measurements.len() - passed - failed
    );
    let mut scenarios: Vec<&'static str> = measurements.iter().map(|m| m.scenario).collect();
    scenarios.dedup();
    for scenario in scenarios {
        let runs: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario)
            .collect();
        let (Some(first), Some(last)) = (runs.first(), runs.last()) else {
            continue;
        };
        // Ops grow linearly with n, so O(n log n) total work shows as a ratio
        // slightly above the size ratio.
        let time_ratio = if first.wall_s > 0.0 {
            last.wall_s / first.wall_s
        } else {
            0.0
        };
        eprintln!(
            "  {scenario}: n {}..{}, time ratio {:.1}x for size ratio {}x",
            first.size,
            last.size,
            time_ratio,
            last.size / first.size.max(1)
        );
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

/// Time `compute` and sample RSS around it.
///
/// `compute` hands back whatever it allocated (`R`) so the second sample is
/// taken while that memory is still live.
fn measure<F, R>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>, R),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail, live) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);
    drop(live);

    Measurement {
        scenario,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);

    println!(
        "{:<col1$}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_samples_while_result_is_live() {
        let mut sys = System::new();
        if rss_kib(&mut sys) == 0 {
            // Process memory is unavailable on this platform.
            return;
        }
        let m = measure("alloc", 1, &mut sys, || {
            let block = vec![1u8; 64 << 20];
            (VerificationStatus::Passed, None, block)
        });
        assert!(m.rss_delta_kib >= 32 << 10, "delta was {} KiB", m.rss_delta_kib);
        assert_eq!(m.verification_status.label(), "passed");

        let n = 1 << 20;
        let m = measure("tree", n, &mut sys, || {
            let tree = LazySegTree::from_values(RangeAddSum, vec![SumLen::leaf(1); n]);
            (VerificationStatus::NotChecked, None, tree)
        });
        assert!(m.rss_delta_kib > 0);
    }
}

//! Runs both XOR benchmarks at 5000 and 10000 epochs and prints a comparison.

use xor_bench::bench::{self, BenchConfig, BenchReport};
use xor_bench::NnError;

const EPOCH_BUDGETS: [usize; 2] = [5000, 10000];

fn main() -> Result<(), NnError> {
    env_logger::init();

    let mut reports = Vec::new();
    for preset in BenchConfig::presets() {
        for epochs in EPOCH_BUDGETS {
            reports.push(bench::run(&preset.clone().with_epochs(epochs))?);
        }
    }

    println!("{}", BenchReport::summary_header());
    for report in &reports {
        println!("{}", report.summary_row());
    }

    Ok(())
}

//! PyTorch-style XOR benchmark: Linear(2) → Sigmoid → Linear(1), MSE, Adam(0.03),
//! 10000 epochs of an explicit training loop.

use xor_bench::bench::{self, BenchConfig};
use xor_bench::NnError;

fn main() -> Result<(), NnError> {
    env_logger::init();

    let report = bench::run(&BenchConfig::module())?;
    println!("{} milliseconds", report.elapsed_ms());

    for p in &report.predictions {
        println!("{p}");
    }

    Ok(())
}

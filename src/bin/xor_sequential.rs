//! Keras-style XOR benchmark: Dense(3, sigmoid) → Dense(1, sigmoid), binary
//! cross-entropy, 5000 epochs of `fit`.

use xor_bench::bench::{self, BenchConfig};
use xor_bench::data::{XOR_FALSE, XOR_TRUE};
use xor_bench::NnError;

fn main() -> Result<(), NnError> {
    env_logger::init();

    let report = bench::run(&BenchConfig::sequential())?;
    println!("Training took {:.3} ms", report.elapsed_ms());

    println!("XOR True");
    for input in XOR_TRUE {
        if let Some(p) = report.prediction_for(input) {
            println!("{p}");
        }
    }
    println!("XOR False");
    for input in XOR_FALSE {
        if let Some(p) = report.prediction_for(input) {
            println!("{p}");
        }
    }

    Ok(())
}

//! End-to-end training tests for both benchmark presets.
//!
//! Whether a 2-layer sigmoid network escapes XOR's flat regions depends on its
//! initial weights, so each preset gets several seeds and must learn XOR with
//! at least one of them.

use xor_bench::bench::{self, BenchConfig, BenchReport, XOR_TOLERANCE};
use xor_bench::data::{XOR_FALSE, XOR_TRUE};

const SEEDS: u64 = 8;

fn first_converged(preset: BenchConfig) -> Option<BenchReport> {
    (0..SEEDS)
        .map(|seed| bench::run(&preset.clone().with_seed(seed)).expect("run failed"))
        .find(|report| report.approximates_xor(XOR_TOLERANCE))
}

fn assert_truth_table(report: &BenchReport) {
    assert!(report.separates(), "{report:?}");
    for input in XOR_TRUE {
        let p = report.prediction_for(input).unwrap();
        assert!(p.output > 0.5, "{p}");
    }
    for input in XOR_FALSE {
        let p = report.prediction_for(input).unwrap();
        assert!(p.output < 0.5, "{p}");
    }
}

#[cfg(test)]
mod convergence_tests {
    use super::*;

    #[test]
    fn sequential_preset_learns_xor() {
        let report = first_converged(BenchConfig::sequential())
            .expect("no seed converged for the sequential preset");
        assert_truth_table(&report);
        assert_eq!(report.epochs, 5000);
    }

    #[test]
    fn module_preset_learns_xor() {
        let report = first_converged(BenchConfig::module())
            .expect("no seed converged for the module preset");
        assert_truth_table(&report);

        let untrained = bench::run(&BenchConfig::module().with_epochs(1).with_seed(report.seed)).unwrap();
        assert!(report.final_loss < untrained.final_loss);
    }

    #[test]
    fn training_time_is_measured() {
        let report = bench::run(&BenchConfig::module().with_epochs(200).with_seed(1)).unwrap();
        assert!(report.elapsed_ms() > 0.0);
        assert_eq!(report.predictions.len(), 4);
    }
}

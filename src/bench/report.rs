use std::fmt;
use std::time::Duration;

use crate::bench::config::TrainStyle;

/// Maximum |output - expected| for a run to count as having learned XOR.
pub const XOR_TOLERANCE: f64 = 0.25;

/// Model output for one XOR input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub input: [f64; 2],
    pub output: f64,
    pub expected: f64,
}

impl Prediction {
    pub fn error(&self) -> f64 {
        (self.output - self.expected).abs()
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] -> {:.4}", self.input[0], self.input[1], self.output)
    }
}

/// Outcome of one timed benchmark run.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub name: String,
    pub style: TrainStyle,
    pub epochs: usize,
    pub seed: u64,
    /// Wall-clock time of the training call only.
    pub elapsed: Duration,
    /// Loss of the trained model over the full dataset.
    pub final_loss: f64,
    /// Accuracy of the last `fit` epoch; `None` for manual runs.
    pub train_accuracy: Option<f64>,
    /// One prediction per XOR sample, in truth-table order.
    pub predictions: Vec<Prediction>,
}

impl BenchReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn prediction_for(&self, input: [f64; 2]) -> Option<&Prediction> {
        self.predictions.iter().find(|p| p.input == input)
    }

    /// Every output lies within `tolerance` of its XOR label.
    pub fn approximates_xor(&self, tolerance: f64) -> bool {
        !self.predictions.is_empty() && self.predictions.iter().all(|p| p.error() < tolerance)
    }

    /// Every XOR-true output is above every XOR-false output. A run with
    /// any non-finite output never separates.
    pub fn separates(&self) -> bool {
        if !self.predictions.iter().all(|p| p.output.is_finite()) {
            return false;
        }
        let (ones, zeros): (Vec<&Prediction>, Vec<&Prediction>) =
            self.predictions.iter().partition(|p| p.expected >= 0.5);
        let lowest_one = ones.iter().map(|p| p.output).fold(f64::INFINITY, f64::min);
        let highest_zero = zeros.iter().map(|p| p.output).fold(f64::NEG_INFINITY, f64::max);
        !ones.is_empty() && !zeros.is_empty() && lowest_one > highest_zero
    }

    pub fn summary_header() -> String {
        format!(
            "{:<12} {:>8} {:>12} {:>12} {:>9} {:>8}",
            "run", "epochs", "time (ms)", "final loss", "accuracy", "learned"
        )
    }

    pub fn summary_row(&self) -> String {
        format!(
            "{:<12} {:>8} {:>12.3} {:>12.6} {:>9} {:>8}",
            self.name,
            self.epochs,
            self.elapsed_ms(),
            self.final_loss,
            self.train_accuracy.map_or_else(|| "-".to_string(), |a| format!("{a:.2}")),
            if self.approximates_xor(XOR_TOLERANCE) { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outputs: [f64; 4]) -> BenchReport {
        let inputs = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let expected = [0.0, 1.0, 1.0, 0.0];
        BenchReport {
            name: "t".into(),
            style: TrainStyle::Fit,
            epochs: 1,
            seed: 0,
            elapsed: Duration::from_micros(1500),
            final_loss: 0.0,
            train_accuracy: None,
            predictions: (0..4)
                .map(|i| Prediction { input: inputs[i], output: outputs[i], expected: expected[i] })
                .collect(),
        }
    }

    #[test]
    fn tolerance_and_separation() {
        let good = report([0.05, 0.93, 0.9, 0.1]);
        assert!(good.approximates_xor(XOR_TOLERANCE));
        assert!(good.separates());

        let loose = report([0.4, 0.6, 0.55, 0.45]);
        assert!(!loose.approximates_xor(XOR_TOLERANCE));
        assert!(loose.separates());

        let stuck = report([0.5, 0.67, 0.33, 0.5]);
        assert!(!stuck.separates());
    }

    #[test]
    fn diverged_outputs_neither_separate_nor_approximate() {
        let nan = report([f64::NAN; 4]);
        assert!(!nan.separates());
        assert!(!nan.approximates_xor(XOR_TOLERANCE));

        let one_inf = report([0.0, f64::INFINITY, 1.0, 0.0]);
        assert!(!one_inf.separates());
    }

    #[test]
    fn formats_predictions_and_time() {
        let r = report([0.0, 1.0, 1.0, 0.0]);
        assert_eq!(r.prediction_for([1.0, 0.0]).unwrap().to_string(), "[1, 0] -> 1.0000");
        assert!((r.elapsed_ms() - 1.5).abs() < 1e-9);
        assert!(r.summary_row().ends_with("yes"));
        assert!(r.summary_row().contains(" - "));

        let fitted = BenchReport { train_accuracy: Some(0.75), ..r };
        assert!(fitted.summary_row().contains("0.75"));
    }
}

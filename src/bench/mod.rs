//! Timed XOR training runs.
//!
//! A run builds the fixed XOR dataset, builds the model from its
//! `NetworkSpec`, trains it for a fixed number of epochs with a start/stop
//! timer around the training call, and predicts the four truth-table inputs.

pub mod config;
pub mod manual;
pub mod report;
pub mod runner;

pub use config::{BenchConfig, TrainStyle};
pub use manual::train_manual;
pub use report::{BenchReport, Prediction, XOR_TOLERANCE};
pub use runner::run;

pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod bench;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::{dense::Layer, init::Initializer};
pub use network::{Network, NetworkSpec, LayerSpec};
pub use loss::LossType;
pub use optim::{Optimizer, OptimizerType, Sgd, Adam, RmsProp};
pub use train::{train_loop, TrainConfig, History, EpochStats};
pub use data::XorDataset;
pub use bench::{BenchConfig, BenchReport, TrainStyle};

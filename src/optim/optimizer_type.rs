use serde::{Serialize, Deserialize};

use crate::error::{NnError, Result};
use crate::optim::{adam::Adam, rmsprop::RmsProp, sgd::Sgd, Optimizer};

/// Serializable optimizer choice with its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptimizerType {
    Sgd { learning_rate: f64 },
    Adam { learning_rate: f64, beta1: f64, beta2: f64, epsilon: f64 },
    RmsProp { learning_rate: f64, rho: f64, epsilon: f64 },
}

impl OptimizerType {
    /// PyTorch `torch.optim.Adam` defaults with the given learning rate.
    pub fn adam(learning_rate: f64) -> Self {
        OptimizerType::Adam { learning_rate, beta1: 0.9, beta2: 0.999, epsilon: 1e-8 }
    }

    /// Keras `RMSprop` defaults with the given learning rate.
    pub fn rms_prop(learning_rate: f64) -> Self {
        OptimizerType::RmsProp { learning_rate, rho: 0.9, epsilon: 1e-7 }
    }

    pub fn learning_rate(&self) -> f64 {
        match *self {
            OptimizerType::Sgd { learning_rate }
            | OptimizerType::Adam { learning_rate, .. }
            | OptimizerType::RmsProp { learning_rate, .. } => learning_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let lr = self.learning_rate();
        if !(lr.is_finite() && lr > 0.0) {
            return Err(NnError::invalid_config("optimizer.learning_rate", "must be a positive number"));
        }
        match *self {
            OptimizerType::Adam { beta1, beta2, .. } => {
                if !(0.0..1.0).contains(&beta1) || !(0.0..1.0).contains(&beta2) {
                    return Err(NnError::invalid_config("optimizer.beta", "betas must lie in [0, 1)"));
                }
            }
            OptimizerType::RmsProp { rho, .. } => {
                if !(0.0..1.0).contains(&rho) {
                    return Err(NnError::invalid_config("optimizer.rho", "must lie in [0, 1)"));
                }
            }
            OptimizerType::Sgd { .. } => {}
        }
        Ok(())
    }

    pub fn build(&self) -> Box<dyn Optimizer> {
        match *self {
            OptimizerType::Sgd { learning_rate } => Box::new(Sgd::new(learning_rate)),
            OptimizerType::Adam { learning_rate, beta1, beta2, epsilon } => {
                Box::new(Adam::with_params(learning_rate, beta1, beta2, epsilon))
            }
            OptimizerType::RmsProp { learning_rate, rho, epsilon } => {
                Box::new(RmsProp::with_params(learning_rate, rho, epsilon))
            }
        }
    }
}

use serde::{Serialize, Deserialize};

/// Per-epoch training statistics recorded by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean training loss over all samples in this epoch.
    pub loss: f64,
    /// Fraction of outputs on the correct side of 0.5, measured before the
    /// epoch's last update.
    pub accuracy: f64,
}

/// Everything `train_loop` recorded, oldest epoch first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub epochs: Vec<EpochStats>,
}

impl History {
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn last(&self) -> Option<&EpochStats> {
        self.epochs.last()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.last().map(|s| s.loss)
    }

    pub fn final_accuracy(&self) -> Option<f64> {
        self.last().map(|s| s.accuracy)
    }
}

pub mod sgd;
pub mod adam;
pub mod rmsprop;
pub mod optimizer_type;

use crate::layers::dense::Layer;

pub use sgd::Sgd;
pub use adam::Adam;
pub use rmsprop::RmsProp;
pub use optimizer_type::OptimizerType;

/// Applies accumulated layer gradients to the layer parameters.
///
/// `step` does not clear the gradients; callers zero them between updates.
pub trait Optimizer {
    fn step(&mut self, layers: &mut [Layer]);
}

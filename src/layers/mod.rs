pub mod dense;
pub mod init;

pub use dense::Layer;
pub use init::Initializer;

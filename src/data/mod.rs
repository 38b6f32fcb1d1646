pub mod xor;

pub use xor::{XorDataset, XOR_FALSE, XOR_SAMPLES, XOR_TRUE};

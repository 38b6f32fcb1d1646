use crate::math::matrix::Matrix;

/// The four XOR samples in truth-table order: (0,0), (1,0), (0,1), (1,1).
pub const XOR_SAMPLES: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([1.0, 0.0], 1.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 1.0], 0.0),
];

/// Inputs whose XOR is 1.
pub const XOR_TRUE: [[f64; 2]; 2] = [[1.0, 0.0], [0.0, 1.0]];

/// Inputs whose XOR is 0.
pub const XOR_FALSE: [[f64; 2]; 2] = [[0.0, 0.0], [1.0, 1.0]];

/// Fixed XOR training set: a 4 × 2 input batch and its 4 × 1 labels.
#[derive(Debug, Clone, PartialEq)]
pub struct XorDataset {
    pub inputs: Matrix,
    pub targets: Matrix,
}

impl XorDataset {
    pub fn new() -> Self {
        XorDataset {
            inputs: Matrix::from_data(XOR_SAMPLES.iter().map(|(x, _)| x.to_vec()).collect()),
            targets: Matrix::from_data(XOR_SAMPLES.iter().map(|&(x, _)| vec![xor_label(x)]).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.rows
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.rows == 0
    }
}

impl Default for XorDataset {
    fn default() -> Self {
        XorDataset::new()
    }
}

/// XOR of two inputs thresholded at 0.5.
pub fn xor_label(input: [f64; 2]) -> f64 {
    if (input[0] >= 0.5) != (input[1] >= 0.5) { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_matches_truth_table() {
        let data = XorDataset::new();
        assert_eq!(data.len(), 4);
        assert_eq!(data.inputs.shape(), (4, 2));
        assert_eq!(data.targets.shape(), (4, 1));
        for (i, (x, y)) in XOR_SAMPLES.iter().enumerate() {
            assert_eq!(data.inputs.row(i), x);
            assert_eq!(data.targets.row(i), &[*y]);
        }
    }

    #[test]
    fn truth_table_partitions_the_inputs() {
        assert!(XOR_TRUE.iter().all(|&x| xor_label(x) == 1.0));
        assert!(XOR_FALSE.iter().all(|&x| xor_label(x) == 0.0));
    }
}

use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub, Mul};

use crate::error::{NnError, Result};

/// Dense row-major matrix. In a batch, each row is one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from caller-supplied rows, rejecting empty or ragged data.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(NnError::EmptyData),
        };
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(NnError::RaggedRows { row, expected: cols, actual: r.len() });
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    /// Unchecked constructor for data whose shape is already known to be rectangular.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, Vec::len),
            data
        }
    }

    /// A 1 × n matrix holding a single sample.
    pub fn row_vector(values: &[f64]) -> Matrix {
        Matrix::from_data(vec![values.to_vec()])
    }

    /// Samples every element from U(low, high).
    pub fn uniform<R: Rng + ?Sized>(rows: usize, cols: usize, low: f64, high: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = low + rng.gen::<f64>() * (high - low);
            }
        }

        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Both draws are in (0, 1] so ln() never sees zero.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Samples every element from N(0, std_dev²).
    pub fn normal<R: Rng + ?Sized>(rows: usize, cols: usize, std_dev: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * std_dev;
            }
        }
        res
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    /// Shape actually held in `data`; differs from `shape()` only for a
    /// deserialized matrix whose header disagrees with its rows.
    pub fn data_shape(&self) -> (usize, usize) {
        let cols = self.data.iter()
            .map(Vec::len)
            .find(|&len| len != self.cols)
            .unwrap_or(self.cols);
        (self.data.len(), cols)
    }

    pub fn is_well_formed(&self) -> bool {
        self.data_shape() == self.shape()
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Element-wise combination of two same-shape matrices.
    pub fn zip_map<F>(&self, other: &Matrix, functor: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_same_shape("zip_map", self, other);
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(other.data.iter())
                .map(|(row_a, row_b)| {
                    row_a.iter().zip(row_b.iter()).map(|(&a, &b)| functor(a, b)).collect()
                })
                .collect(),
        }
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, other: &Matrix) -> Matrix {
        self.zip_map(other, |a, b| a * b)
    }

    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|x| x * factor)
    }

    /// Column sums as a 1 × cols matrix; collapses a batch of row gradients.
    pub fn sum_rows(&self) -> Matrix {
        let mut res = Matrix::zeros(1, self.cols);
        for row in &self.data {
            for (acc, x) in res.data[0].iter_mut().zip(row) {
                *acc += x;
            }
        }
        res
    }

    /// Adds a 1 × cols row vector to every row.
    pub fn add_row_broadcast(&self, row: &Matrix) -> Matrix {
        assert!(
            row.rows == 1 && row.cols == self.cols,
            "Cannot broadcast {:?} over {:?}", row.shape(), self.shape()
        );
        let bias = &row.data[0];
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|r| r.iter().zip(bias).map(|(x, b)| x + b).collect())
                .collect(),
        }
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().flatten().sum()
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gathers the given rows, in order, into a new matrix.
    pub fn select_rows(&self, indices: &[usize]) -> Matrix {
        Matrix {
            rows: indices.len(),
            cols: self.cols,
            data: indices.iter().map(|&i| self.data[i].clone()).collect(),
        }
    }
}

fn assert_same_shape(op: &str, a: &Matrix, b: &Matrix) {
    if a.shape() != b.shape() {
        panic!("Matrices are of incorrect sizes for {op}: {:?} vs {:?}", a.shape(), b.shape())
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        assert_same_shape("add", self, rhs);
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        assert_same_shape("sub", self, rhs);
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes for mul: {:?} vs {:?}", self.shape(), rhs.shape())
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                for j in 0..res.cols {
                    res.data[i][j] += a * rhs.data[k][j];
                }
            }
        }

        res
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert!(matches!(Matrix::from_rows(vec![]), Err(NnError::EmptyData)));
        assert!(matches!(Matrix::from_rows(vec![vec![]]), Err(NnError::EmptyData)));
        assert!(matches!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(NnError::RaggedRows { row: 1, expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn matmul_and_transpose() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        let b = Matrix::from_data(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, -1.0]]);
        let c = &a * &b;
        assert_eq!(c.shape(), (3, 3));
        assert_eq!(c.data[0], vec![1.0, 2.0, 0.0]);
        assert_eq!(c.data[2], vec![5.0, 6.0, 4.0]);
        assert_eq!(a.transpose().data, vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
    }

    #[test]
    fn broadcast_and_column_sums() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::row_vector(&[10.0, 20.0]);
        assert_eq!(a.add_row_broadcast(&b).data, vec![vec![11.0, 22.0], vec![13.0, 24.0]]);
        assert_eq!(a.sum_rows().data, vec![vec![4.0, 6.0]]);
        assert_eq!(a.sum(), 10.0);
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn add_panics_on_shape_mismatch() {
        let _ = Matrix::zeros(2, 2) + Matrix::zeros(2, 3);
    }

    #[test]
    fn detects_header_disagreeing_with_data() {
        let mut m = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        assert!(m.is_well_formed());
        assert_eq!(m.row(1), &[3.0, 4.0]);
        m.data[1].pop();
        assert!(!m.is_well_formed());
        assert_eq!(m.data_shape(), (2, 1));
        m.rows = 3;
        assert_eq!(m.data_shape().0, 2);
    }

    #[test]
    fn uniform_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::uniform(20, 20, -0.5, 0.5, &mut rng);
        assert!(m.data.iter().flatten().all(|&x| (-0.5..0.5).contains(&x)));
    }
}

//! Dense, row-major matrix with dynamic dimensions.

use nalgebra::DMatrix;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> Matrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.data[i])
    }

    /// Returns `false` (and drops `value`) when the cell is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.offset(row, col) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }
}

impl<T: Clone> Matrix<T> {
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self[(i, i)].clone())
            .collect()
    }
}

impl<T: PartialEq> Matrix<T> {
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.rows {
            for c in (r + 1)..self.cols {
                if self[(r, c)] != self[(c, r)] {
                    return false;
                }
            }
        }
        true
    }
}

impl Matrix<f64> {
    pub fn row_sums(&self) -> Vec<f64> {
        (0..self.rows)
            .filter_map(|r| self.row(r))
            .map(|row| row.iter().sum())
            .collect()
    }

    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.rows, self.cols, &self.data)
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

//! Canonical 2D container and the coercions into it.

use ndarray::{Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix2, IxDyn};
use num_traits::AsPrimitive;
use serde_json::Value;

use crate::error::{Result, ShapeError};

/// Owned `f64` matrix with at least one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(Array2<f64>);

impl Matrix {
    pub fn new(array: Array2<f64>) -> Result<Self> {
        if array.ncols() == 0 {
            Err(ShapeError::NoColumns)
        } else {
            Ok(Self(array))
        }
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.0.nrows()
    }

    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.0.ncols()
    }

    #[must_use]
    pub fn view(&self) -> ArrayView2<f64> {
        self.0.view()
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.0.rows().into_iter()
    }

    #[must_use]
    pub fn into_inner(self) -> Array2<f64> {
        self.0
    }
}

/// Anything that can be coerced into a [`Matrix`].
pub trait IntoMatrix {
    fn into_matrix(self) -> Result<Matrix>;
}

impl IntoMatrix for Matrix {
    fn into_matrix(self) -> Result<Matrix> {
        Ok(self)
    }
}

impl IntoMatrix for &Matrix {
    fn into_matrix(self) -> Result<Matrix> {
        Ok(self.clone())
    }
}

impl<S, T> IntoMatrix for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: AsPrimitive<f64>,
{
    fn into_matrix(self) -> Result<Matrix> {
        Matrix::new(self.mapv(|x| x.as_()))
    }
}

impl<S, T> IntoMatrix for &ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: AsPrimitive<f64>,
{
    fn into_matrix(self) -> Result<Matrix> {
        Matrix::new(self.mapv(|x| x.as_()))
    }
}

impl<S, T> IntoMatrix for ArrayBase<S, IxDyn>
where
    S: Data<Elem = T>,
    T: AsPrimitive<f64>,
{
    fn into_matrix(self) -> Result<Matrix> {
        let ndim = self.ndim();
        self.into_dimensionality::<Ix2>()
            .map_err(|_| ShapeError::NotTwoDimensional { ndim })?
            .into_matrix()
    }
}

impl<T: AsPrimitive<f64>> IntoMatrix for &[Vec<T>] {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self)
    }
}

impl<T: AsPrimitive<f64>> IntoMatrix for &Vec<Vec<T>> {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self.as_slice())
    }
}

impl<T: AsPrimitive<f64>> IntoMatrix for Vec<Vec<T>> {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self.as_slice())
    }
}

impl<T: AsPrimitive<f64>> IntoMatrix for &[&[T]] {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self)
    }
}

impl<T: AsPrimitive<f64>, const N: usize> IntoMatrix for &[[T; N]] {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self)
    }
}

impl<T: AsPrimitive<f64>, const N: usize, const M: usize> IntoMatrix for &[[T; N]; M] {
    fn into_matrix(self) -> Result<Matrix> {
        from_rows::<T, _>(self.as_slice())
    }
}

impl IntoMatrix for &Value {
    fn into_matrix(self) -> Result<Matrix> {
        let ndim = json_ndim(self);
        let rows = match self {
            Value::Array(rows) if ndim == 2 => rows,
            _ => return Err(ShapeError::NotTwoDimensional { ndim }),
        };

        let mut parsed_rows = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_array().ok_or(ShapeError::NotARow { row: i })?;
            let row = row
                .iter()
                .enumerate()
                .map(|(j, value)| {
                    value
                        .as_f64()
                        .ok_or(ShapeError::NonNumeric { row: i, column: j })
                })
                .collect::<Result<Vec<f64>>>()?;
            parsed_rows.push(row);
        }
        from_rows::<f64, Vec<f64>>(&parsed_rows)
    }
}

impl IntoMatrix for Value {
    fn into_matrix(self) -> Result<Matrix> {
        (&self).into_matrix()
    }
}

/// Builds the matrix from a non-empty sequence of equally long rows.
///
/// An empty outer sequence carries no column count, so it is a 1D input.
fn from_rows<T, R>(rows: &[R]) -> Result<Matrix>
where
    T: AsPrimitive<f64>,
    R: AsRef<[T]>,
{
    let n_cols = match rows.first() {
        Some(row) => row.as_ref().len(),
        None => return Err(ShapeError::NotTwoDimensional { ndim: 1 }),
    };
    for (i, row) in rows.iter().enumerate() {
        let found = row.as_ref().len();
        if found != n_cols {
            return Err(ShapeError::JaggedRow {
                row: i,
                expected: n_cols,
                found,
            });
        }
    }
    Matrix::new(Array2::from_shape_fn((rows.len(), n_cols), |(i, j)| {
        rows[i].as_ref()[j].as_()
    }))
}

/// Nesting depth, following the first element at each level.
fn json_ndim(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.first().map_or(0, json_ndim),
        _ => 0,
    }
}

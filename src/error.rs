pub type Result<T = (), E = ShapeError> = std::result::Result<T, E>;

/// Input that cannot be treated as a non-empty-column 2D numeric matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("input must be a 2D array (matrix), got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },

    #[error("input must have at least one column")]
    NoColumns,

    #[error("row #{row} has {found} element(s), expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row #{row} is not a sequence")]
    NotARow { row: usize },

    #[error("element at row #{row}, column #{column} is not a number")]
    NonNumeric { row: usize, column: usize },
}

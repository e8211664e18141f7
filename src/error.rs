#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Shape Error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serde YAML Error: {0}")]
    SerdeYamlError(#[from] serde_yaml::Error),
    #[error("Serde JSON Error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Parse Output Format Error: {0}")]
    ParseOutputFormatError(#[from] ParseOutputFormatError),
    #[error("Matrix shape must be non-empty, got ({rows}, {cols}).")]
    EmptyShape { rows: usize, cols: usize },
    #[error("Matrix shape ({rows}, {cols}) is too large to allocate.")]
    ShapeTooLarge { rows: usize, cols: usize },
    #[error("Matrix needs at least 2 columns so one stays unmasked, got {cols}.")]
    NoValidColumns { cols: usize },
    #[error("Invalid column {column} is out of bounds for a matrix with {cols} columns.")]
    ColumnOutOfBounds { column: usize, cols: usize },
    #[error("Mask shape {mask:?} does not match data shape {data:?}.")]
    MaskShapeMismatch { data: (usize, usize), mask: (usize, usize) },
    #[error("Invalid ddof {ddof}: must be non-negative and below the valid count {count}.")]
    InvalidDdof { ddof: f64, count: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseOutputFormatError {
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

use thiserror::Error;
use crate::attribute::AttributeKind;

/// Errors raised by the column store, its serializers and the
/// matrix-based statistics routines.
#[derive(Error, Debug)]
pub enum Error {

    #[error("Attribute '{0}' not found")]
    UnknownAttribute(String),

    #[error("Attribute group '{0}' not found")]
    UnknownGroup(String),

    #[error("Attribute '{0}' already present")]
    DuplicateAttribute(String),

    #[error("Attribute group '{0}' already present")]
    DuplicateGroup(String),

    #[error("Attribute '{name}' is {found}, expected {expected}")]
    KindMismatch { name : String, expected : AttributeKind, found : AttributeKind },

    #[error("Row {row} out of bounds (rows: {rows})")]
    RowOutOfBounds { row : usize, rows : usize },

    #[error("Value has {found} bytes, attribute expects {expected}")]
    WidthMismatch { expected : usize, found : usize },

    #[error("Attributes cannot be added after rows were allocated")]
    Frozen,

    #[error("Invalid value for attribute '{name}': {value}")]
    InvalidValue { name : String, value : String },

    #[error("Expected exactly one class attribute, found {0}")]
    ClassCount(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid snapshot: {0}")]
    Format(String),

    #[error("Numerical failure: {0}")]
    Numerical(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

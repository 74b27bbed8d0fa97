/// Run-time attribute types (float, categorical, binary) and their packed
/// byte representation.
pub mod attribute;

/// Pages of columnar storage: byte-aligned and bit-packed attribute groups.
pub mod group;

/// Grid traits and their implementations: the dense column store, row/attribute
/// views and lazily filtered instances.
pub mod grid;

/// Value-wise transformations applied lazily on read (equal-width binning).
pub mod filter;

/// Stable radix sort of instances over one or more attributes.
pub mod sort;

/// Class attribute helpers, compatibility checks, copies, decomposition and
/// random sampling of instances.
pub mod ops;

/// Binary snapshots and CSV export.
pub mod io;

/// Conversion between float attributes and nalgebra matrices.
pub mod matrix;

/// Statistics leaf functions over slices and matrices: moments, quantiles,
/// information measures, regression, PCA, CCA and ROC curves.
pub mod stat;

mod error;

pub use error::{Error, Result};

pub use attribute::{Attribute, AttributeKind, AttributeSpec};

pub use grid::{DataGrid, UpdatableDataGrid, DenseInstances, InstancesView, LazilyFilteredInstances};

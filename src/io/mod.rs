/// Binary snapshots of dense instances (JSON layout header followed by the
/// raw attribute group pages).
pub mod snapshot;

/// CSV export. Instances are never parsed back from CSV.
pub mod csv;

pub use snapshot::*;

pub use self::csv::*;

//! Layout error types.

/// A [`Result`](std::result::Result) with a layout [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error planning or applying a layout.
///
/// Every variant except [`Error::Host`] is a caller contract violation:
/// the configuration or the document does not fit the layout.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// More seeds are walked than the field grows.
    #[error("seed count {seed_count} exceeds the field size {field_size}")]
    SeedCountExceedsField {
        /// Seeds walked by the strip.
        seed_count: usize,
        /// Seeds grown.
        field_size: usize,
    },
    /// The ring passes through more seeds than are in use.
    #[error("a ring through {points} seeds does not fit in the {seed_count} seeds in use")]
    RingExceedsSeeds {
        /// Ring vertices requested.
        points: usize,
        /// Seeds in use.
        seed_count: usize,
    },
    /// There are more devices than seeds to place them on.
    #[error("{devices} devices do not fit on {seed_count} seeds")]
    TooManyDevices {
        /// Devices to place.
        devices: usize,
        /// Seeds in use.
        seed_count: usize,
    },
    /// A snap grid must have a positive pitch.
    #[error("snap grid pitch must be positive, got {0}")]
    InvalidGrid(f64),
    /// A chained footprint has no designator text.
    #[error("footprint `{0}` has no designator text")]
    MissingDesignator(String),
    /// A chained footprint's designator has no number to order it by.
    #[error("designator `{designator}` of footprint `{id}` contains no number")]
    UnnumberedDesignator {
        /// Footprint id.
        id: String,
        /// The offending designator.
        designator: String,
    },
    /// A chained footprint's designator number does not fit a `u64`.
    #[error("the number in designator `{designator}` of footprint `{id}` is too large")]
    DesignatorNumberTooLarge {
        /// Footprint id.
        id: String,
        /// The offending designator.
        designator: String,
    },
    /// The host rejected a call or the document could not be read.
    #[error(transparent)]
    Host(#[from] easyeda::Error),
}

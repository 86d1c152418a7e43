//! Error type for the embedded designation dataset.
//!
//! Every variant describes a corrupted build artifact. The dataset is
//! generated offline and compiled into the binary, so none of these can be
//! produced by valid runtime input — a failed parse means the catalog
//! feature is unavailable for the rest of the process. A catalog id that is
//! simply absent from the dataset is not an error; lookups signal that with
//! `None`.

/// Corruption detected while parsing the compiled-in dataset.
///
/// The error is cached alongside the one-time catalog initialization and
/// cloned out to every caller, hence the `Clone` bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BayerError {
    /// Container shorter than the 4-byte size prefix.
    #[error("dataset container too short: {0} bytes")]
    TruncatedContainer(usize),

    /// The zlib stream is malformed.
    #[error("dataset inflate failed: {0}")]
    Inflate(String),

    /// Decompressed length differs from the declared size prefix.
    #[error("decompressed size mismatch: declared {declared}, got {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    /// Payload length is not a whole number of 8-byte records.
    #[error("payload of {0} bytes is not a whole number of records")]
    RaggedPayload(usize),

    /// A record carries catalog id 0, which the generator never emits.
    #[error("record {position} has a zero catalog id")]
    ZeroCatalogId { position: usize },

    /// Constellation index outside the 88-entry table.
    #[error("record {position}: constellation index {value} outside 1..=88")]
    ConstellationOutOfRange { position: usize, value: u8 },

    /// Bayer index outside the 24-entry Greek-letter table.
    #[error("record {position}: Bayer index {value} outside 1..=24")]
    BayerOutOfRange { position: usize, value: u8 },

    /// Two records share one catalog id.
    #[error("duplicate catalog id {catalog_id} at record {position}")]
    DuplicateCatalogId { catalog_id: u32, position: usize },
}

/// Convenience alias for `Result<T, BayerError>`.
pub type Result<T> = std::result::Result<T, BayerError>;

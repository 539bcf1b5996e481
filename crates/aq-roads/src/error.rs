use thiserror::Error;

/// Errors produced while building or loading a road catalog.
///
/// `NonPositiveLength` and `DuplicateId` reject the whole catalog; there is
/// no per-call failure for a catalog that built successfully.
#[derive(Debug, Error)]
pub enum RoadError {
    #[error("invalid road catalog: road {id:?} has non-positive length {length_km} km")]
    NonPositiveLength { id: String, length_km: f64 },

    #[error("invalid road catalog: duplicate road id {0:?}")]
    DuplicateId(String),

    #[error("road catalog parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoadError {
    /// `true` for defects in the catalog data itself, as opposed to a
    /// failure to read or parse it.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::NonPositiveLength { .. } | Self::DuplicateId(_))
    }
}

pub type RoadResult<T> = Result<T, RoadError>;

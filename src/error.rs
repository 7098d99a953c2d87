use thiserror::Error;

/// Reasons a donation record is rejected when the dataset is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("city name must not be empty")]
    EmptyCity,

    #[error("{city}: latitude {value} is outside [-90, 90]")]
    InvalidLatitude { city: String, value: f64 },

    #[error("{city}: longitude {value} is outside [-180, 180]")]
    InvalidLongitude { city: String, value: f64 },

    #[error("duplicate city '{0}' in dataset")]
    DuplicateCity(String),
}

/// Returned when a page name does not match any known page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{0}' (expected 'home' or 'map')")]
pub struct PageParseError(pub String);

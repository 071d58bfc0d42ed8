use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZooError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {family} type '{type_name}' (known: {})", .known.join(", "))]
    UnknownVariant {
        family:    &'static str,
        type_name: String,
        known:     &'static [&'static str],
    },
}

pub type ZooResult<T> = Result<T, ZooError>;

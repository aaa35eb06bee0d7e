use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SectionError {
    #[error("malformed polygon: {0}")]
    MalformedPolygon(String),
    #[error("unknown roof profile {0:?}")]
    UnknownProfile(String),
    #[error("roof profile {profile:?} has no variant {variant} ({available} configured)")]
    UnknownVariant {
        profile: String,
        variant: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, SectionError>;

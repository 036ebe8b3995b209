use thiserror::Error;

/// Failures of the angle queries on [`Vector2D`](super::vector::Vector2D).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// One of the operands has length 0, so no direction exists.
    #[error("angle is undefined for a zero-length vector")]
    ZeroLength,

    /// A component is NaN or infinite and the cosine could not be computed.
    #[error("angle is undefined for non-finite components")]
    NotFinite,
}

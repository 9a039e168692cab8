//! Errors

use thiserror::Error;

/// Errors reported by the drawing entry points
///
/// Allocation failure is not represented; it aborts like any other
/// allocation in Rust.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter was outside of what the operation accepts
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// A seed point was outside of the image
    #[error("seed point ({x}, {y}) outside of image")]
    OutOfRange { x: i64, y: i64 },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;
    #[test]
    fn messages() {
        let e = Error::InvalidParameter("circle: radius must be non-negative");
        assert_eq!(e.to_string(), "invalid parameter: circle: radius must be non-negative");
        let e = Error::OutOfRange { x: -1, y: 4 };
        assert_eq!(e.to_string(), "seed point (-1, 4) outside of image");
    }
}

use thiserror::Error;

/// Errors raised while building an expression.
///
/// Evaluation and differentiation never fail; out-of-domain inputs
/// yield infinities or NaN. Only construction can go wrong, when a
/// number has to move into a numeric domain that cannot hold it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A literal or constant has no representation in the target
    /// floating-point type.
    #[error("{value} is not representable as {domain}")]
    Unrepresentable {
        /// The offending number, as formatted by `Debug`.
        value: String,
        /// Name of the target numeric type.
        domain: &'static str,
    },
}

/// Result alias for fallible expression construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A vector was divided by an exact zero, or a zero vector was normalized.
    #[error("division by zero")]
    DivisionByZero,
    /// The determinant is zero, so there is no inverse.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
}

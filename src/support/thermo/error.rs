use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested state is outside the backend's valid domain.
    ///
    /// For example, a saturation query below the triple point.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The input state is invalid or inconsistent.
    ///
    /// For example, a superheated-vapor query at a compressed-liquid state.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The backend cannot answer this property/input combination.
    #[error("unsupported query: {context}")]
    Unsupported { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

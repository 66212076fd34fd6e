use thiserror::Error;

/// Contract failures of the pure pipeline stages.
///
/// `LimitZero` is a caller validation failure; the other variants are
/// breaches of preconditions the type system cannot express (a selected word
/// must come from the frequency map, and the size range must not be
/// inverted).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("word limit must be at least 1")]
    LimitZero,
    #[error("size range is inverted: {min} > {max}")]
    InvertedSizeRange { min: u32, max: u32 },
    #[error("word {word:?} is missing from the frequency map")]
    MissingCount { word: String },
}

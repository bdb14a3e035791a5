use crate::error::HandoffError;

/// Common Result type alias
pub type HandoffResult<T> = Result<T, HandoffError>;

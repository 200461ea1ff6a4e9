use thiserror::Error;

/// Failures that can abort the intake pipeline.
///
/// Client protocol errors (wrong method, missing fields) and rate-limit
/// rejections are not errors — they are decided in the handler and carry no
/// side effects. Everything here maps to a 500 response.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// The tracker answered, but with a non-success status.
    #[error("tracker rejected the issue (status {status}): {body}")]
    Tracker { status: u16, body: String },
    /// Anything else: store failures, transport failures, malformed input
    /// discovered past the validation step.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, IntakeError>;

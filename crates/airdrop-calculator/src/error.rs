use std::fmt;

/**
 * Calculator Errors
 *
 * Image export is the only fallible operation in the crate. Every engine
 * operation is total: malformed numeric input degrades to zero and the
 * arithmetic always produces a result. An `ExportError` is consumed inside
 * the share flow (logged, then replaced by the text-only fallback) and is
 * never surfaced to the user.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// No capture capability is present in the runtime
    CaptureUnavailable,
    /// The capture backend reported a failure
    CaptureFailed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::CaptureUnavailable => {
                write!(f, "image capture is not available in this runtime")
            }
            ExportError::CaptureFailed(reason) => {
                write!(f, "image capture failed: {reason}")
            }
        }
    }
}

impl std::error::Error for ExportError {}

//! Tracing/logging (shared setup).

/// Initialize process-wide tracing with the format named by `STOCKROOM_LOG_FORMAT`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), tracing::LogFormatError> {
    let format = tracing::LogFormat::from_env()?;
    tracing::init(format);
    Ok(())
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, LogFormatError};

//! Process-wide tracing setup shared by the catalog binaries.

/// Initialize structured logging for the process.
///
/// Safe to call multiple times; later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, formatting).
pub mod tracing;

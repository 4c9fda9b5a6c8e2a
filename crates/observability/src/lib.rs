//! Tracing and logging (shared setup).

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init_with_default};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        init_with_default("debug");
        ::tracing::info!(component = "observability", "still logging after repeated init");
    }
}

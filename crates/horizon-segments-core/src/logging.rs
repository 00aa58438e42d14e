//! Logging facilities for Horizon Segments.
//!
//! Horizon Segments uses the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_segments::layout=debug")
//!     .init();
//! ```
//!
//! Every event is emitted under one of the [`targets`] below so a single
//! subsystem can be enabled without the rest.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission.
    pub const SIGNAL: &str = "horizon_segments_core::signal";
    /// Text and icon measurement.
    pub const TEXT: &str = "horizon_segments_render::text";
    /// Segment layout passes and distribution decisions.
    pub const LAYOUT: &str = "horizon_segments::layout";
    /// Selection state transitions.
    pub const SELECTION: &str = "horizon_segments::selection";
    /// Touch hit-testing.
    pub const HIT_TEST: &str = "horizon_segments::hit_test";
    /// Style loading and saving.
    pub const STYLE: &str = "horizon_segments::style";
}


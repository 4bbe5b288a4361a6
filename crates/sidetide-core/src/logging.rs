//! Logging facilities for SideTide.
//!
//! SideTide uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("sidetide_core::assembler=debug")
//!         .init();
//! }
//! ```
//!
//! Assembly logs each declaration at `trace` level, replaced declarations and
//! the finished delegate at `debug` level. Every dispatch logs at `trace` level
//! under [`targets::DISPATCH`], so it stays silent unless explicitly enabled.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "sidetide_core";
    /// Delegate assembly.
    pub const ASSEMBLER: &str = "sidetide_core::assembler";
    /// Hook dispatch on assembled delegates.
    pub const DISPATCH: &str = "sidetide_core::dispatch";
    /// Attaching delegates to widgets.
    pub const ATTACH: &str = "sidetide::attach";
}

/// `tracing::trace!` with the core target.
#[macro_export]
macro_rules! sidetide_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "sidetide_core", $($arg)*)
    };
}

/// `tracing::debug!` with the core target.
#[macro_export]
macro_rules! sidetide_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "sidetide_core", $($arg)*)
    };
}

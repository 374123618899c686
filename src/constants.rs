// Constants for the notify-manager driver

/// Viewport width the simulated page starts with when none is given
pub(crate) const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Initial capacity for the live mobile notification queue
pub(crate) const INITIAL_TRACKED_CAPACITY: usize = 4;

/// Default log filter when `RUST_LOG` is unset
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

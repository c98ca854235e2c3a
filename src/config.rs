use log::Level;

/// Vertical offset in pixels past which the navbar gets its shadowed style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Show controller actions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

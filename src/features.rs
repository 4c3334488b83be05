//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod haptics;
pub mod settings;
pub mod switch;

pub use haptics::{HapticFeedback, TracingHaptics};
pub use settings::{Settings, SettingsError};

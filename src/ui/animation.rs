//! UI animations
//!
//! Small wrappers around `iced_anim` for effects that belong to the host
//! view rather than to the switch itself.

mod hover;

pub use hover::HoverGlow;

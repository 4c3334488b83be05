//! Reusable widgets without application-specific types

pub mod toast;

pub use toast::{Toast, ToastStyle, view_toast};

//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::app::message::ColorSlot;
use crate::features::switch::options::hex_color;
use crate::features::switch::{Outcome, SafetySwitch, SwitchOptions};
use crate::features::{Settings, TracingHaptics};
use crate::ui::animation::HoverGlow;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Settings and the switch itself
    pub core: CoreState,
    /// UI state (hover, drafts, notifications)
    pub ui: UiState,
}

/// Core state
pub struct CoreState {
    pub settings: Settings,
    pub switch: SafetySwitch,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let side = settings.display.control_size;
        let switch = SafetySwitch::new(
            settings.switch.clone(),
            Size::new(side, side),
            Box::new(TracingHaptics),
        );
        Self { settings, switch }
    }
}

/// Text currently in the colour fields
///
/// Kept apart from the options so a half-typed value does not get
/// overwritten on the next view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorDrafts {
    pub on: String,
    pub off: String,
    pub outer: String,
    pub inner: String,
}

impl ColorDrafts {
    pub fn from_options(options: &SwitchOptions) -> Self {
        let optional = |color: Option<iced::Color>| color.map(hex_color::to_hex).unwrap_or_default();
        Self {
            on: hex_color::to_hex(options.on_color),
            off: hex_color::to_hex(options.off_color),
            outer: optional(options.outer_color),
            inner: optional(options.inner_color),
        }
    }

    pub fn get(&self, slot: ColorSlot) -> &str {
        match slot {
            ColorSlot::On => &self.on,
            ColorSlot::Off => &self.off,
            ColorSlot::Outer => &self.outer,
            ColorSlot::Inner => &self.inner,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, value: String) {
        match slot {
            ColorSlot::On => self.on = value,
            ColorSlot::Off => self.off = value,
            ColorSlot::Outer => self.outer = value,
            ColorSlot::Inner => self.inner = value,
        }
    }
}

/// UI state
pub struct UiState {
    pub hover: HoverGlow,
    pub color_drafts: ColorDrafts,
    pub toast: Option<Toast>,
    /// Bumped for every shown toast so a stale expiry leaves a newer one alone
    toast_generation: u64,
    /// Completed toggles since launch
    pub toggle_count: u32,
    pub last_outcome: Option<Outcome>,
}

impl UiState {
    pub fn new(options: &SwitchOptions) -> Self {
        Self {
            hover: HoverGlow::new(),
            color_drafts: ColorDrafts::from_options(options),
            toast: None,
            toast_generation: 0,
            toggle_count: 0,
            last_outcome: None,
        }
    }

    /// Check if any UI animation is running
    pub fn has_active_animations(&self) -> bool {
        self.hover.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.hover.tick(now);
    }

    /// Replace the current toast, returning the generation its expiry must carry
    pub fn push_toast(&mut self, toast: Toast) -> u64 {
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.toast = Some(toast);
        self.toast_generation
    }

    /// Hide the toast if it is still the one from `generation`
    pub fn expire_toast(&mut self, generation: u64) -> bool {
        if generation != self.toast_generation || self.toast.is_none() {
            return false;
        }
        self.toast = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_leave_unset_colors_empty() {
        let drafts = ColorDrafts::from_options(&SwitchOptions::default());
        assert_eq!(drafts.get(ColorSlot::On), "#34C759");
        assert_eq!(drafts.get(ColorSlot::Off), "#FF3B30");
        assert!(drafts.get(ColorSlot::Outer).is_empty());
        assert!(drafts.get(ColorSlot::Inner).is_empty());
    }

    #[test]
    fn drafts_set_by_slot() {
        let mut drafts = ColorDrafts::default();
        drafts.set(ColorSlot::Inner, "#123".to_string());
        assert_eq!(drafts.inner, "#123");
        assert!(drafts.outer.is_empty());
    }

    #[test]
    fn stale_expiry_keeps_newer_toast() {
        let mut ui = UiState::new(&SwitchOptions::default());
        let first = ui.push_toast(Toast::success("Switched on"));
        let second = ui.push_toast(Toast::error("Could not save settings"));

        assert!(!ui.expire_toast(first));
        assert_eq!(
            ui.toast.as_ref().map(|toast| toast.message.as_str()),
            Some("Could not save settings")
        );

        assert!(ui.expire_toast(second));
        assert!(ui.toast.is_none());
        assert!(!ui.expire_toast(second));
    }
}

//! Settings update handlers

use iced::{Size, Task};

use crate::app::message::{ColorSlot, Message};
use crate::app::state::{App, ColorDrafts};
use crate::features::Settings;
use crate::features::settings::CONTROL_SIZE_RANGE;
use crate::features::switch::SwitchOptions;
use crate::features::switch::options::hex_color;
use crate::ui::widgets::Toast;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // Sliders save on release
            Message::UpdateSwitchTime(seconds) => {
                let seconds = *seconds;
                Some(self.update_switch_options(|options| options.switch_time = seconds))
            }
            Message::UpdateStartAngle(degrees) => {
                let degrees = *degrees;
                Some(self.update_switch_options(|options| options.start_angle = degrees))
            }
            // Width sliders save on release, the "Auto" reset right away
            Message::UpdateIndicatorWidth(width) => {
                let width = *width;
                let edit = |options: &mut SwitchOptions| options.indicator_width = width;
                Some(if width.is_some() {
                    self.update_switch_options(edit)
                } else {
                    self.save_switch_options(edit)
                })
            }
            Message::UpdateOuterWidth(width) => {
                let width = *width;
                let edit = |options: &mut SwitchOptions| options.outer_width = width;
                Some(if width.is_some() {
                    self.update_switch_options(edit)
                } else {
                    self.save_switch_options(edit)
                })
            }
            Message::UpdateControlSize(side) => {
                let side = side.clamp(*CONTROL_SIZE_RANGE.start(), *CONTROL_SIZE_RANGE.end());
                self.core.settings.display.control_size = side;
                self.core.switch.resize(Size::new(side, side));
                Some(Task::none())
            }

            Message::UpdateDeloading(enabled) => {
                let enabled = *enabled;
                Some(self.save_switch_options(|options| options.is_deloading = enabled))
            }
            Message::UpdateFullBackground(enabled) => {
                let enabled = *enabled;
                Some(self.save_switch_options(|options| options.full_background = enabled))
            }
            Message::UpdateEnabled(enabled) => {
                let enabled = *enabled;
                if !enabled {
                    // disabling mid-press drops the press
                    self.core.switch.abort();
                }
                Some(self.save_switch_options(|options| options.enabled = enabled))
            }

            Message::EditColor(slot, value) => {
                self.ui.color_drafts.set(*slot, value.clone());
                match parse_color_draft(*slot, value) {
                    Some(color) => {
                        let slot = *slot;
                        Some(self.save_switch_options(|options| set_color(options, slot, color)))
                    }
                    None => Some(Task::none()),
                }
            }

            Message::UpdateDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                self.sync_label_color();
                Some(Task::done(Message::SaveSettings))
            }

            Message::ResetSettings => {
                self.core.switch.abort();
                let defaults = Settings::default();
                let side = defaults.display.control_size;
                if let Err(e) = self.core.switch.set_options(defaults.switch.clone()) {
                    tracing::error!("Default switch options rejected: {}", e);
                }
                self.core.switch.resize(Size::new(side, side));
                self.ui.color_drafts = ColorDrafts::from_options(&defaults.switch);
                self.core.settings = defaults;
                self.sync_label_color();
                tracing::info!("Settings reset to defaults");
                Some(Task::batch([
                    self.show_toast(Toast::success("Settings reset")),
                    Task::done(Message::SaveSettings),
                ]))
            }

            Message::SaveSettings => {
                // the switch owns the live options, including its current value
                self.core.settings.switch = self.core.switch.options().clone();
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                    Some(self.show_toast(Toast::error(format!("Could not save settings: {}", e))))
                } else {
                    tracing::info!("Settings saved successfully");
                    Some(Task::none())
                }
            }

            _ => None,
        }
    }

    /// Apply an edit to the switch options; invalid results are rejected
    fn update_switch_options(&mut self, edit: impl FnOnce(&mut SwitchOptions)) -> Task<Message> {
        let mut options = self.core.switch.options().clone();
        edit(&mut options);

        match self.core.switch.set_options(options) {
            Ok(()) => {
                self.core.settings.switch = self.core.switch.options().clone();
                Task::none()
            }
            Err(e) => {
                tracing::warn!("Rejected switch options: {}", e);
                self.show_toast(Toast::error(e.to_string()))
            }
        }
    }

    /// Like [`Self::update_switch_options`], then persist
    fn save_switch_options(&mut self, edit: impl FnOnce(&mut SwitchOptions)) -> Task<Message> {
        let task = self.update_switch_options(edit);
        Task::batch([task, Task::done(Message::SaveSettings)])
    }
}

/// Colour from a field's text; `Some(None)` clears an optional colour
fn parse_color_draft(slot: ColorSlot, value: &str) -> Option<Option<iced::Color>> {
    if value.trim().is_empty() {
        return slot.is_optional().then_some(None);
    }
    hex_color::parse(value).ok().map(Some)
}

fn set_color(options: &mut SwitchOptions, slot: ColorSlot, color: Option<iced::Color>) {
    match slot {
        ColorSlot::On => {
            if let Some(color) = color {
                options.on_color = color;
            }
        }
        ColorSlot::Off => {
            if let Some(color) = color {
                options.off_color = color;
            }
        }
        ColorSlot::Outer => options.outer_color = color,
        ColorSlot::Inner => options.inner_color = color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_clears_only_optional_colors() {
        assert_eq!(parse_color_draft(ColorSlot::Outer, "  "), Some(None));
        assert_eq!(parse_color_draft(ColorSlot::On, ""), None);
    }

    #[test]
    fn partial_hex_is_not_applied() {
        assert_eq!(parse_color_draft(ColorSlot::Inner, "#12"), None);
        assert_eq!(
            parse_color_draft(ColorSlot::Inner, "#102030"),
            Some(Some(iced::Color::from_rgb8(0x10, 0x20, 0x30)))
        );
    }

    #[test]
    fn set_color_targets_slot() {
        let mut options = SwitchOptions::default();
        set_color(&mut options, ColorSlot::Outer, Some(iced::Color::BLACK));
        assert_eq!(options.outer_color, Some(iced::Color::BLACK));

        set_color(&mut options, ColorSlot::Outer, None);
        assert_eq!(options.outer_color, None);
    }
}

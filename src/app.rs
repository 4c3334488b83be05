//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::{ColorSlot, Message};
pub use state::{App, ColorDrafts, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the switch starts in the saved state
        let settings = crate::features::Settings::load();
        tracing::info!(
            "Loaded settings: is_on={}, switch_time={}s",
            settings.switch.is_on,
            settings.switch.switch_time
        );

        // 2. Initialize sub-states
        let ui = UiState::new(&settings.switch);
        let core = CoreState::new(settings);
        let mut app = Self { core, ui };
        app.sync_label_color();

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(760.0, 560.0),
            min_size: Some(iced::Size::new(560.0, 420.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "safety-switch".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        self.current_theme()
    }

    pub fn current_theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title reflecting the switch value
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        if self.core.switch.is_on() {
            "Safety Switch - On".to_string()
        } else {
            "Safety Switch - Off".to_string()
        }
    }

    /// Keep unset outer / inner colours in line with the theme
    pub fn sync_label_color(&mut self) {
        let label = crate::ui::theme::label_color(&self.current_theme());
        self.core.switch.set_label_color(label);
    }

    /// Subscriptions for animations and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        // 1. A held press needs frames so the threshold fires without input
        let switch_animating = self.core.switch.is_animating();

        // 2. UI animations
        let ui_animating = self.ui.has_active_animations();

        // 3. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 4. Animation subscription (vsync rate when needed)
        let animation_sub =
            if subscription_logic::needs_animation_subscription(switch_animating, ui_animating) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        iced::Subscription::batch([close_request_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(switch_animating: bool, ui_animating: bool) -> bool {
        switch_animating || ui_animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_app_needs_no_frames() {
        assert!(!needs_animation_subscription(false, false));
    }

    #[test]
    fn held_press_needs_frames() {
        // the long-press threshold is only checked on ticks when the
        // pointer stays still
        assert!(needs_animation_subscription(true, false));
    }

    #[test]
    fn hover_fade_needs_frames() {
        assert!(needs_animation_subscription(false, true));
        assert!(needs_animation_subscription(true, true));
    }
}

//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, column, container, mouse_area, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::switch::Outcome;
use crate::ui::primitives::{SafetySwitchCanvas, view_safety_switch};
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let content = row![
            self.view_switch_area(),
            components::options_panel::view(
                &self.core.settings,
                self.core.switch.options(),
                &self.ui.color_drafts,
            ),
        ]
        .spacing(24)
        .padding(24)
        .height(Fill);

        let base = container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![base, toast_overlay].into()
    }

    /// The switch with its status line
    fn view_switch_area(&self) -> Element<'_, Message> {
        let switch = &self.core.switch;
        let side = self.core.settings.display.control_size;

        let canvas = SafetySwitchCanvas::new(switch, Instant::now(), Message::Press)
            .glow(self.ui.hover.alpha());
        let control = mouse_area(view_safety_switch(canvas, side))
            .on_enter(Message::HoverChanged(true))
            .on_exit(Message::HoverChanged(false));

        let status = if switch.is_on() { "ON" } else { "OFF" };
        let status_text = text(status).size(28).style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

        let hint = if !switch.is_enabled() {
            "Disabled".to_string()
        } else if switch.is_animating() {
            "Keep holding...".to_string()
        } else if self.ui.last_outcome == Some(Outcome::Aborted) {
            format!(
                "Released early, hold for the full {:.1} s",
                switch.options().switch_time
            )
        } else {
            format!(
                "Hold for {:.1} s to switch {}",
                switch.options().switch_time,
                if switch.is_on() { "off" } else { "on" }
            )
        };
        let hint_text = text(hint).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

        let count_text = text(format!("Toggles this session: {}", self.ui.toggle_count))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::settings_desc(theme)),
            });

        container(
            column![
                control,
                Space::new().height(24),
                status_text,
                Space::new().height(6),
                hint_text,
                Space::new().height(4),
                count_text,
            ]
            .align_x(Alignment::Center),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
    }
}

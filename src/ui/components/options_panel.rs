//! Options panel component
//!
//! Every switch option as a labelled row, plus display settings and reset.
//! Sliders apply live and persist on release; toggles and valid colour
//! text persist immediately.

use iced::widget::{
    Space, button, column, container, row, scrollable, slider, text, text_input, toggler,
};
use iced::{Alignment, Background, Element, Fill, Length};

use crate::app::{ColorDrafts, ColorSlot, Message};
use crate::features::Settings;
use crate::features::settings::CONTROL_SIZE_RANGE;
use crate::features::switch::SwitchOptions;
use crate::features::switch::options::{INDICATOR_WIDTH_RATIO, OUTER_WIDTH_RATIO, hex_color};
use crate::ui::theme;

const PANEL_WIDTH: f32 = 340.0;
const SLIDER_WIDTH: f32 = 140.0;
/// Upper end of the explicit width sliders
const MAX_STROKE_WIDTH: f32 = 40.0;

/// Options panel view
pub fn view<'a>(
    settings: &'a Settings,
    options: &'a SwitchOptions,
    drafts: &'a ColorDrafts,
) -> Element<'a, Message> {
    let side = settings.display.control_size;

    let content = column![
        section_header("Switch"),
        setting_row(
            "On",
            Some("Set the value directly"),
            toggler(options.is_on)
                .on_toggle(Message::SetOn)
                .size(20)
                .into()
        ),
        divider(),
        setting_row(
            "Enabled",
            None,
            toggler(options.enabled)
                .on_toggle(Message::UpdateEnabled)
                .size(20)
                .into()
        ),
        divider(),
        slider_row(
            "Hold time",
            format!("{:.2} s", options.switch_time),
            slider(0.25..=5.0, options.switch_time, Message::UpdateSwitchTime)
                .step(0.05)
                .on_release(Message::SaveSettings)
                .width(Length::Fixed(SLIDER_WIDTH))
                .into()
        ),
        divider(),
        slider_row(
            "Start angle",
            format!("{:.0}°", options.start_angle),
            slider(0.0..=360.0, options.start_angle, Message::UpdateStartAngle)
                .step(1.0)
                .on_release(Message::SaveSettings)
                .width(Length::Fixed(SLIDER_WIDTH))
                .into()
        ),
        divider(),
        setting_row(
            "Deloading",
            Some("Retract the indicator instead of drawing it"),
            toggler(options.is_deloading)
                .on_toggle(Message::UpdateDeloading)
                .size(20)
                .into()
        ),
        divider(),
        setting_row(
            "Full background",
            Some("Fill the whole disc with the outer colour"),
            toggler(options.full_background)
                .on_toggle(Message::UpdateFullBackground)
                .size(20)
                .into()
        ),
        Space::new().height(20),
        section_header("Strokes"),
        width_row(
            "Indicator width",
            options.indicator_width,
            INDICATOR_WIDTH_RATIO * side,
            Message::UpdateIndicatorWidth
        ),
        divider(),
        width_row(
            "Outer width",
            options.outer_width,
            OUTER_WIDTH_RATIO * side,
            Message::UpdateOuterWidth
        ),
        Space::new().height(20),
        section_header("Colours"),
        color_rows(drafts),
        Space::new().height(20),
        section_header("Display"),
        setting_row(
            "Dark mode",
            None,
            toggler(settings.display.dark_mode)
                .on_toggle(Message::UpdateDarkMode)
                .size(20)
                .into()
        ),
        divider(),
        slider_row(
            "Control size",
            format!("{:.0} px", side),
            slider(CONTROL_SIZE_RANGE, side, Message::UpdateControlSize)
                .step(1.0)
                .on_release(Message::SaveSettings)
                .width(Length::Fixed(SLIDER_WIDTH))
                .into()
        ),
        Space::new().height(20),
        row![
            Space::new().width(Fill),
            button(text("Reset to defaults").size(13))
                .padding([8, 16])
                .style(theme::secondary_button)
                .on_press(Message::ResetSettings),
        ],
    ]
    .spacing(0)
    .padding(20);

    container(scrollable(content).height(Fill))
        .width(PANEL_WIDTH)
        .height(Fill)
        .style(theme::panel)
        .into()
}

fn section_header(title: &str) -> Element<'static, Message> {
    container(
        text(title.to_string())
            .size(16)
            .style(|theme| text::Style {
                color: Some(theme::settings_section_title(theme)),
            }),
    )
    .padding([8, 0])
    .into()
}

/// Setting row with label on left and control on right
fn setting_row<'a>(
    label: &str,
    description: Option<&str>,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let label_text = text(label.to_string()).size(14).style(|theme| text::Style {
        color: Some(theme::settings_label(theme)),
    });

    let label_section: Element<'a, Message> = match description {
        Some(desc) => column![
            label_text,
            text(desc.to_string()).size(11).style(|theme| text::Style {
                color: Some(theme::settings_desc(theme)),
            }),
        ]
        .spacing(2)
        .into(),
        None => label_text.into(),
    };

    container(
        row![label_section, Space::new().width(Fill), control]
            .align_y(Alignment::Center)
            .width(Fill),
    )
    .padding([10, 0])
    .into()
}

/// Row with a slider and its formatted value
fn slider_row<'a>(
    label: &str,
    value: String,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    let value_text = text(value).size(12).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });
    setting_row(
        label,
        None,
        row![value_text, Space::new().width(8), control]
            .align_y(Alignment::Center)
            .into(),
    )
}

/// Explicit stroke width with an "Auto" button restoring the proportional default
fn width_row<'a>(
    label: &str,
    explicit: Option<f32>,
    automatic: f32,
    on_change: fn(Option<f32>) -> Message,
) -> Element<'a, Message> {
    let current = explicit.unwrap_or(automatic).min(MAX_STROKE_WIDTH);
    let value = match explicit {
        Some(width) => format!("{:.1} px", width),
        None => format!("auto ({:.1} px)", automatic),
    };

    let auto_button = button(text("Auto").size(11))
        .padding([4, 10])
        .style(theme::secondary_button)
        .on_press_maybe(explicit.map(|_| on_change(None)));

    setting_row(
        label,
        Some(&value),
        row![
            slider(0.0..=MAX_STROKE_WIDTH, current, move |width| on_change(Some(width)))
                .step(0.5)
                .on_release(Message::SaveSettings)
                .width(Length::Fixed(SLIDER_WIDTH - 50.0)),
            Space::new().width(8),
            auto_button,
        ]
        .align_y(Alignment::Center)
        .into(),
    )
}

fn color_rows(drafts: &ColorDrafts) -> Element<'_, Message> {
    let rows = ColorSlot::ALL.into_iter().map(|slot| {
        let value = drafts.get(slot);
        let valid = if value.trim().is_empty() {
            slot.is_optional()
        } else {
            hex_color::parse(value).is_ok()
        };
        let placeholder = if slot.is_optional() {
            "label colour"
        } else {
            "#RRGGBB"
        };

        let swatch_color = hex_color::parse(value).ok();
        let swatch = container(Space::new().width(18).height(18)).style(move |theme| {
            container::Style {
                background: Some(Background::Color(
                    swatch_color.unwrap_or_else(|| theme::label_color(theme)),
                )),
                border: iced::Border {
                    radius: 9.0.into(),
                    width: 1.0,
                    color: theme::divider(theme),
                },
                ..Default::default()
            }
        });

        let input = text_input(placeholder, value)
            .on_input(move |text| Message::EditColor(slot, text))
            .size(13)
            .padding([6, 10])
            .width(110)
            .style(move |theme, status| {
                let style = theme::color_input(theme, status);
                if valid {
                    style
                } else {
                    text_input::Style {
                        border: iced::Border {
                            color: theme::danger(theme),
                            ..style.border
                        },
                        ..style
                    }
                }
            });

        setting_row(
            slot.label(),
            None,
            row![swatch, Space::new().width(8), input]
                .align_y(Alignment::Center)
                .into(),
        )
    });

    column(rows).spacing(0).into()
}

fn divider() -> Element<'static, Message> {
    container(Space::new().width(Fill).height(1))
        .style(|theme| container::Style {
            background: Some(Background::Color(theme::divider(theme))),
            ..Default::default()
        })
        .width(Fill)
        .into()
}

//! Designer-facing switch options and the geometry derived from them
//!
//! Options are plain data. [`configure`] turns them plus the control bounds
//! into a [`SwitchGeometry`]; callers re-run it whenever either changes.

use iced::{Color, Rectangle, Size};
use serde::{Deserialize, Serialize};

use super::geometry::{self, Shape};
use super::indicator::IndicatorArc;
use crate::features::settings::SettingsError;

/// Default indicator stroke width relative to the control side
pub const INDICATOR_WIDTH_RATIO: f32 = 0.09;
/// Default outer ring width relative to the control side
pub const OUTER_WIDTH_RATIO: f32 = 0.025;
/// Longest accepted hold time in seconds
pub const MAX_SWITCH_TIME: f32 = 3600.0;

/// System green, the default "on" colour
pub const DEFAULT_ON_COLOR: Color = Color::from_rgb(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0);
/// System red, the default "off" colour
pub const DEFAULT_OFF_COLOR: Color = Color::from_rgb(1.0, 59.0 / 255.0, 48.0 / 255.0);

/// Switch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchOptions {
    /// Initial state; kept in sync with the switch after every toggle
    pub is_on: bool,
    #[serde(with = "hex_color")]
    pub on_color: Color,
    #[serde(with = "hex_color")]
    pub off_color: Color,
    /// Outer ring colour, theme label colour when unset
    #[serde(with = "hex_color::optional")]
    pub outer_color: Option<Color>,
    /// Inner disc colour, theme label colour when unset
    #[serde(with = "hex_color::optional")]
    pub inner_color: Option<Color>,
    /// Indicator stroke width in logical pixels, 9% of the side when unset
    pub indicator_width: Option<f32>,
    /// Outer ring width in logical pixels, 2.5% of the side when unset
    pub outer_width: Option<f32>,
    /// Where the indicator starts, degrees clockwise from 12 o'clock
    pub start_angle: f32,
    /// Hold time needed to toggle, in seconds
    pub switch_time: f32,
    /// Retract the stroke instead of growing it
    pub is_deloading: bool,
    /// Paint the outer layer as a full disc instead of a ring
    pub full_background: bool,
    /// Disabled switches ignore presses
    pub enabled: bool,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            is_on: true,
            on_color: DEFAULT_ON_COLOR,
            off_color: DEFAULT_OFF_COLOR,
            outer_color: None,
            inner_color: None,
            indicator_width: None,
            outer_width: None,
            start_angle: 0.0,
            switch_time: 1.0,
            is_deloading: false,
            full_background: false,
            enabled: true,
        }
    }
}

impl SwitchOptions {
    /// Reject values the switch cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.switch_time.is_finite()
            || self.switch_time <= 0.0
            || self.switch_time > MAX_SWITCH_TIME
        {
            return Err(SettingsError::Invalid(format!(
                "switch_time must be between 0 and {} seconds, got {}",
                MAX_SWITCH_TIME, self.switch_time
            )));
        }
        if !self.start_angle.is_finite() {
            return Err(SettingsError::Invalid(
                "start_angle must be finite".to_string(),
            ));
        }
        for (name, width) in [
            ("indicator_width", self.indicator_width),
            ("outer_width", self.outer_width),
        ] {
            match width {
                Some(width) if !width.is_finite() || width < 0.0 => {
                    return Err(SettingsError::Invalid(format!(
                        "{} must be a non-negative length, got {}",
                        name, width
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Hold threshold, clamped to the accepted range
    pub fn switch_duration(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f32(self.switch_time.clamp(0.0, MAX_SWITCH_TIME))
            .unwrap_or(std::time::Duration::ZERO)
    }

    /// Resolve colours against the theme's label colour
    pub fn palette(&self, label: Color) -> Palette {
        Palette {
            on: self.on_color,
            off: self.off_color,
            outer: self.outer_color.unwrap_or(label),
            inner: self.inner_color.unwrap_or(label),
        }
    }
}

/// Resolved colours for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub on: Color,
    pub off: Color,
    pub outer: Color,
    pub inner: Color,
}

impl Palette {
    pub fn for_state(&self, is_on: bool) -> Color {
        if is_on { self.on } else { self.off }
    }
}

/// Layout of the switch layers inside the control bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    /// Square the switch is drawn in, centred in the bounds
    pub frame: Rectangle,
    pub outer_width: f32,
    pub indicator_width: f32,
    pub start_angle: f32,
    pub full_background: bool,
}

/// Derive the layer geometry for `options` laid out in `bounds`
pub fn configure(options: &SwitchOptions, bounds: Size) -> SwitchGeometry {
    let frame = geometry::centered_square(bounds);
    let side = frame.width;

    let resolve = |explicit: Option<f32>, ratio: f32| match explicit {
        Some(width) if width.is_finite() => width.max(0.0),
        _ => ratio * side,
    };

    SwitchGeometry {
        frame,
        outer_width: resolve(options.outer_width, OUTER_WIDTH_RATIO),
        indicator_width: resolve(options.indicator_width, INDICATOR_WIDTH_RATIO),
        start_angle: if options.start_angle.is_finite() {
            options.start_angle
        } else {
            0.0
        },
        full_background: options.full_background,
    }
}

impl SwitchGeometry {
    pub fn side(&self) -> f32 {
        self.frame.width
    }

    /// Outer ring, or the whole disc with a full background
    pub fn outer_layer(&self) -> Shape {
        if self.full_background {
            geometry::circle(self.frame)
        } else {
            geometry::donut(self.frame, self.outer_width)
        }
    }

    /// Ring showing the current state colour
    pub fn state_ring(&self) -> Shape {
        geometry::donut(
            geometry::inset(self.frame, self.outer_width),
            self.indicator_width,
        )
    }

    pub fn inner_circle(&self) -> Shape {
        geometry::circle(geometry::inset(
            self.frame,
            self.outer_width + self.indicator_width,
        ))
    }

    /// Centre-line box of the indicator stroke
    pub fn indicator_box(&self) -> Rectangle {
        geometry::inset(self.frame, self.outer_width + 0.5 * self.indicator_width)
    }

    pub fn indicator(&self, color: Color) -> IndicatorArc {
        IndicatorArc::layout(
            self.indicator_box(),
            self.indicator_width,
            color,
            self.start_angle,
        )
    }
}

/// `#RRGGBB` / `#RRGGBBAA` colour strings
pub mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::features::settings::SettingsError;

    pub fn to_hex(color: Color) -> String {
        let [r, g, b, a] = color.into_rgba8();
        if a == u8::MAX {
            format!("#{}", hex::encode_upper([r, g, b]))
        } else {
            format!("#{}", hex::encode_upper([r, g, b, a]))
        }
    }

    pub fn parse(value: &str) -> Result<Color, SettingsError> {
        let digits = value.trim().trim_start_matches('#');
        let bytes = hex::decode(digits)
            .map_err(|e| SettingsError::Invalid(format!("bad colour '{}': {}", value, e)))?;

        match bytes.as_slice() {
            [r, g, b] => Ok(Color::from_rgb8(*r, *g, *b)),
            [r, g, b, a] => Ok(Color::from_rgba8(*r, *g, *b, f32::from(*a) / 255.0)),
            _ => Err(SettingsError::Invalid(format!(
                "bad colour '{}': expected 6 or 8 hex digits",
                value
            ))),
        }
    }

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(serde::de::Error::custom)
    }

    pub mod optional {
        use iced::Color;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            color: &Option<Color>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match color {
                Some(color) => serializer.serialize_some(&super::to_hex(*color)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Color>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|value| super::parse(&value).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_widths_follow_side() {
        let geometry = configure(&SwitchOptions::default(), Size::new(200.0, 200.0));
        assert!((geometry.indicator_width - 18.0).abs() < 1e-4);
        assert!((geometry.outer_width - 5.0).abs() < 1e-4);
    }

    #[test]
    fn explicit_widths_win() {
        let options = SwitchOptions {
            indicator_width: Some(12.0),
            outer_width: Some(3.0),
            ..Default::default()
        };
        let geometry = configure(&options, Size::new(200.0, 200.0));
        assert_eq!(geometry.indicator_width, 12.0);
        assert_eq!(geometry.outer_width, 3.0);
    }

    #[test]
    fn layers_nest_inside_each_other() {
        let options = SwitchOptions {
            indicator_width: Some(10.0),
            outer_width: Some(5.0),
            ..Default::default()
        };
        let geometry = configure(&options, Size::new(100.0, 100.0));

        match geometry.state_ring() {
            Shape::Donut {
                outer_radius,
                inner_radius,
                ..
            } => {
                assert_eq!(outer_radius, 45.0);
                assert_eq!(inner_radius, 35.0);
            }
            other => panic!("expected donut, got {:?}", other),
        }
        assert_eq!(geometry.inner_circle().radius(), 35.0);
        // stroke centre line sits in the middle of the state ring
        assert_eq!(geometry.indicator(Color::WHITE).shape.radius(), 40.0);
    }

    #[test]
    fn full_background_fills_outer_disc() {
        let options = SwitchOptions {
            full_background: true,
            ..Default::default()
        };
        let geometry = configure(&options, Size::new(100.0, 100.0));
        assert!(matches!(geometry.outer_layer(), Shape::Circle { radius, .. } if radius == 50.0));

        let ring = configure(&SwitchOptions::default(), Size::new(100.0, 100.0));
        assert!(matches!(ring.outer_layer(), Shape::Donut { .. }));
    }

    #[test]
    fn empty_bounds_degrade_to_empty_layers() {
        let geometry = configure(&SwitchOptions::default(), Size::ZERO);
        assert!(geometry.outer_layer().is_empty());
        assert!(geometry.state_ring().is_empty());
        assert!(geometry.inner_circle().is_empty());
        assert!(geometry.indicator(Color::WHITE).shape.is_empty());
    }

    #[test]
    fn validation_rejects_bad_switch_time() {
        let mut options = SwitchOptions::default();
        assert!(options.validate().is_ok());

        options.switch_time = 0.0;
        assert!(options.validate().is_err());
        options.switch_time = f32::NAN;
        assert!(options.validate().is_err());
    }

    #[test]
    fn huge_switch_time_is_rejected_without_panicking() {
        let options = SwitchOptions {
            switch_time: 1e20,
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(SettingsError::Invalid(_))));
        assert_eq!(
            options.switch_duration(),
            std::time::Duration::from_secs_f32(MAX_SWITCH_TIME)
        );

        let limit = SwitchOptions {
            switch_time: MAX_SWITCH_TIME,
            ..Default::default()
        };
        assert!(limit.validate().is_ok());
    }

    #[test]
    fn validation_rejects_negative_width() {
        let options = SwitchOptions {
            outer_width: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(options.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn hex_colors_parse_with_and_without_alpha() {
        assert_eq!(
            hex_color::parse("#34C759").unwrap(),
            Color::from_rgb8(0x34, 0xC7, 0x59)
        );
        let translucent = hex_color::parse("ff000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert!(hex_color::parse("#12345").is_err());
        assert!(hex_color::parse("not a colour").is_err());
    }

    #[test]
    fn hex_colors_format_upper_case() {
        assert_eq!(hex_color::to_hex(Color::from_rgb8(255, 59, 48)), "#FF3B30");
        assert_eq!(
            hex_color::to_hex(Color::from_rgba8(0, 0, 0, 0.0)),
            "#00000000"
        );
    }

    #[test]
    fn options_read_from_partial_json() {
        let options: SwitchOptions =
            serde_json::from_str(r##"{"is_on": false, "on_color": "#0000FF", "switch_time": 2.5}"##)
                .unwrap();
        assert!(!options.is_on);
        assert_eq!(options.on_color, Color::from_rgb8(0, 0, 255));
        assert_eq!(options.switch_time, 2.5);
        assert_eq!(options.off_color, DEFAULT_OFF_COLOR);
        assert_eq!(options.outer_color, None);
    }
}

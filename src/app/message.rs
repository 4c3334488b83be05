//! Application messages

use crate::ui::primitives::PressEvent;

/// Colour options editable as hex text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    On,
    Off,
    Outer,
    Inner,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 4] = [
        ColorSlot::On,
        ColorSlot::Off,
        ColorSlot::Outer,
        ColorSlot::Inner,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::On => "On colour",
            ColorSlot::Off => "Off colour",
            ColorSlot::Outer => "Outer ring",
            ColorSlot::Inner => "Inner disc",
        }
    }

    /// Outer and inner fall back to the theme label colour when left empty
    pub fn is_optional(&self) -> bool {
        matches!(self, ColorSlot::Outer | ColorSlot::Inner)
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Switch ============
    /// Pointer input on the switch canvas
    Press(PressEvent),
    /// Cursor entered or left the switch
    HoverChanged(bool),
    /// Frame tick while something animates
    AnimationTick,
    /// Set the switch value without a press
    SetOn(bool),

    // ============ Switch options ============
    UpdateSwitchTime(f32),
    UpdateStartAngle(f32),
    /// `None` restores the proportional default
    UpdateIndicatorWidth(Option<f32>),
    /// `None` restores the proportional default
    UpdateOuterWidth(Option<f32>),
    UpdateDeloading(bool),
    UpdateFullBackground(bool),
    UpdateEnabled(bool),
    /// Hex text typed into one of the colour fields
    EditColor(ColorSlot, String),

    // ============ Display ============
    UpdateDarkMode(bool),
    UpdateControlSize(f32),

    // ============ Settings ============
    SaveSettings,
    ResetSettings,

    // ============ Notifications ============
    /// Expiry of the toast with this generation
    HideToast(u64),

    // ============ Window ============
    RequestClose,
}

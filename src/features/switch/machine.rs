//! Press / transition state machine
//!
//! A press starts a transition: the state ring goes clear and the indicator
//! stroke animates in the colour of the state the switch would move to.
//! Holding in bounds until the long-press threshold completes the transition
//! and toggles the switch; releasing early or dragging out of bounds aborts
//! it and restores the previous look.
//!
//! All inputs carry the instant they happened at. The host feeds frame
//! ticks while a press is held so the threshold can fire without further
//! input.

use std::time::{Duration, Instant};

use iced::{Color, Point, Rectangle, Size};

use super::animation::{AnimationSpec, Direction, ProgressAnimation};
use super::gesture::{LongPressRecognizer, Recognition};
use super::layers::SwitchLayers;
use super::options::{Palette, SwitchGeometry, SwitchOptions, configure};
use crate::features::haptics::HapticFeedback;
use crate::features::settings::SettingsError;

/// Persistent switch value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn from_bool(is_on: bool) -> Self {
        if is_on { SwitchState::On } else { SwitchState::Off }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, SwitchState::On)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SwitchState::On => SwitchState::Off,
            SwitchState::Off => SwitchState::On,
        }
    }
}

/// Where the machine is right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle(SwitchState),
    /// A press is held; `from` is the state it will revert to on abort
    Pressing { from: SwitchState },
}

/// One held press, alive from press-begin to its abort or completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressSession {
    origin: Point,
    position: Point,
    started_at: Instant,
    /// Hit-test bounds captured when the press began
    bounds: Rectangle,
}

impl PressSession {
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

/// Indicator stroke colour and state ring fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    pub indicator: Color,
    pub state: Color,
}

impl ColorState {
    /// Ring shows the current state, indicator previews the other one
    pub fn at_rest(state: SwitchState, palette: &Palette) -> Self {
        Self {
            indicator: palette.for_state(!state.is_on()),
            state: palette.for_state(state.is_on()),
        }
    }

    /// Ring cleared so the indicator stroke shows through
    pub fn pressing(from: SwitchState, palette: &Palette) -> Self {
        Self {
            indicator: palette.for_state(from.toggled().is_on()),
            state: Color::TRANSPARENT,
        }
    }
}

/// What an input did to the switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// A press began and the indicator started
    Started,
    /// The press is still being held
    Held,
    /// The press ended without toggling
    Aborted,
    /// The press toggled the switch into this state
    Completed(SwitchState),
}

pub struct SafetySwitch {
    state: SwitchState,
    session: Option<PressSession>,
    animation: Option<ProgressAnimation>,
    recognizer: LongPressRecognizer,
    options: SwitchOptions,
    size: Size,
    geometry: SwitchGeometry,
    label_color: Color,
    palette: Palette,
    colors: ColorState,
    haptics: Box<dyn HapticFeedback>,
}

impl std::fmt::Debug for SafetySwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafetySwitch")
            .field("state", &self.state)
            .field("session", &self.session)
            .field("animation", &self.animation)
            .field("options", &self.options)
            .field("size", &self.size)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl SafetySwitch {
    /// Create an idle switch laid out in `size`
    ///
    /// Invalid options are replaced by the defaults.
    pub fn new(options: SwitchOptions, size: Size, haptics: Box<dyn HapticFeedback>) -> Self {
        let options = match options.validate() {
            Ok(()) => options,
            Err(e) => {
                tracing::warn!("Invalid switch options ({}), using defaults", e);
                SwitchOptions::default()
            }
        };

        let state = SwitchState::from_bool(options.is_on);
        let label_color = Color::WHITE;
        let palette = options.palette(label_color);

        Self {
            state,
            session: None,
            animation: None,
            recognizer: LongPressRecognizer::new(options.switch_duration()),
            geometry: configure(&options, size),
            size,
            label_color,
            palette,
            colors: ColorState::at_rest(state, &palette),
            options,
            haptics,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn phase(&self) -> Phase {
        if self.session.is_some() {
            Phase::Pressing { from: self.state }
        } else {
            Phase::Idle(self.state)
        }
    }

    /// True while a press is held
    pub fn is_animating(&self) -> bool {
        debug_assert_eq!(self.session.is_some(), self.animation.is_some());
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PressSession> {
        self.session.as_ref()
    }

    pub fn animation(&self) -> Option<&ProgressAnimation> {
        self.animation.as_ref()
    }

    pub fn colors(&self) -> ColorState {
        self.colors
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn geometry(&self) -> &SwitchGeometry {
        &self.geometry
    }

    pub fn options(&self) -> &SwitchOptions {
        &self.options
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// Hit-test bounds in local coordinates
    pub fn bounds(&self) -> Rectangle {
        Rectangle::with_size(self.size)
    }

    /// Layers to paint at `now`
    pub fn layers(&self, now: Instant) -> SwitchLayers {
        SwitchLayers::compose(
            &self.geometry,
            &self.palette,
            self.colors.indicator,
            self.colors.state,
            self.animation.map(|animation| animation.sample(now)),
        )
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Replace the options and re-derive everything that depends on them
    ///
    /// A press in flight keeps its threshold, bounds and animation; the new
    /// values apply from the next press. `is_on` is only taken while idle.
    pub fn set_options(&mut self, mut options: SwitchOptions) -> Result<(), SettingsError> {
        options.validate()?;

        if self.session.is_some() {
            options.is_on = self.state.is_on();
        } else {
            self.state = SwitchState::from_bool(options.is_on);
        }

        self.recognizer
            .set_minimum_duration(options.switch_duration());
        self.geometry = configure(&options, self.size);
        self.options = options;
        self.refresh_colors();
        Ok(())
    }

    /// New control bounds; a live press keeps the bounds it started with
    pub fn resize(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        tracing::trace!("Safety switch resized to {:?}", size);
        self.size = size;
        self.geometry = configure(&self.options, size);
    }

    /// Theme label colour used for unset outer / inner colours
    pub fn set_label_color(&mut self, color: Color) {
        self.label_color = color;
        self.refresh_colors();
    }

    /// Set the value programmatically; refused while a press is held
    pub fn set_on(&mut self, is_on: bool) -> bool {
        if self.session.is_some() {
            tracing::debug!("Ignoring set_on({}) during a press", is_on);
            return false;
        }
        self.state = SwitchState::from_bool(is_on);
        self.options.is_on = is_on;
        self.refresh_colors();
        true
    }

    fn refresh_colors(&mut self) {
        self.palette = self.options.palette(self.label_color);
        self.colors = match self.phase() {
            Phase::Idle(state) => ColorState::at_rest(state, &self.palette),
            Phase::Pressing { from } => ColorState::pressing(from, &self.palette),
        };
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Press went down at `position` (local coordinates)
    pub fn press_begin(&mut self, position: Point, now: Instant) -> Outcome {
        if self.session.is_some() {
            tracing::debug!("Ignoring second press while one is held");
            return Outcome::Ignored;
        }
        if !self.options.enabled {
            return Outcome::Ignored;
        }
        let bounds = self.bounds();
        if !bounds.contains(position) {
            return Outcome::Ignored;
        }

        self.session = Some(PressSession {
            origin: position,
            position,
            started_at: now,
            bounds,
        });
        self.recognizer.begin(now);
        self.start_transition(now);
        self.haptics.soft();
        Outcome::Started
    }

    /// Pointer moved while pressed
    pub fn press_move(&mut self, position: Point, now: Instant) -> Outcome {
        if self.session.is_none() {
            return Outcome::Ignored;
        }
        if let Outcome::Completed(state) = self.catch_up(now) {
            return Outcome::Completed(state);
        }

        let Some(session) = self.session.as_mut() else {
            return Outcome::Ignored;
        };
        session.position = position;

        if session.bounds.contains(position) {
            Outcome::Held
        } else {
            tracing::debug!("Press left the switch at {:?}", position);
            self.abort_transition();
            Outcome::Aborted
        }
    }

    /// Press released
    pub fn press_end(&mut self, now: Instant) -> Outcome {
        if self.session.is_none() {
            return Outcome::Ignored;
        }
        if let Outcome::Completed(state) = self.catch_up(now) {
            return Outcome::Completed(state);
        }

        self.abort_transition();
        Outcome::Aborted
    }

    /// Frame tick while pressed
    pub fn tick(&mut self, now: Instant) -> Outcome {
        if self.session.is_none() {
            return Outcome::Ignored;
        }
        self.catch_up(now)
    }

    /// Abort the held press, if any; harmless when idle
    pub fn abort(&mut self) -> Outcome {
        if self.session.is_none() {
            return Outcome::Ignored;
        }
        self.abort_transition();
        Outcome::Aborted
    }

    fn catch_up(&mut self, now: Instant) -> Outcome {
        match self.recognizer.poll(now) {
            Recognition::Recognized => {
                let state = self.complete_transition();
                Outcome::Completed(state)
            }
            Recognition::Pending { .. } => Outcome::Held,
            Recognition::Idle => Outcome::Ignored,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Start the indicator; the switch value is untouched
    fn start_transition(&mut self, now: Instant) {
        self.colors = ColorState::pressing(self.state, &self.palette);

        let spec = AnimationSpec::new(
            Direction::from_deloading(self.options.is_deloading),
            self.options.switch_duration(),
        );
        self.attach_animation(ProgressAnimation::start(spec, now));
        tracing::debug!(
            "Safety switch press started ({:?}, {:?})",
            spec.direction(),
            spec.duration()
        );
    }

    /// Fall back to the state the press started from
    fn abort_transition(&mut self) {
        self.session = None;
        self.recognizer.reset();
        self.remove_animation();
        self.colors = ColorState::at_rest(self.state, &self.palette);
        tracing::debug!("Safety switch press aborted, staying {:?}", self.state);
    }

    /// Toggle the switch
    fn complete_transition(&mut self) -> SwitchState {
        self.state = self.state.toggled();
        self.options.is_on = self.state.is_on();
        self.session = None;
        self.recognizer.reset();
        self.remove_animation();
        self.colors = ColorState::at_rest(self.state, &self.palette);
        self.haptics.medium();
        tracing::info!("Safety switch toggled {:?}", self.state);
        self.state
    }

    fn attach_animation(&mut self, animation: ProgressAnimation) {
        if self.animation.replace(animation).is_some() {
            tracing::trace!("Replaced attached progress animation");
        }
    }

    fn remove_animation(&mut self) {
        self.animation = None;
    }
}

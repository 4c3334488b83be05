//! Safety switch canvas primitive
//!
//! Paints a [`SafetySwitch`]'s layers with iced's Canvas and turns mouse and
//! touch input into [`PressEvent`]s in the control's local coordinates.
//!
//! # Design
//!
//! The primitive never mutates the switch. It publishes press events through
//! a generic callback and the owner feeds them to the state machine.

use std::time::Instant;

use iced::widget::Canvas;
use iced::widget::canvas::{
    self, Event, Fill, Frame, Geometry, LineCap, Path, Program, Stroke, Style, fill,
};
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse, touch};

use crate::features::switch::geometry::Shape;
use crate::features::switch::indicator::IndicatorArc;
use crate::features::switch::{SafetySwitch, StrokeTrim, Surface};

/// Press input in the control's local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressEvent {
    Began(Point),
    Moved(Point),
    Ended,
    /// The pointer left the window mid-press
    Cancelled,
}

/// Which pointer owns the current press
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Pointer {
    #[default]
    None,
    Mouse,
    Finger(touch::Finger),
}

/// Canvas program drawing one safety switch
pub struct SafetySwitchCanvas<'a, Message> {
    switch: &'a SafetySwitch,
    now: Instant,
    glow_alpha: f32,
    on_press: Box<dyn Fn(PressEvent) -> Message + 'a>,
}

impl<'a, Message> SafetySwitchCanvas<'a, Message> {
    pub fn new(
        switch: &'a SafetySwitch,
        now: Instant,
        on_press: impl Fn(PressEvent) -> Message + 'a,
    ) -> Self {
        Self {
            switch,
            now,
            glow_alpha: 0.0,
            on_press: Box::new(on_press),
        }
    }

    /// Opacity of the white hover overlay
    pub fn glow(mut self, alpha: f32) -> Self {
        self.glow_alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

fn local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

/// Turn a raw event into press input; `pointer` tracks who owns the press
fn press_event(
    pointer: &mut Pointer,
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
) -> Option<PressEvent> {
    Some(match (event, *pointer) {
        (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), Pointer::None) => {
            let position = cursor.position_in(bounds)?;
            *pointer = Pointer::Mouse;
            PressEvent::Began(position)
        }
        (Event::Mouse(mouse::Event::CursorMoved { position }), Pointer::Mouse) => {
            PressEvent::Moved(local(*position, bounds))
        }
        (Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)), Pointer::Mouse) => {
            *pointer = Pointer::None;
            PressEvent::Ended
        }
        (Event::Mouse(mouse::Event::CursorLeft), Pointer::Mouse) => {
            *pointer = Pointer::None;
            PressEvent::Cancelled
        }
        (Event::Touch(touch::Event::FingerPressed { id, position }), Pointer::None) => {
            if !bounds.contains(*position) {
                return None;
            }
            *pointer = Pointer::Finger(*id);
            PressEvent::Began(local(*position, bounds))
        }
        (Event::Touch(touch::Event::FingerMoved { id, position }), Pointer::Finger(owner))
            if *id == owner =>
        {
            PressEvent::Moved(local(*position, bounds))
        }
        (Event::Touch(touch::Event::FingerLifted { id, .. }), Pointer::Finger(owner))
            if *id == owner =>
        {
            *pointer = Pointer::None;
            PressEvent::Ended
        }
        (Event::Touch(touch::Event::FingerLost { id, .. }), Pointer::Finger(owner))
            if *id == owner =>
        {
            *pointer = Pointer::None;
            PressEvent::Cancelled
        }
        _ => return None,
    })
}

impl<'a, Message> Program<Message> for SafetySwitchCanvas<'a, Message> {
    type State = Pointer;

    fn update(
        &self,
        pointer: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let press = press_event(pointer, event, bounds, cursor)?;

        let action = canvas::Action::publish((self.on_press)(press));
        Some(match press {
            PressEvent::Moved(_) => action,
            PressEvent::Began(_) | PressEvent::Ended | PressEvent::Cancelled => {
                action.and_capture()
            }
        })
    }

    fn draw(
        &self,
        _pointer: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let mut surface = FrameSurface { frame: &mut frame };
        self.switch.layers(self.now).paint(&mut surface);

        if self.glow_alpha > 0.0 {
            let disc = self.switch.geometry().outer_layer();
            if let (Some(center), radius) = (disc.center(), disc.radius()) {
                frame.fill(
                    &Path::circle(center, radius),
                    Color {
                        a: self.glow_alpha,
                        ..Color::WHITE
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        pointer: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.switch.is_enabled() {
            mouse::Interaction::default()
        } else if *pointer != Pointer::None || cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// [`Surface`] backed by a canvas frame
struct FrameSurface<'f> {
    frame: &'f mut Frame,
}

impl Surface for FrameSurface<'_> {
    fn fill(&mut self, shape: &Shape, color: Color) {
        match *shape {
            Shape::Empty => {}
            Shape::Circle { center, radius } => {
                self.frame.fill(&Path::circle(center, radius), color);
            }
            Shape::Donut {
                center,
                outer_radius,
                inner_radius,
            } => {
                let ring = Path::new(|builder| {
                    builder.circle(center, outer_radius);
                    builder.circle(center, inner_radius);
                });
                self.frame.fill(
                    &ring,
                    Fill {
                        style: Style::Solid(color),
                        rule: fill::Rule::EvenOdd,
                    },
                );
            }
            // an arc outline has no area
            Shape::Arc { .. } => {}
        }
    }

    fn stroke(&mut self, shape: &Shape, color: Color, width: f32, trim: StrokeTrim) {
        let arc = IndicatorArc {
            shape: *shape,
            thickness: width,
            color,
        };

        let path = match (*shape, arc.sweep(trim)) {
            (Shape::Arc { center, radius, .. }, Some((start_angle, end_angle))) => {
                Path::new(|builder| {
                    builder.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle,
                        end_angle,
                    });
                })
            }
            (Shape::Circle { center, radius }, _) if !trim.is_empty() => {
                Path::circle(center, radius)
            }
            _ => return,
        };

        self.frame.stroke(
            &path,
            Stroke::default()
                .with_width(width)
                .with_color(color)
                .with_line_cap(LineCap::Round),
        );
    }
}

/// Create a safety switch element of the given side length
pub fn view_safety_switch<'a, Message: 'a>(
    program: SafetySwitchCanvas<'a, Message>,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(program).width(size).height(size).into()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), iced::Size::new(80.0, 80.0))
    }

    fn finger(id: u64, position: Point) -> [Event; 4] {
        let id = touch::Finger(id);
        [
            Event::Touch(touch::Event::FingerPressed { id, position }),
            Event::Touch(touch::Event::FingerMoved { id, position }),
            Event::Touch(touch::Event::FingerLifted { id, position }),
            Event::Touch(touch::Event::FingerLost { id, position }),
        ]
    }

    #[test]
    fn mouse_press_uses_local_coordinates() {
        let mut pointer = Pointer::None;
        let cursor = mouse::Cursor::Available(Point::new(120.0, 70.0));
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert_eq!(
            press_event(&mut pointer, &press, bounds(), cursor),
            Some(PressEvent::Began(Point::new(20.0, 20.0)))
        );
        assert_eq!(pointer, Pointer::Mouse);

        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(300.0, 60.0),
        });
        assert_eq!(
            press_event(&mut pointer, &moved, bounds(), cursor),
            Some(PressEvent::Moved(Point::new(200.0, 10.0)))
        );
    }

    #[test]
    fn mouse_press_outside_is_ignored() {
        let mut pointer = Pointer::None;
        let cursor = mouse::Cursor::Available(Point::new(10.0, 10.0));
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert_eq!(press_event(&mut pointer, &press, bounds(), cursor), None);
        assert_eq!(pointer, Pointer::None);
    }

    #[test]
    fn cursor_leaving_cancels_mouse_press() {
        let mut pointer = Pointer::Mouse;
        let left = Event::Mouse(mouse::Event::CursorLeft);

        assert_eq!(
            press_event(&mut pointer, &left, bounds(), mouse::Cursor::Unavailable),
            Some(PressEvent::Cancelled)
        );
        assert_eq!(pointer, Pointer::None);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut pointer = Pointer::None;
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(120.0, 70.0),
        });
        assert_eq!(
            press_event(&mut pointer, &moved, bounds(), mouse::Cursor::Unavailable),
            None
        );
    }

    #[test]
    fn second_finger_is_ignored_while_first_owns_press() {
        let mut pointer = Pointer::None;
        let cursor = mouse::Cursor::Unavailable;
        let [first_down, _, first_up, _] = finger(1, Point::new(140.0, 90.0));
        let [second_down, second_move, second_up, second_lost] =
            finger(2, Point::new(150.0, 100.0));

        assert_eq!(
            press_event(&mut pointer, &first_down, bounds(), cursor),
            Some(PressEvent::Began(Point::new(40.0, 40.0)))
        );
        for event in [second_down, second_move, second_up, second_lost] {
            assert_eq!(press_event(&mut pointer, &event, bounds(), cursor), None);
        }
        assert_eq!(pointer, Pointer::Finger(touch::Finger(1)));

        assert_eq!(
            press_event(&mut pointer, &first_up, bounds(), cursor),
            Some(PressEvent::Ended)
        );
        assert_eq!(pointer, Pointer::None);
    }

    #[test]
    fn lost_finger_cancels() {
        let mut pointer = Pointer::None;
        let cursor = mouse::Cursor::Unavailable;
        let [down, moved, _, lost] = finger(7, Point::new(110.0, 60.0));

        press_event(&mut pointer, &down, bounds(), cursor);
        assert_eq!(
            press_event(&mut pointer, &moved, bounds(), cursor),
            Some(PressEvent::Moved(Point::new(10.0, 10.0)))
        );
        assert_eq!(
            press_event(&mut pointer, &lost, bounds(), cursor),
            Some(PressEvent::Cancelled)
        );
        assert_eq!(pointer, Pointer::None);
    }

    #[test]
    fn finger_outside_bounds_does_not_start() {
        let mut pointer = Pointer::None;
        let [down, ..] = finger(3, Point::new(5.0, 5.0));
        assert_eq!(
            press_event(&mut pointer, &down, bounds(), mouse::Cursor::Unavailable),
            None
        );
        assert_eq!(pointer, Pointer::None);
    }
}

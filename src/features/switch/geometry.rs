//! Circle, ring and arc shapes for the switch layers
//!
//! Pure value types. Every layout pass recomputes them from the control
//! bounds; nothing here holds state between frames.

use iced::{Point, Radians, Rectangle, Size};

/// A closed shape in the control's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Nothing to draw (degenerate input)
    Empty,
    /// Filled disc
    Circle { center: Point, radius: f32 },
    /// Outer circle minus a concentric inner circle, filled even-odd
    Donut {
        center: Point,
        outer_radius: f32,
        inner_radius: f32,
    },
    /// Full circle outline running clockwise from `start`
    Arc {
        center: Point,
        radius: f32,
        start: Radians,
    },
}

impl Shape {
    pub fn is_empty(&self) -> bool {
        matches!(self, Shape::Empty)
    }

    /// Outer radius of the shape, 0 for an empty shape
    pub fn radius(&self) -> f32 {
        match *self {
            Shape::Empty => 0.0,
            Shape::Circle { radius, .. } | Shape::Arc { radius, .. } => radius,
            Shape::Donut { outer_radius, .. } => outer_radius,
        }
    }

    pub fn center(&self) -> Option<Point> {
        match *self {
            Shape::Empty => None,
            Shape::Circle { center, .. }
            | Shape::Donut { center, .. }
            | Shape::Arc { center, .. } => Some(center),
        }
    }
}

fn is_drawable(length: f32) -> bool {
    length.is_finite() && length > 0.0
}

/// Circle inscribed in `rect`, centred in it
pub fn circle(rect: Rectangle) -> Shape {
    let diameter = rect.width.min(rect.height);
    if !is_drawable(diameter) || !rect.x.is_finite() || !rect.y.is_finite() {
        return Shape::Empty;
    }

    Shape::Circle {
        center: rect.center(),
        radius: diameter / 2.0,
    }
}

/// Ring inscribed in `rect` with the given band thickness
///
/// A band at least as thick as the radius fills the whole disc.
pub fn donut(rect: Rectangle, thickness: f32) -> Shape {
    let Shape::Circle { center, radius } = circle(rect) else {
        return Shape::Empty;
    };
    if !is_drawable(thickness) {
        return Shape::Empty;
    }
    if thickness >= radius {
        return Shape::Circle { center, radius };
    }

    Shape::Donut {
        center,
        outer_radius: radius,
        inner_radius: radius - thickness,
    }
}

/// Full-circle arc inscribed in `rect`, starting at `start`
pub fn arc(rect: Rectangle, start: Radians) -> Shape {
    match circle(rect) {
        Shape::Circle { center, radius } if start.0.is_finite() => Shape::Arc {
            center,
            radius,
            start,
        },
        _ => Shape::Empty,
    }
}

/// Largest square centred in `size`, anchored at the local origin
pub fn centered_square(size: Size) -> Rectangle {
    let side = size.width.min(size.height).max(0.0);
    Rectangle {
        x: (size.width - side).max(0.0) / 2.0,
        y: (size.height - side).max(0.0) / 2.0,
        width: side,
        height: side,
    }
}

/// Shrink `rect` by `amount` on every side
///
/// The result may have a negative size; shape builders treat that as empty.
pub fn inset(rect: Rectangle, amount: f32) -> Rectangle {
    Rectangle {
        x: rect.x + amount,
        y: rect.y + amount,
        width: rect.width - 2.0 * amount,
        height: rect.height - 2.0 * amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, side: f32) -> Rectangle {
        Rectangle {
            x,
            y,
            width: side,
            height: side,
        }
    }

    #[test]
    fn circle_is_inscribed_and_centered() {
        let shape = circle(square(10.0, 20.0, 100.0));
        assert_eq!(
            shape,
            Shape::Circle {
                center: Point::new(60.0, 70.0),
                radius: 50.0
            }
        );
    }

    #[test]
    fn circle_uses_shorter_side() {
        let shape = circle(Rectangle {
            x: 0.0,
            y: 0.0,
            width: 80.0,
            height: 40.0,
        });
        assert_eq!(shape.radius(), 20.0);
        assert_eq!(shape.center(), Some(Point::new(40.0, 20.0)));
    }

    #[test]
    fn degenerate_sizes_give_empty_shapes() {
        assert!(circle(square(0.0, 0.0, 0.0)).is_empty());
        assert!(circle(square(0.0, 0.0, -5.0)).is_empty());
        assert!(circle(square(0.0, 0.0, f32::NAN)).is_empty());
        assert!(donut(square(0.0, 0.0, -1.0), 4.0).is_empty());
        assert!(arc(square(0.0, 0.0, 0.0), Radians(0.0)).is_empty());
    }

    #[test]
    fn donut_inner_radius_is_outer_minus_thickness() {
        match donut(square(0.0, 0.0, 100.0), 10.0) {
            Shape::Donut {
                outer_radius,
                inner_radius,
                ..
            } => {
                assert_eq!(outer_radius, 50.0);
                assert_eq!(inner_radius, 40.0);
            }
            other => panic!("expected donut, got {:?}", other),
        }
    }

    #[test]
    fn donut_without_thickness_is_empty() {
        assert!(donut(square(0.0, 0.0, 100.0), 0.0).is_empty());
        assert!(donut(square(0.0, 0.0, 100.0), -2.0).is_empty());
    }

    #[test]
    fn donut_thicker_than_radius_fills_disc() {
        let shape = donut(square(0.0, 0.0, 100.0), 80.0);
        assert!(matches!(shape, Shape::Circle { radius, .. } if radius == 50.0));
    }

    #[test]
    fn centered_square_in_wide_bounds() {
        let rect = centered_square(Size::new(200.0, 100.0));
        assert_eq!(rect, square(50.0, 0.0, 100.0));
    }

    #[test]
    fn inset_shrinks_every_side() {
        let rect = inset(square(0.0, 0.0, 100.0), 5.0);
        assert_eq!(rect, square(5.0, 5.0, 90.0));
        assert!(circle(inset(square(0.0, 0.0, 10.0), 6.0)).is_empty());
    }
}

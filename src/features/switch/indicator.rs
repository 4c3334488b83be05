//! Progress indicator arc
//!
//! Angles are given in degrees with 0° at 12 o'clock, growing clockwise.
//! The drawing surface puts 0 rad at 3 o'clock, so every angle is turned by
//! a further 270° before the conversion to radians.

use std::f32::consts::PI;

use iced::{Color, Point, Radians, Rectangle};

use super::animation::StrokeTrim;
use super::geometry::{self, Shape};

/// Degrees (0 = top, clockwise) to surface radians
pub fn deg2rad(degrees: f32) -> f32 {
    (degrees + 270.0) / 360.0 * 2.0 * PI
}

/// The stroked progress arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorArc {
    pub shape: Shape,
    pub thickness: f32,
    pub color: Color,
}

impl IndicatorArc {
    /// Lay out the arc inside `rect`
    ///
    /// `rect` is the box of the stroke's centre line, so the stroke itself
    /// spills `thickness / 2` over each side of it.
    pub fn layout(rect: Rectangle, thickness: f32, color: Color, start_angle: f32) -> Self {
        let thickness = if thickness.is_finite() {
            thickness.max(0.0)
        } else {
            0.0
        };
        let shape = if thickness > 0.0 {
            geometry::arc(rect, Radians(deg2rad(start_angle)))
        } else {
            Shape::Empty
        };

        Self {
            shape,
            thickness,
            color,
        }
    }

    /// Start and end angle of the visible part of the stroke
    pub fn sweep(&self, trim: StrokeTrim) -> Option<(Radians, Radians)> {
        let Shape::Arc { start, .. } = self.shape else {
            return None;
        };
        if trim.is_empty() {
            return None;
        }

        let from = start.0 + trim.start.clamp(0.0, 1.0) * 2.0 * PI;
        let to = start.0 + trim.end.clamp(0.0, 1.0) * 2.0 * PI;
        Some((Radians(from), Radians(to)))
    }

    /// Point on the stroke's centre line `fraction` of the way round
    pub fn point_at(&self, fraction: f32) -> Option<Point> {
        let Shape::Arc {
            center,
            radius,
            start,
        } = self.shape
        else {
            return None;
        };

        let angle = start.0 + fraction * 2.0 * PI;
        Some(Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ))
    }
}

//! Layer composition
//!
//! Turns the derived geometry and the current colours into an ordered list
//! of paint commands. A [`Surface`] replays them; the iced canvas is one
//! surface, the tests record into another.

use iced::Color;

use super::animation::StrokeTrim;
use super::geometry::Shape;
use super::options::{Palette, SwitchGeometry};

/// Anything that can paint switch shapes
pub trait Surface {
    fn fill(&mut self, shape: &Shape, color: Color);

    /// Stroke the part of `shape`'s outline selected by `trim`
    fn stroke(&mut self, shape: &Shape, color: Color, width: f32, trim: StrokeTrim);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Outer,
    StateRing,
    Inner,
    Progress,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill(Color),
    Stroke {
        color: Color,
        width: f32,
        trim: StrokeTrim,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub shape: Shape,
    pub paint: Paint,
}

/// Layers of one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwitchLayers {
    layers: Vec<Layer>,
}

impl SwitchLayers {
    /// Build the layer stack
    ///
    /// `progress` is the sampled indicator stroke; `None` while idle, in
    /// which case no indicator layer is attached at all.
    pub fn compose(
        geometry: &SwitchGeometry,
        palette: &Palette,
        indicator_color: Color,
        state_color: Color,
        progress: Option<StrokeTrim>,
    ) -> Self {
        let mut layers = vec![
            Layer {
                kind: LayerKind::Outer,
                shape: geometry.outer_layer(),
                paint: Paint::Fill(palette.outer),
            },
            Layer {
                kind: LayerKind::StateRing,
                shape: geometry.state_ring(),
                paint: Paint::Fill(state_color),
            },
            Layer {
                kind: LayerKind::Inner,
                shape: geometry.inner_circle(),
                paint: Paint::Fill(palette.inner),
            },
        ];

        if let Some(trim) = progress {
            let arc = geometry.indicator(indicator_color);
            layers.push(Layer {
                kind: LayerKind::Progress,
                shape: arc.shape,
                paint: Paint::Stroke {
                    color: arc.color,
                    width: arc.thickness,
                    trim,
                },
            });
        }

        Self { layers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn get(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Replay every non-empty layer onto `surface`
    pub fn paint(&self, surface: &mut impl Surface) {
        for layer in self.layers.iter().filter(|layer| !layer.shape.is_empty()) {
            match layer.paint {
                Paint::Fill(color) => surface.fill(&layer.shape, color),
                Paint::Stroke { color, width, trim } => {
                    if !trim.is_empty() {
                        surface.stroke(&layer.shape, color, width, trim);
                    }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;
    use crate::features::switch::options::{SwitchOptions, configure};
    use iced::Size;

    fn setup() -> (SwitchGeometry, Palette) {
        let options = SwitchOptions::default();
        (
            configure(&options, Size::new(120.0, 120.0)),
            options.palette(Color::WHITE),
        )
    }

    #[test]
    fn idle_stack_has_no_indicator() {
        let (geometry, palette) = setup();
        let layers = SwitchLayers::compose(&geometry, &palette, palette.off, palette.on, None);

        let kinds: Vec<_> = layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(
            kinds,
            vec![LayerKind::Outer, LayerKind::StateRing, LayerKind::Inner]
        );
        assert_eq!(
            layers.get(LayerKind::StateRing).unwrap().paint,
            Paint::Fill(palette.on)
        );
    }

    #[test]
    fn indicator_is_painted_last() {
        let (geometry, palette) = setup();
        let trim = StrokeTrim {
            start: 0.0,
            end: 0.3,
        };
        let layers = SwitchLayers::compose(
            &geometry,
            &palette,
            palette.off,
            Color::TRANSPARENT,
            Some(trim),
        );

        let mut surface = RecordingSurface::default();
        layers.paint(&mut surface);

        assert_eq!(surface.fills.len(), 3);
        assert_eq!(surface.strokes.len(), 1);
        let (shape, color, width, painted_trim) = surface.strokes[0];
        assert!(matches!(shape, Shape::Arc { .. }));
        assert_eq!(color, palette.off);
        assert_eq!(width, geometry.indicator_width);
        assert_eq!(painted_trim, trim);
    }

    #[test]
    fn empty_trim_and_empty_shapes_are_skipped() {
        let options = SwitchOptions::default();
        let palette = options.palette(Color::WHITE);
        let geometry = configure(&options, Size::ZERO);
        let layers = SwitchLayers::compose(
            &geometry,
            &palette,
            palette.off,
            palette.on,
            Some(StrokeTrim::NONE),
        );

        let mut surface = RecordingSurface::default();
        layers.paint(&mut surface);
        assert_eq!(layers.len(), 4);
        assert!(surface.fills.is_empty());
        assert!(surface.strokes.is_empty());
    }
}

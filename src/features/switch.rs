//! Safety switch core
//!
//! A circular toggle that only changes value after a sustained press. The
//! modules here are UI-runtime agnostic: they compute shapes, colours and
//! animation values, and leave painting to a [`layers::Surface`].

pub mod animation;
pub mod geometry;
pub mod gesture;
pub mod indicator;
pub mod layers;
pub mod machine;
pub mod options;

pub use animation::{AnimationSpec, Direction, ProgressAnimation, StrokeTrim};
pub use geometry::Shape;
pub use layers::{Surface, SwitchLayers};
pub use machine::{Outcome, SafetySwitch, SwitchState};
pub use options::SwitchOptions;

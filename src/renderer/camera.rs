pub mod controller;
pub mod input;
pub mod projector;
pub mod state;
pub mod view_name;

pub use controller::CameraController;
pub use input::{InputEvent, PointerButton};
pub use projector::{
    AnnotationPoint, Axis, PlacedLabel, Projection, ViewportRect, project_annotations,
};
pub use state::{CameraState, HomePose};
pub use view_name::{ViewClassifier, normalize_degrees};

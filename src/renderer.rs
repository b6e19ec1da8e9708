pub mod camera;
pub mod grid;
pub mod line_vertex;
mod render;
pub mod renderer;

pub use render::SceneFrame;
pub use renderer::Renderer;

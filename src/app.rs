pub mod app;
pub mod handler;

pub use handler::AppHandler;

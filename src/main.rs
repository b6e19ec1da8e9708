use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod error;
mod renderer;
mod settings;
mod ui;

pub const CONFY_APP_NAME: &str = "cadvis-rs";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = settings::Settings::load()?;
    log::debug!("Camera config: {:?}", settings.camera);

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = app::AppHandler::new(settings);
    event_loop.run_app(&mut handler)?;

    if let Some(e) = handler.error.take() {
        return Err(e.into());
    }
    Ok(())
}

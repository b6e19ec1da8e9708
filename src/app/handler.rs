use crate::app::app::App;
use crate::error::CadError;
use crate::settings::Settings;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowId};

const WINDOW_TITLE: &str = "CadVis-RS - Orbit Viewport";

pub struct AppHandler {
    pub app: Option<App>,
    settings: Option<Settings>,
    /// Fatal error that ended the event loop, reported by `main`.
    pub error: Option<CadError>,
}

impl AppHandler {
    pub fn new(settings: Settings) -> Self {
        Self {
            app: None,
            settings: Some(settings),
            error: None,
        }
    }

    fn create_app(&mut self, event_loop: &ActiveEventLoop) -> Result<(), CadError> {
        let Some(settings) = self.settings.take() else {
            return Ok(());
        };

        let mut window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));
        if settings.display.start_fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let app = App::new(window, settings).map_err(|e| {
            CadError::new("viewport-start")
                .with_arg("title", WINDOW_TITLE)
                .push_cad(e)
        })?;
        self.app = Some(app);
        log::info!("Viewport ready");
        Ok(())
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            if let Err(e) = self.create_app(event_loop) {
                log::error!("Failed to start viewport: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            match app.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.reconfigure_surface();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Render error: out of GPU memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            }
            app.window.request_redraw();
        }
    }
}

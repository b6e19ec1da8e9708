use crate::error::CadError;
use crate::renderer::camera::{
    AnnotationPoint, CameraController, InputEvent, PointerButton, Projection, ViewClassifier,
    ViewportRect, project_annotations,
};
use crate::renderer::{Renderer, SceneFrame, grid};
use crate::settings::Settings;
use crate::ui::{HudReadout, OverlayFrame, Ui};
use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use std::sync::Arc;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window};

/// Trackpad pixels per unit of wheel scroll.
const PIXEL_SCROLL_SCALE: f32 = 0.05;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    fn handled(repaint: bool) -> Self {
        Self {
            repaint,
            exit: false,
        }
    }

    fn exit() -> Self {
        Self {
            repaint: false,
            exit: true,
        }
    }
}

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    camera: CameraController,
    classifier: ViewClassifier,
    ui: Ui,
    egui_state: State,
    settings: Settings,
    annotations: Vec<AnnotationPoint>,
}

impl App {
    pub fn new(window: Arc<Window>, settings: Settings) -> Result<Self, CadError> {
        let renderer = pollster::block_on(Renderer::new(window.clone(), &settings.display))?;

        let egui_state = State::new(
            renderer.egui_context(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let camera = CameraController::new(settings.camera.clone())?;
        let classifier = ViewClassifier::from_config(&settings.camera);
        let annotations = grid::axis_tick_annotations(&settings.display);

        Ok(Self {
            window,
            renderer,
            camera,
            classifier,
            ui: Ui::new(),
            egui_state,
            settings,
            annotations,
        })
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        // The overlay has no widgets, egui only needs to see the events
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        match event {
            WindowEvent::CloseRequested => return EventResponse::exit(),
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    return self.handle_key(event.physical_key);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = PointerButton::from_winit(*button) {
                    self.camera.handle_input(InputEvent::ButtonChanged {
                        button,
                        pressed: *state == ElementState::Pressed,
                    });
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.handle_input(InputEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
                };
                self.camera.handle_input(InputEvent::Scrolled { amount });
            }
            _ => {}
        }

        EventResponse::handled(egui_response.repaint)
    }

    fn handle_key(&mut self, key: PhysicalKey) -> EventResponse {
        let PhysicalKey::Code(code) = key else {
            return EventResponse::handled(false);
        };
        match code {
            KeyCode::Escape => return EventResponse::exit(),
            KeyCode::Home => self.camera.handle_input(InputEvent::ResetRequested),
            KeyCode::KeyF => self.toggle_fullscreen(),
            KeyCode::KeyA => {
                let display = &mut self.settings.display;
                display.show_axes = !display.show_axes;
                log::info!("Axes {}", if display.show_axes { "shown" } else { "hidden" });
                display.save();
            }
            KeyCode::KeyW => {
                let display = &mut self.settings.display;
                display.show_labels = !display.show_labels;
                log::info!("Labels {}", if display.show_labels { "shown" } else { "hidden" });
                display.save();
            }
            _ => return EventResponse::handled(false),
        }
        EventResponse::handled(true)
    }

    fn toggle_fullscreen(&mut self) {
        if self.window.fullscreen().is_some() {
            self.window.set_fullscreen(None);
            if let Some(monitor) = self.window.current_monitor() {
                let size = monitor.size();
                let windowed = winit::dpi::PhysicalSize::new(
                    (size.width as f64 * 0.8) as u32,
                    (size.height as f64 * 0.8) as u32,
                );
                let _ = self.window.request_inner_size(windowed);
                self.window
                    .set_outer_position(winit::dpi::PhysicalPosition::new(100, 100));
            }
            log::debug!("Leaving fullscreen");
        } else {
            self.window
                .set_fullscreen(Some(Fullscreen::Borderless(None)));
            log::debug!("Entering fullscreen");
        }
    }

    /// Recreate the swapchain after it was lost or went stale.
    pub fn reconfigure_surface(&mut self) {
        self.renderer.reconfigure();
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let (width, height) = self.renderer.surface_size();
        let viewport = ViewportRect::from_size(width, height);
        let projection = match Projection::perspective(self.camera.config(), &viewport) {
            Ok(projection) => projection.matrix(),
            Err(e) => {
                log::trace!("Skipping frame: {e}");
                return Ok(());
            }
        };
        let view = self.camera.view_transform().matrix();

        let labels = if self.settings.display.show_labels {
            project_annotations(&self.annotations, &view, &projection, &viewport)
        } else {
            Vec::new()
        };
        let hud = HudReadout::new(self.camera.state(), &self.classifier);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();
        let overlay = OverlayFrame {
            hud: &hud,
            labels: &labels,
            surface_height: height as f32,
            display: &self.settings.display,
        };
        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.ui.show(ctx, &overlay);
        });

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let frame = SceneFrame {
            view_projection: projection * view,
            show_grid: self.settings.display.show_grid,
            show_axes: self.settings.display.show_axes,
        };
        self.renderer
            .render(&frame, paint_jobs, full_output.textures_delta, screen_descriptor)
    }
}

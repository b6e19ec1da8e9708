/// Pointer buttons the camera reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Device-independent input consumed by [`super::CameraController::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Absolute pointer position in window pixels, y growing downward.
    PointerMoved { x: f64, y: f64 },
    ButtonChanged { button: PointerButton, pressed: bool },
    /// Positive values zoom in.
    Scrolled { amount: f32 },
    ResetRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Orbit,
    Pan,
    /// Pan driven by the vertical pointer axis only.
    VerticalPan,
}

impl From<PointerButton> for DragMode {
    fn from(button: PointerButton) -> Self {
        match button {
            PointerButton::Left => DragMode::Orbit,
            PointerButton::Middle => DragMode::Pan,
            PointerButton::Right => DragMode::VerticalPan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { mode: DragMode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_modes() {
        assert_eq!(DragMode::from(PointerButton::Left), DragMode::Orbit);
        assert_eq!(DragMode::from(PointerButton::Middle), DragMode::Pan);
        assert_eq!(DragMode::from(PointerButton::Right), DragMode::VerticalPan);
    }

    #[test]
    fn extra_winit_buttons_are_ignored() {
        assert_eq!(
            PointerButton::from_winit(winit::event::MouseButton::Middle),
            Some(PointerButton::Middle)
        );
        assert_eq!(PointerButton::from_winit(winit::event::MouseButton::Back), None);
        assert_eq!(PointerButton::from_winit(winit::event::MouseButton::Other(7)), None);
    }
}

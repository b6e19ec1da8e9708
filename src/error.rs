use std::{collections::BTreeMap, fmt, io, sync::Arc};

/// Rejected camera configuration. Raised once, when the config is loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("min_radius ({min}) is greater than max_radius ({max})")]
    RadiusRange { min: f32, max: f32 },
    #[error("vertical_angle_min ({min}) is greater than vertical_angle_max ({max})")]
    ElevationRange { min: f32, max: f32 },
    #[error("elevation bound {value} must lie strictly between -90 and 90")]
    ElevationOutOfRange { value: f32 },
    #[error("field_of_view must be within (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("far_plane ({far}) must be greater than near_plane ({near})")]
    ClipPlanes { near: f32, far: f32 },
    #[error("top_threshold ({top}) must be greater than bottom_threshold ({bottom})")]
    Thresholds { top: f32, bottom: f32 },
    #[error("home radius {radius} is outside [{min}, {max}]")]
    HomeRadius { radius: f32, min: f32, max: f32 },
    #[error("home elevation {angle} is outside [{min}, {max}]")]
    HomeElevation { angle: f32, min: f32, max: f32 },
}

/// Viewport that cannot produce a projection (minimized window, zero-height panel).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("viewport width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("viewport height must be positive, got {0}")]
    NonPositiveHeight(f32),
}

#[derive(Debug, Clone)]
pub struct CadError {
    pub key: &'static str,
    pub args: BTreeMap<&'static str, String>,
    pub causes: Vec<CadCause>,
}

#[derive(Debug, Clone)]
pub enum CadCause {
    Cad(Box<CadError>),
    Std(Arc<dyn std::error::Error + Send + Sync>),
}

impl CadError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: BTreeMap::new(),
            causes: Vec::new(),
        }
    }

    pub fn with_arg(mut self, k: &'static str, v: impl ToString) -> Self {
        self.args.insert(k, v.to_string());
        self
    }

    pub fn push_cad(mut self, cause: CadError) -> Self {
        self.causes.push(CadCause::Cad(Box::new(cause)));
        self
    }

    pub fn push_std(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.causes.push(CadCause::Std(Arc::new(cause)));
        self
    }
}

impl fmt::Display for CadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.key)?;
        let mut first = true;
        for (k, v) in &self.args {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{k}={v}")?;
        }
        write!(f, ")")?;
        for cause in &self.causes {
            match cause {
                CadCause::Cad(e) => write!(f, ": {e}")?,
                CadCause::Std(e) => write!(f, ": {e}")?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for CadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.causes.iter().find_map(|c| match c {
            CadCause::Cad(e) => Some(e.as_ref() as &dyn std::error::Error),
            CadCause::Std(e) => Some(e.as_ref() as &dyn std::error::Error),
        })
    }
}

impl From<io::Error> for CadError {
    fn from(err: io::Error) -> Self {
        CadError::new("io-error").push_std(err)
    }
}

impl From<confy::ConfyError> for CadError {
    fn from(err: confy::ConfyError) -> Self {
        CadError::new("confy::ConfyError").push_std(err)
    }
}

impl From<ConfigError> for CadError {
    fn from(err: ConfigError) -> Self {
        CadError::new("config-error").push_std(err)
    }
}

impl From<ViewportError> for CadError {
    fn from(err: ViewportError) -> Self {
        CadError::new("viewport-error").push_std(err)
    }
}

impl From<wgpu::CreateSurfaceError> for CadError {
    fn from(err: wgpu::CreateSurfaceError) -> Self {
        CadError::new("wgpu::CreateSurfaceError").push_std(err)
    }
}

impl From<wgpu::RequestAdapterError> for CadError {
    fn from(err: wgpu::RequestAdapterError) -> Self {
        CadError::new("wgpu::RequestAdapterError").push_std(err)
    }
}

impl From<wgpu::RequestDeviceError> for CadError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        CadError::new("wgpu::RequestDeviceError").push_std(err)
    }
}

impl From<winit::error::EventLoopError> for CadError {
    fn from(err: winit::error::EventLoopError) -> Self {
        CadError::new("winit::error::EventLoopError").push_std(err)
    }
}

impl From<winit::error::OsError> for CadError {
    fn from(err: winit::error::OsError) -> Self {
        CadError::new("winit::error::OsError").push_std(err)
    }
}

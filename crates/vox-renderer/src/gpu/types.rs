/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("readback error: {0}")]
    ReadbackError(String),

    #[error("render surface is not initialized")]
    NotInitialized,

    #[error("surface {width}x{height} exceeds the device limit of {max} pixels per side")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for RendererError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

/// Largest texture side guaranteed by `wgpu::Limits::default()`, which is
/// what the device is requested with.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}

impl PhysicalSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp both dimensions to at least one pixel.
    pub fn at_least_one(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }

    /// Error unless both sides fit within `max`.
    pub fn check_within(self, max: u32) -> Result<Self, RendererError> {
        if self.width > max || self.height > max {
            return Err(RendererError::SurfaceTooLarge {
                width: self.width,
                height: self.height,
                max,
            });
        }
        Ok(self)
    }

    /// Scale down, keeping the aspect ratio, until both sides fit within `max`.
    pub fn fit_within(self, max: u32) -> Self {
        let longest = self.width.max(self.height);
        if longest <= max {
            return self;
        }
        let shrink = |side: u32| (u64::from(side) * u64::from(max) / u64::from(longest)) as u32;
        Self {
            width: shrink(self.width),
            height: shrink(self.height),
        }
        .at_least_one()
    }
}

use crate::host::SurfaceTarget;

use super::types::{PhysicalSize, RendererError};

/// Color format of offscreen targets. Not sRGB, so palette bytes land unchanged.
pub const OFFSCREEN_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Where frames are drawn.
pub enum FrameTarget {
    /// A presentable window surface.
    Window {
        surface: wgpu::Surface<'static>,
        config: wgpu::SurfaceConfiguration,
    },
    /// A texture that can be copied back to the CPU.
    Offscreen {
        texture: wgpu::Texture,
        view: wgpu::TextureView,
    },
}

/// A color attachment ready for one frame.
pub struct AcquiredFrame {
    pub view: wgpu::TextureView,
    surface_texture: Option<wgpu::SurfaceTexture>,
}

impl AcquiredFrame {
    /// Present the frame if it came from a window surface.
    pub fn present(self) {
        if let Some(texture) = self.surface_texture {
            texture.present();
        }
    }
}

pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub target: FrameTarget,
    pub size: PhysicalSize,
    format: wgpu::TextureFormat,
}

impl GpuContext {
    /// Initialize wgpu: create instance, adapter and device, then configure
    /// either a window surface or an offscreen texture.
    pub async fn new(
        target: &SurfaceTarget,
        size: PhysicalSize,
        vsync: bool,
    ) -> Result<Self, RendererError> {
        let size = size.at_least_one();

        // 1. Create Instance with default backends
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        // 2. Create surface from window (offscreen targets have none)
        let surface = match target {
            SurfaceTarget::Window(window) => Some(instance.create_surface(window.clone())?),
            SurfaceTarget::Offscreen => None,
        };

        // 3. Request adapter (prefer high-performance GPU, fallback to software)
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: surface.as_ref(),
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: surface.as_ref(),
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        // 4. Request device with default limits
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("vox-renderer device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        // 5. Refuse sizes the device cannot allocate
        let size = size.check_within(device.limits().max_texture_dimension_2d)?;

        // 6. Configure the frame target
        let (target, format) = match surface {
            Some(surface) => {
                let caps = surface.get_capabilities(&adapter);
                let format = caps
                    .formats
                    .iter()
                    .copied()
                    .find(|f| !f.is_srgb())
                    .or_else(|| caps.formats.first().copied())
                    .unwrap_or(wgpu::TextureFormat::Bgra8Unorm);
                tracing::info!("Surface format: {format:?} (available: {:?})", caps.formats);

                let config = wgpu::SurfaceConfiguration {
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    format,
                    width: size.width,
                    height: size.height,
                    present_mode: if vsync {
                        wgpu::PresentMode::Fifo
                    } else {
                        wgpu::PresentMode::AutoNoVsync
                    },
                    desired_maximum_frame_latency: 2,
                    alpha_mode: caps
                        .alpha_modes
                        .first()
                        .copied()
                        .unwrap_or(wgpu::CompositeAlphaMode::Auto),
                    view_formats: vec![],
                };
                surface.configure(&device, &config);
                (FrameTarget::Window { surface, config }, format)
            }
            None => {
                let (texture, view) = create_offscreen_texture(&device, size);
                (FrameTarget::Offscreen { texture, view }, OFFSCREEN_FORMAT)
            }
        };

        Ok(Self {
            device,
            queue,
            target,
            size,
            format,
        })
    }

    /// Reconfigure the surface (or recreate the offscreen texture) after a resize.
    ///
    /// Sizes beyond the device limit are scaled down to fit.
    pub fn resize(&mut self, width: u32, height: u32) {
        let requested = PhysicalSize::new(width, height).at_least_one();
        self.size = requested.fit_within(self.max_dimension());
        if self.size != requested {
            tracing::warn!(
                width,
                height,
                max = self.max_dimension(),
                "Resize exceeds device limit, clamping"
            );
        }
        match &mut self.target {
            FrameTarget::Window { surface, config } => {
                config.width = self.size.width;
                config.height = self.size.height;
                surface.configure(&self.device, config);
            }
            FrameTarget::Offscreen { texture, view } => {
                texture.destroy();
                let (new_texture, new_view) = create_offscreen_texture(&self.device, self.size);
                *texture = new_texture;
                *view = new_view;
            }
        }
    }

    /// Get the color attachment for the next frame.
    ///
    /// Returns `Ok(None)` when the window surface was lost or outdated; the
    /// surface is reconfigured and the frame should be skipped.
    pub fn acquire(&self) -> Result<Option<AcquiredFrame>, RendererError> {
        match &self.target {
            FrameTarget::Window { surface, config } => match surface.get_current_texture() {
                Ok(texture) => {
                    let view = texture
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    Ok(Some(AcquiredFrame {
                        view,
                        surface_texture: Some(texture),
                    }))
                }
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    tracing::debug!("Surface lost or outdated, reconfiguring");
                    surface.configure(&self.device, config);
                    Ok(None)
                }
                Err(wgpu::SurfaceError::Timeout) => {
                    tracing::warn!("Surface texture timeout, skipping frame");
                    Ok(None)
                }
                Err(e) => Err(e.into()),
            },
            FrameTarget::Offscreen { texture, .. } => Ok(Some(AcquiredFrame {
                view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
                surface_texture: None,
            })),
        }
    }

    /// The offscreen color texture, if this context renders offscreen.
    pub fn offscreen_texture(&self) -> Option<&wgpu::Texture> {
        match &self.target {
            FrameTarget::Offscreen { texture, .. } => Some(texture),
            FrameTarget::Window { .. } => None,
        }
    }

    /// Largest texture side the device supports.
    pub fn max_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Return the color target format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Destroy the offscreen texture. Window surfaces are released on drop.
    pub fn release(&mut self) {
        if let FrameTarget::Offscreen { texture, .. } = &self.target {
            texture.destroy();
        }
    }
}

fn create_offscreen_texture(
    device: &wgpu::Device,
    size: PhysicalSize,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("vox offscreen"),
        size: wgpu::Extent3d {
            width: size.width.max(1),
            height: size.height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: OFFSCREEN_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

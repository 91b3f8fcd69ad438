mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_readback_display() {
        let err = RendererError::ReadbackError("map failed".to_string());
        assert_eq!(err.to_string(), "readback error: map failed");
    }

    #[test]
    fn physical_size_at_least_one() {
        let a = PhysicalSize::new(0, 600).at_least_one();
        assert_eq!(a, PhysicalSize::new(1, 600));
    }

    #[test]
    fn max_dimension_matches_requested_limits() {
        assert_eq!(
            MAX_SURFACE_DIMENSION,
            wgpu::Limits::default().max_texture_dimension_2d
        );
    }

    #[test]
    fn oversized_surface_is_rejected() {
        let err = PhysicalSize::new(9000, 600).check_within(8192).unwrap_err();
        assert!(matches!(
            err,
            RendererError::SurfaceTooLarge {
                width: 9000,
                height: 600,
                max: 8192
            }
        ));
        assert!(err.to_string().contains("9000x600"));
        assert!(PhysicalSize::new(8192, 8192).check_within(8192).is_ok());
    }

    #[test]
    fn fit_within_keeps_aspect() {
        assert_eq!(
            PhysicalSize::new(16384, 4096).fit_within(8192),
            PhysicalSize::new(8192, 2048)
        );
        assert_eq!(
            PhysicalSize::new(800, 600).fit_within(8192),
            PhysicalSize::new(800, 600)
        );
        assert_eq!(
            PhysicalSize::new(70000, 1).fit_within(8192),
            PhysicalSize::new(8192, 1)
        );
    }

    #[test]
    fn offscreen_format_is_not_srgb() {
        assert!(!OFFSCREEN_FORMAT.is_srgb());
    }
}

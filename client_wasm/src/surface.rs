//! Surface and device choices that do not need a live adapter

use wgpu::{
    CompositeAlphaMode, Limits, PresentMode, SurfaceConfiguration, TextureFormat, TextureUsages,
};

/// Pick the swapchain format.
///
/// Palette colours are converted to linear light before upload, so an sRGB
/// target is required for them to come out right. Any other format still
/// works, just with washed-out colours.
pub fn choose_format(formats: &[TextureFormat]) -> Result<TextureFormat, String> {
    if let Some(format) = formats.iter().copied().find(|f| f.is_srgb()) {
        return Ok(format);
    }
    let format = formats
        .first()
        .copied()
        .ok_or_else(|| "No surface formats available".to_string())?;
    log::warn!("No sRGB surface format, falling back to {:?}", format);
    Ok(format)
}

/// Baseline WebGPU limits, with texture sizes raised to what the adapter
/// supports so large canvases still fit.
pub fn device_limits(adapter: Limits) -> Limits {
    Limits::downlevel_defaults().using_resolution(adapter)
}

pub fn surface_config(format: TextureFormat, (width, height): (u32, u32)) -> SurfaceConfiguration {
    SurfaceConfiguration {
        usage: TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: PresentMode::Fifo,
        alpha_mode: CompositeAlphaMode::Auto,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_srgb_format() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(choose_format(&formats), Ok(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn test_falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba16Float, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_format(&formats), Ok(TextureFormat::Rgba16Float));
    }

    #[test]
    fn test_no_formats_is_an_error() {
        assert!(choose_format(&[]).is_err());
    }

    #[test]
    fn test_limits_follow_adapter_resolution() {
        let adapter = Limits {
            max_texture_dimension_2d: 16384,
            ..Limits::default()
        };
        let limits = device_limits(adapter);
        assert_eq!(limits.max_texture_dimension_2d, 16384);
        assert_eq!(
            limits.max_bind_groups,
            Limits::downlevel_defaults().max_bind_groups
        );
    }

    #[test]
    fn test_config_uses_canvas_size() {
        let config = surface_config(TextureFormat::Bgra8UnormSrgb, (800, 600));
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.present_mode, PresentMode::Fifo);

        let empty = surface_config(TextureFormat::Bgra8UnormSrgb, (0, 0));
        assert_eq!((empty.width, empty.height), (1, 1));
    }
}

use web_sys::HtmlCanvasElement;
use wgpu::*;

use crate::surface;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// WebGPU only; there is no WebGL fallback
pub async fn init_wgpu(canvas: HtmlCanvasElement) -> Result<WgpuContext, String> {
    // Canvas size is fixed for the session
    let size = (canvas.width(), canvas.height());

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let target = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&target),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "WebGPU adapter unavailable".to_string())?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let (device, queue) = open_device(&adapter).await?;

    let format = surface::choose_format(&target.get_capabilities(&adapter).formats)?;
    let config = surface::surface_config(format, size);
    target.configure(&device, &config);
    log::debug!("Surface {:?} at {}x{}", format, config.width, config.height);

    Ok(WgpuContext {
        device,
        queue,
        surface: target,
        config,
        size,
    })
}

async fn open_device(adapter: &Adapter) -> Result<(Device, Queue), String> {
    adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong Device"),
                required_features: Features::empty(),
                required_limits: surface::device_limits(adapter.limits()),
                memory_hints: MemoryHints::Performance,
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))
}

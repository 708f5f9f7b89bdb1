//! Pointer input handling

/// Pointer y relative to the canvas origin, in canvas pixels
pub fn canvas_y(client_y: f64, canvas_top: f64) -> f32 {
    (client_y - canvas_top) as f32
}

/// Extract the canvas-relative y from a mouse event
#[cfg(target_arch = "wasm32")]
pub fn pointer_y(event: &web_sys::MouseEvent, canvas: &web_sys::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    canvas_y(event.client_y() as f64, rect.top())
}

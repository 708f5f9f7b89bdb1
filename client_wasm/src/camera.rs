//! Camera for Pong game
//!
//! 2D orthographic camera in canvas pixels: origin top-left, y down

use glam::{Mat4, Vec3};

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera covering a `width` x `height` pixel canvas
    pub fn pixel_space(width: f32, height: f32) -> Self {
        let view = Mat4::IDENTITY;

        // Top edge maps to +1 in clip space, so y grows downward on screen
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);

        Self { view, projection }
    }

    pub fn to_clip(&self, x: f32, y: f32) -> Vec3 {
        (self.projection * self.view).project_point3(Vec3::new(x, y, 0.0))
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes (mat4x4)
    _padding: [f32; 48],      // 192 bytes padding (48 * 4) to reach 256 bytes
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}

use wgpu::util::DeviceExt;
use wgpu::*;

use crate::batch::InstanceData;
use crate::camera::{Camera, CameraUniform};

/// Starting instance capacity; a frame normally needs fewer than 64
pub const INITIAL_INSTANCES: usize = 128;

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub instance_capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    // Camera buffer
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    GameBuffers {
        camera: camera_buffer,
        instances: create_instance_buffer(device, INITIAL_INSTANCES),
        instance_capacity: INITIAL_INSTANCES,
    }
}

pub fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl GameBuffers {
    /// Grow the instance buffer to hold at least `needed` instances
    pub fn reserve(&mut self, device: &Device, needed: usize) {
        if needed <= self.instance_capacity {
            return;
        }
        let capacity = needed.next_power_of_two();
        log::debug!(
            "growing instance buffer {} -> {}",
            self.instance_capacity,
            capacity
        );
        self.instances = create_instance_buffer(device, capacity);
        self.instance_capacity = capacity;
    }
}

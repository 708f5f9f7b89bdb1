//! WebGPU canvas client for Pong
//!
//! Runs the `game_core` simulation once per animation frame, paints it with
//! wgpu and feeds mouse movement to the left paddle.

pub mod batch;
pub mod camera;
pub mod glyphs;
pub mod input;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod mesh;
#[cfg(target_arch = "wasm32")]
mod renderer;

/// Id of the `<canvas>` element the game draws into
pub const CANVAS_ID: &str = "pong";

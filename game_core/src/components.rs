use glam::Vec2;
use rand::Rng;

use crate::map::Aabb;

/// Which end of the playfield an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,  // human
    Right, // scripted
}

/// Paddle component - fixed x, vertical position moves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32, // top edge
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.height),
        )
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Follows the pointer
    Pointer,
    /// Chases the ball with a fixed step
    Autopilot,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2,
    pub size: f32,
    pub speed: f32, // base speed, used for serves and spin
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Serve from `spawn` at base speed, independent random sign on each axis
    pub fn reset(&mut self, spawn: Vec2, rng: &mut crate::GameRng) {
        self.pos = spawn;

        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * self.speed, sy * self.speed);
    }
}

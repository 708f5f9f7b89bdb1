use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ball_speed_increase: f32,
    pub autopilot_deadband: f32,
    pub autopilot_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            autopilot_deadband: Params::AUTOPILOT_DEADBAND,
            autopilot_step: Params::AUTOPILOT_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a playfield of the given size (read once from the canvas)
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.playfield_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Top of a paddle centred vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        self.playfield_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top to `[0, playfield_height - paddle_height]`
    ///
    /// Never panics, even when the playfield is shorter than a paddle.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.playfield_height - self.paddle_height).max(0.0)
    }

    /// Top-left corner of the ball when served from the centre
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width / 2.0 - self.ball_size / 2.0,
            self.playfield_height / 2.0 - self.ball_size / 2.0,
        )
    }
}

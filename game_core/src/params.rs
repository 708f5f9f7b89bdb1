/// Game tuning parameters for Pong
///
/// Distances are canvas pixels and speeds are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (the client replaces these with the canvas size)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 30.0; // gap between side wall and paddle

    // Ball
    pub const BALL_SIZE: f32 = 14.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.04; // Multiply dx on paddle hit, no cap

    // Scripted paddle
    pub const AUTOPILOT_DEADBAND: f32 = 25.0;
    pub const AUTOPILOT_STEP: f32 = 5.0;

    // Net
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_DASH: f32 = 16.0;
    pub const NET_SPACING: f32 = 30.0;

    // Score labels
    pub const SCORE_FONT_SIZE: f32 = 40.0;
    pub const SCORE_BASELINE: f32 = 50.0;
}

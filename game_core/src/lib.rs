//! Deterministic core of a mouse-versus-autopilot Pong game
//!
//! Entities live in a `hecs::World`; the systems in [`systems`] advance them
//! one display frame at a time and [`render`] projects them onto a
//! [`Painter`].

pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the Pong simulation by one frame
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 3. Check scoring (ball exited playfield)
    check_scoring(world, config, score, events, rng);

    // 4. Scripted paddle chases the ball
    drive_autopilot(world, config);
}

/// Helper to create a paddle entity, vertically centred
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    side: Side,
    controller: Controller,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side),
        config.paddle_spawn_y(),
        config.paddle_width,
        config.paddle_height,
    );
    world.spawn((paddle, controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_size, config.ball_speed),))
}

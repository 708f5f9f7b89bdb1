use glam::Vec2;
use hecs::World;

use crate::systems::apply_pointer;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Controller, Events, GameRng, Paddle, Score,
    Side,
};

/// Everything one match needs, owned in one place.
///
/// The frame loop holds a single `Game` and calls [`Game::step`] once per
/// display frame; pointer events go through [`Game::point_at`].
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub frame: u64,
}

impl Game {
    /// Centre both paddles and serve the ball in a random direction
    pub fn new(config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, &config, Side::Left, Controller::Pointer);
        create_paddle(&mut world, &config, Side::Right, Controller::Autopilot);

        // Create ball
        let spawn = config.ball_spawn();
        let mut ball = Ball::new(spawn, Vec2::ZERO, config.ball_size, config.ball_speed);
        ball.reset(spawn, &mut rng);
        create_ball(&mut world, &config, ball.pos, ball.vel);
        log::debug!("serve {} from {}", ball.vel, ball.pos);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            frame: 0,
        }
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::new(config, GameRng::new(seed))
    }

    /// Advance one frame
    pub fn step(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.frame += 1;

        if self.events.scored() {
            log::info!(
                "frame {}: score {} - {}",
                self.frame,
                self.score.left,
                self.score.right
            );
        }
        &self.events
    }

    /// Pointer moved to `y` in playfield coordinates
    pub fn point_at(&mut self, y: f32) {
        apply_pointer(&mut self.world, &self.config, y);
    }

    /// Copy of the state the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap_or_else(|| {
                Ball::new(
                    self.config.ball_spawn(),
                    Vec2::ZERO,
                    self.config.ball_size,
                    self.config.ball_speed,
                )
            });

        let mut left = None;
        let mut right = None;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left = Some(*paddle),
                Side::Right => right = Some(*paddle),
            }
        }
        let fallback = |side: Side| {
            Paddle::new(
                side,
                self.config.paddle_x(side),
                self.config.paddle_spawn_y(),
                self.config.paddle_width,
                self.config.paddle_height,
            )
        };

        Snapshot {
            left: left.unwrap_or_else(|| fallback(Side::Left)),
            right: right.unwrap_or_else(|| fallback(Side::Right)),
            ball,
            score: self.score,
        }
    }

    /// Replace the ball's position and velocity (for scripted setups)
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle's top edge, clamped to the playfield
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let y = self.config.clamp_paddle_y(y);
        for (_e, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.y = y;
            }
        }
    }
}

/// Read-only view of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let game = Game::with_seed(Config::new(), 1);
        let snap = game.snapshot();

        assert_eq!(snap.left.x, 30.0);
        assert_eq!(snap.right.x, 758.0);
        assert_eq!(snap.left.y, 250.0);
        assert_eq!(snap.right.y, 250.0);
        assert_eq!(snap.ball.pos, Vec2::new(393.0, 293.0));
        assert_eq!(snap.ball.vel.abs(), Vec2::splat(5.0), "Opening serve at base speed");
        assert_eq!(snap.score, Score::new());
    }

    #[test]
    fn test_step_counts_frames() {
        let mut game = Game::with_seed(Config::new(), 1);
        game.step();
        game.step();
        assert_eq!(game.frame, 2);
    }

    #[test]
    fn test_point_at_moves_only_human_paddle() {
        let mut game = Game::with_seed(Config::new(), 3);
        game.point_at(120.0);

        let snap = game.snapshot();
        assert_eq!(snap.left.y, 70.0);
        assert_eq!(snap.right.y, 250.0);
    }

    #[test]
    fn test_place_paddle_clamps() {
        let mut game = Game::with_seed(Config::new(), 3);
        game.place_paddle(Side::Right, 900.0);
        assert_eq!(game.snapshot().right.y, 500.0);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = Game::with_seed(Config::new(), 77);
        let mut b = Game::with_seed(Config::new(), 77);
        for _ in 0..600 {
            a.step();
            b.step();
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

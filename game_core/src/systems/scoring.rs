use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if ball left the playfield (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Check if ball exited left or right edge
        if ball.pos.x < 0.0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;
            log::debug!("right scores, {}:{}", score.left, score.right);

            ball.reset(config.ball_spawn(), rng);
        } else if ball.pos.x + ball.size > config.playfield_width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;
            log::debug!("left scores, {}:{}", score.left, score.right);

            ball.reset(config.ball_spawn(), rng);
        }
    }
}

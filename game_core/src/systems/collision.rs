use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Copy paddles out first so the ball can be borrowed mutably
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        for paddle in &paddles {
            if bounce_off_paddle(ball, paddle, config) {
                log::trace!("ball hit {:?} paddle, vel = {}", paddle.side, ball.vel);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect off the top and bottom walls, clamping the ball inside
fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    let mut hit = false;

    if ball.pos.y <= 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    let floor = config.playfield_height - ball.size;
    if ball.pos.y >= floor {
        ball.pos.y = floor;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }

    hit
}

/// Bounce off a paddle when the ball's leading edge is inside it.
///
/// The ball is pushed to the paddle face, `dx` is reversed and scaled, and
/// `dy` is set by where on the paddle it landed: centre gives 0, either end
/// gives the full base speed.
fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    let ball_box = ball.bounds();
    let paddle_box = paddle.bounds();

    let leading_edge = match paddle.side {
        Side::Left => ball_box.min.x,
        Side::Right => ball_box.max.x,
    };
    if !paddle_box.contains_x(leading_edge) || !ball_box.overlaps_y(&paddle_box) {
        return false;
    }

    ball.pos.x = match paddle.side {
        Side::Left => paddle_box.max.x,
        Side::Right => paddle_box.min.x - ball.size,
    };
    ball.vel.x *= -config.ball_speed_increase;

    let offset = (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0);
    ball.vel.y = ball.speed * offset;

    true
}

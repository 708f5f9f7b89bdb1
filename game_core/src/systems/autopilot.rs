use crate::{Ball, Config, Controller, Paddle};
use hecs::World;

/// Steer scripted paddles toward the ball.
///
/// Bang-bang with a deadband: step a fixed distance toward the ball's
/// centre when it is more than `autopilot_deadband` away, otherwise hold.
pub fn drive_autopilot(world: &mut World, config: &Config) {
    let ball_center = {
        let mut query = world.query::<&Ball>();
        let center = query.iter().next().map(|(_e, ball)| ball.center_y());
        center
    };
    let Some(ball_center) = ball_center else {
        return; // No ball in world
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Autopilot {
            continue;
        }

        let center = paddle.center_y();
        if center < ball_center - config.autopilot_deadband {
            paddle.y += config.autopilot_step;
        } else if center > ball_center + config.autopilot_deadband {
            paddle.y -= config.autopilot_step;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

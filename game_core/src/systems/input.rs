use crate::{Config, Controller, Paddle};
use hecs::World;

/// Centre pointer-controlled paddles on a pointer y (playfield coordinates).
///
/// Written straight through, clamped; the latest call before a frame wins.
pub fn apply_pointer(world: &mut World, config: &Config, pointer_y: f32) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Pointer {
            paddle.y = config.clamp_paddle_y(pointer_y - paddle.height / 2.0);
        }
    }
}

use crate::Ball;
use hecs::World;

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::Vec2;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config, Vec2::new(100.0, 200.0), Vec2::new(5.0, -5.0));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(110.0, 190.0));
            assert_eq!(ball.vel, Vec2::new(5.0, -5.0), "Velocity is untouched");
        }
    }
}

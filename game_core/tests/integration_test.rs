use game_core::*;
use glam::Vec2;

fn ball(game: &Game) -> Ball {
    game.snapshot().ball
}

#[test]
fn test_free_flight_from_center() {
    let mut game = Game::with_seed(Config::new(), 1);
    let center = game.config.ball_spawn();
    game.place_ball(center, Vec2::new(5.0, 5.0));

    let events = game.step().clone();

    assert_eq!(ball(&game).pos, center + Vec2::new(5.0, 5.0));
    assert_eq!(ball(&game).vel, Vec2::new(5.0, 5.0));
    assert_eq!(game.score, Score::new());
    assert_eq!(events, Events::new(), "No collision or score");
}

#[test]
fn test_center_hit_on_human_paddle() {
    let mut game = Game::with_seed(Config::new(), 1);
    let paddle = game.snapshot().left;
    let y = paddle.center_y() - game.config.ball_size / 2.0;
    game.place_ball(Vec2::new(paddle.x + paddle.width, y), Vec2::new(-5.0, 0.0));

    let events = game.step().clone();

    let ball = ball(&game);
    assert!(events.ball_hit_paddle);
    assert_eq!(ball.pos.x, paddle.x + paddle.width, "Sits on the paddle face");
    assert!((ball.vel.x - 5.2).abs() < 1e-5, "5 x 1.04, got {}", ball.vel.x);
    assert_eq!(ball.vel.y, 0.0, "Centre hit has no spin");
}

#[test]
fn test_hit_on_scripted_paddle_lands_on_left_face() {
    let mut game = Game::with_seed(Config::new(), 1);
    let paddle = game.snapshot().right;
    let size = game.config.ball_size;
    let y = paddle.center_y() - size / 2.0;
    game.place_ball(Vec2::new(paddle.x - size - 2.0, y), Vec2::new(6.0, 0.0));

    game.step();

    let ball = ball(&game);
    assert_eq!(ball.pos.x, paddle.x - size);
    assert!(ball.vel.x < 0.0);
    assert!((ball.vel.x.abs() - 6.0 * 1.04).abs() < 1e-5);
}

#[test]
fn test_miss_on_human_side_scores_for_opponent() {
    let mut game = Game::with_seed(Config::new(), 9);
    // Move the human paddle out of the way
    game.place_paddle(Side::Left, 0.0);
    game.place_ball(Vec2::new(3.0, 500.0), Vec2::new(-5.0, 1.0));

    let events = game.step().clone();

    assert!(events.right_scored);
    assert_eq!(game.score, Score { left: 0, right: 1 });
    let ball = ball(&game);
    assert_eq!(ball.pos, game.config.ball_spawn());
    assert_eq!(ball.vel.abs(), Vec2::splat(game.config.ball_speed));
}

#[test]
fn test_miss_on_scripted_side_scores_for_human() {
    let mut game = Game::with_seed(Config::new(), 9);
    game.place_paddle(Side::Right, 0.0);
    let x = game.config.playfield_width - game.config.ball_size - 2.0;
    game.place_ball(Vec2::new(x, 560.0), Vec2::new(5.0, 1.0));

    let events = game.step().clone();

    assert!(events.left_scored);
    assert_eq!(game.score, Score { left: 1, right: 0 });
}

#[test]
fn test_corner_bounce_then_paddle() {
    // Ball skims the top wall on the same frame it reaches the human paddle
    let mut game = Game::with_seed(Config::new(), 2);
    game.place_paddle(Side::Left, 0.0);
    game.place_ball(Vec2::new(40.0, 2.0), Vec2::new(-5.0, -5.0));

    let events = game.step().clone();

    let ball = ball(&game);
    assert!(events.ball_hit_wall);
    assert!(events.ball_hit_paddle);
    assert_eq!(ball.pos, Vec2::new(42.0, 0.0));
    assert!(ball.vel.x > 0.0);
}

#[test]
fn test_autopilot_follows_after_serve() {
    let mut game = Game::with_seed(Config::new(), 4);
    game.place_ball(Vec2::new(400.0, 500.0), Vec2::new(-5.0, 0.0));

    game.step();

    assert_eq!(game.snapshot().right.y, 255.0, "One step of 5 toward the ball");
}

#[test]
fn test_speed_keeps_growing_over_a_rally() {
    let mut game = Game::with_seed(Config::new(), 4);
    let paddle = game.snapshot().left;
    let y = paddle.center_y() - game.config.ball_size / 2.0;

    let mut speed = 5.0_f32;
    for _ in 0..30 {
        // Start so the ball's left edge ends the move just inside the paddle
        let x = paddle.x + paddle.width + speed - 1.0;
        game.place_ball(Vec2::new(x, y), Vec2::new(-speed, 0.0));
        game.step();
        let next = ball(&game).vel.x;
        assert!(next > speed);
        speed = next;
    }
    assert!(speed > 5.0 * 1.04_f32.powi(29));
}

#[test]
fn test_long_match_keeps_invariants() {
    let mut game = Game::with_seed(Config::new(), 2024);
    let max_y = game.config.playfield_height - game.config.paddle_height;
    let mut last = game.score;

    for frame in 0..20_000u32 {
        // Sweep the pointer up and down the playfield
        game.point_at(((frame * 7) % 700) as f32 - 50.0);
        game.step();

        let snap = game.snapshot();
        assert!((0.0..=max_y).contains(&snap.left.y));
        assert!((0.0..=max_y).contains(&snap.right.y));
        assert!(snap.ball.pos.y >= 0.0);
        assert!(snap.ball.pos.y <= game.config.playfield_height - snap.ball.size);
        assert!(snap.score.left >= last.left && snap.score.right >= last.right);
        assert!(snap.score.left + snap.score.right <= last.left + last.right + 1);
        last = snap.score;
    }

    assert!(last.left + last.right > 0, "Somebody scores eventually");
}

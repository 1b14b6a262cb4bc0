//! Collision detection and response
//!
//! Walls reflect the vertical velocity. Paddles ignore the incoming angle
//! and send the ball back at an angle set by where it struck the paddle.

use glam::Vec2;

use super::state::{Ball, Paddle, Side};
use crate::consts::*;

/// Clamp a velocity to the ball speed cap
#[inline]
pub fn cap_speed(vel: Vec2) -> Vec2 {
    vel.clamp_length_max(MAX_BALL_SPEED)
}

/// Bounce the ball off the top or bottom wall if it has reached one
///
/// Only a ball moving into the wall is reflected, so a ball that is still
/// past the edge on the next tick cannot get stuck flipping back and forth.
pub fn wall_bounce(ball: &mut Ball) -> bool {
    let at_top = ball.pos.y <= 0.0 && ball.vel.y < 0.0;
    let at_bottom = ball.pos.y >= CANVAS_HEIGHT - BALL_SIZE && ball.vel.y > 0.0;
    if !(at_top || at_bottom) {
        return false;
    }

    ball.vel.y = -ball.vel.y * WALL_BOOST;
    ball.vel = cap_speed(ball.vel);
    true
}

/// Bounce angle for a ball striking `paddle` at top offset `ball_y`
///
/// Zero at the paddle center, up to MAX_BOUNCE_ANGLE at either end. Positive
/// angles send the ball upward (toward smaller y).
pub fn bounce_angle(ball_y: f32, paddle: &Paddle) -> f32 {
    let half = PADDLE_HEIGHT / 2.0;
    let normalized = ((paddle.center() - ball_y) / half).clamp(-1.0, 1.0);
    normalized * MAX_BOUNCE_ANGLE
}

/// Whether the ball reached `side`'s paddle face during this tick
///
/// `prev_x` is the ball's x before it moved. The ball must be travelling
/// toward the paddle, cross (or touch) the face plane, and overlap the
/// paddle's vertical span.
pub fn paddle_contact(ball: &Ball, prev_x: f32, paddle: &Paddle, side: Side) -> bool {
    let face = side.face_x();
    let crossed = match side {
        Side::Player => ball.vel.x < 0.0 && prev_x >= face && ball.pos.x <= face,
        Side::Computer => ball.vel.x > 0.0 && prev_x <= face && ball.pos.x >= face,
    };
    crossed && paddle.spans(ball.pos.y)
}

/// Send the ball back from `side`'s paddle, faster
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side) {
    let angle = bounce_angle(ball.pos.y, paddle);
    let speed = (ball.speed() * PADDLE_BOOST).min(MAX_BALL_SPEED);

    ball.vel = Vec2::new(
        side.direction() * angle.cos() * speed,
        -angle.sin() * speed,
    );
    ball.pos.x = side.face_x();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut b = ball(100.0, -1.0, 3.0, -4.0);
        assert!(wall_bounce(&mut b));
        assert!((b.vel.y - 4.2).abs() < 1e-5);
        assert_eq!(b.vel.x, 3.0);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut b = ball(100.0, CANVAS_HEIGHT - BALL_SIZE, 3.0, 4.0);
        assert!(wall_bounce(&mut b));
        assert!(b.vel.y < 0.0);
    }

    #[test]
    fn test_wall_bounce_ignores_ball_leaving_wall() {
        let mut b = ball(100.0, -0.5, 3.0, 0.2);
        assert!(!wall_bounce(&mut b));
        assert_eq!(b.vel, Vec2::new(3.0, 0.2));
    }

    #[test]
    fn test_wall_bounce_respects_cap() {
        let mut b = ball(100.0, 0.0, 12.0, -9.0);
        assert!(wall_bounce(&mut b));
        assert!(b.speed() <= MAX_BALL_SPEED + 1e-4);
        assert!(b.vel.y > 0.0);
    }

    #[test]
    fn test_bounce_angle_range() {
        let paddle = Paddle::new(150.0);
        assert_eq!(bounce_angle(200.0, &paddle), 0.0);
        assert!((bounce_angle(150.0, &paddle) - MAX_BOUNCE_ANGLE).abs() < 1e-6);
        assert!((bounce_angle(250.0, &paddle) + MAX_BOUNCE_ANGLE).abs() < 1e-6);
    }

    #[test]
    fn test_center_hit_goes_straight_and_faster() {
        let paddle = Paddle::new(150.0);
        let mut b = ball(6.0, 200.0, -5.0, 0.0);
        assert!(paddle_contact(&b, 11.0, &paddle, Side::Player));

        deflect(&mut b, &paddle, Side::Player);
        assert!(b.vel.y.abs() < 1e-5);
        assert!((b.vel.x - 5.0 * PADDLE_BOOST).abs() < 1e-4);
        assert_eq!(b.pos.x, PADDLE_WIDTH);
    }

    #[test]
    fn test_edge_hit_deflects_upward() {
        let paddle = Paddle::new(150.0);
        let mut b = ball(CANVAS_WIDTH - 19.0, 160.0, 5.0, 0.0);
        deflect(&mut b, &paddle, Side::Computer);
        assert!(b.vel.x < 0.0);
        assert!(b.vel.y < 0.0);
    }

    #[test]
    fn test_deflect_caps_speed() {
        let paddle = Paddle::new(150.0);
        let mut b = ball(5.0, 180.0, -14.0, 3.0);
        deflect(&mut b, &paddle, Side::Player);
        assert!((b.speed() - MAX_BALL_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_no_contact_outside_span_or_moving_away() {
        let paddle = Paddle::new(150.0);
        let below = ball(5.0, 260.0, -5.0, 0.0);
        assert!(!paddle_contact(&below, 10.0, &paddle, Side::Player));

        let leaving = ball(5.0, 200.0, 5.0, 0.0);
        assert!(!paddle_contact(&leaving, 0.0, &paddle, Side::Player));

        // Already behind the face before moving
        let behind = ball(-3.0, 200.0, -5.0, 0.0);
        assert!(!paddle_contact(&behind, 2.0, &paddle, Side::Player));
    }
}

//! Opponent controller and attract-mode autopilot
//!
//! Both steer a paddle toward where the ball will cross the paddle's plane,
//! predicted by straight-line extrapolation (wall bounces are ignored).

use super::state::{Ball, GameState, Paddle, Side};
use crate::consts::*;

/// Predicted ball center y when the ball reaches `plane_x`
///
/// Returns `None` unless the ball is moving toward the plane.
pub fn predict_crossing_y(ball: &Ball, plane_x: f32) -> Option<f32> {
    let toward = (plane_x - ball.pos.x) * ball.vel.x;
    if ball.vel.x == 0.0 || toward < 0.0 {
        return None;
    }
    let ticks = (plane_x - ball.pos.x) / ball.vel.x;
    let y = ball.center_y() + ball.vel.y * ticks;
    Some(y.clamp(0.0, CANVAS_HEIGHT))
}

/// Where `side`'s paddle center should go
pub fn target_y(ball: &Ball, side: Side) -> f32 {
    let plane_x = match side {
        Side::Player => PADDLE_WIDTH,
        Side::Computer => CANVAS_WIDTH - PADDLE_WIDTH,
    };
    predict_crossing_y(ball, plane_x).unwrap_or_else(|| ball.center_y())
}

/// Direction to move a paddle so its center approaches `target`
///
/// -1.0 is up, 1.0 is down, 0.0 inside the dead zone.
pub fn steer(paddle: &Paddle, target: f32) -> f32 {
    let center = paddle.center();
    if center < target - COMPUTER_DEAD_ZONE {
        1.0
    } else if center > target + COMPUTER_DEAD_ZONE {
        -1.0
    } else {
        0.0
    }
}

/// Move the computer paddle one tick toward the predicted intercept
pub fn move_opponent(state: &mut GameState) {
    // The served ball is pinned to the paddle; chasing it would drag both
    if state.is_serving() && state.server == Side::Computer {
        return;
    }
    let target = target_y(&state.ball, Side::Computer);
    let dir = steer(&state.computer, target);
    state
        .computer
        .move_by(dir * PADDLE_SPEED * COMPUTER_SPEED_FACTOR);
}

/// Up/down key flags that move the player paddle toward the ball
pub fn autopilot_keys(state: &GameState) -> (bool, bool) {
    if state.is_serving() {
        return (false, false);
    }
    let target = target_y(&state.ball, Side::Player);
    let dir = steer(&state.player, target);
    (dir < 0.0, dir > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
        }
    }

    #[test]
    fn test_predict_only_when_approaching() {
        let b = ball(400.0, 100.0, 5.0, 1.0);
        let y = predict_crossing_y(&b, 790.0).unwrap();
        assert!((y - (105.0 + 78.0)).abs() < 1e-3);

        let away = ball(400.0, 100.0, -5.0, 1.0);
        assert!(predict_crossing_y(&away, 790.0).is_none());

        let still = ball(400.0, 100.0, 0.0, 0.0);
        assert!(predict_crossing_y(&still, 790.0).is_none());
    }

    #[test]
    fn test_prediction_is_clamped() {
        let b = ball(100.0, 300.0, 1.0, 5.0);
        assert_eq!(predict_crossing_y(&b, 790.0), Some(CANVAS_HEIGHT));
    }

    #[test]
    fn test_steer_dead_zone() {
        let paddle = Paddle::new(150.0);
        assert_eq!(steer(&paddle, 201.5), 0.0);
        assert_eq!(steer(&paddle, 198.5), 0.0);
        assert_eq!(steer(&paddle, 250.0), 1.0);
        assert_eq!(steer(&paddle, 100.0), -1.0);
    }

    #[test]
    fn test_opponent_moves_toward_ball() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Rallying;
        state.ball = ball(400.0, 20.0, 5.0, 0.0);
        move_opponent(&mut state);
        let expected = 150.0 - PADDLE_SPEED * COMPUTER_SPEED_FACTOR;
        assert!((state.computer.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_opponent_stops_at_top() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Rallying;
        state.computer.y = 2.0;
        state.ball = ball(400.0, 0.0, -5.0, 0.0);
        move_opponent(&mut state);
        assert_eq!(state.computer.y, 0.0);
    }

    #[test]
    fn test_opponent_holds_while_serving() {
        let mut state = GameState::new(3);
        state.reset_for_serve(Side::Computer);
        let before = state.computer.y;
        move_opponent(&mut state);
        assert_eq!(state.computer.y, before);
    }

    #[test]
    fn test_autopilot_tracks_incoming_ball() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Rallying;
        state.ball = ball(400.0, 350.0, -5.0, 0.0);
        assert_eq!(autopilot_keys(&state), (false, true));
    }
}

//! Game state and core simulation types
//!
//! Everything the tick needs lives here; the state is plain data and can be
//! serialized for snapshots.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::clamp_paddle_y;
use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player, left paddle
    Player,
    /// Computer opponent, right paddle
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Horizontal direction a ball travels when leaving this side's paddle
    pub fn direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }

    /// x the ball's left edge is pinned to while this side serves
    pub fn serve_x(self) -> f32 {
        match self {
            Side::Player => PADDLE_WIDTH * 2.0,
            Side::Computer => CANVAS_WIDTH - PADDLE_WIDTH * 3.0,
        }
    }

    /// x the ball's left edge sits at when touching this side's paddle face
    pub fn face_x(self) -> f32 {
        match self {
            Side::Player => PADDLE_WIDTH,
            Side::Computer => CANVAS_WIDTH - PADDLE_WIDTH - BALL_SIZE,
        }
    }
}

/// Serve/rally phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball held at the server's paddle, waiting for launch
    Serving,
    /// Ball in play
    Rallying,
}

/// Something that happened during a tick, consumed by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball launched by `server`
    Served { server: Side },
    /// Ball deflected off a paddle
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// `scorer` won a point; `score` is the score after it
    PointScored { scorer: Side, score: Score },
}

/// A paddle; only the vertical offset moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top offset, always within [0, CANVAS_HEIGHT - PADDLE_HEIGHT]
    pub y: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            y: CANVAS_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
        }
    }
}

impl Paddle {
    pub fn new(y: f32) -> Self {
        Self {
            y: clamp_paddle_y(y),
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.y + PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + PADDLE_HEIGHT
    }

    /// Whether `y` lies within the paddle's vertical span (inclusive)
    pub fn spans(&self, y: f32) -> bool {
        y >= self.y && y <= self.bottom()
    }

    /// Move by `delta`, stopping at the field edges
    pub fn move_by(&mut self, delta: f32) {
        self.y = clamp_paddle_y(self.y + delta);
    }
}

/// The ball, an axis-aligned square of side BALL_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
}

impl Ball {
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + BALL_SIZE / 2.0
    }

    /// Hold the ball at `paddle`, on `server`'s side
    pub fn pin_to(&mut self, server: Side, paddle: &Paddle) {
        self.pos = Vec2::new(server.serve_x(), paddle.center());
        self.vel = Vec2::ZERO;
    }
}

/// Trail point for ball rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 for the newest point, fading linearly with age
    pub opacity: f32,
}

/// Recent ball positions, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    /// Record `pos` as the newest point and age the rest
    pub fn record(&mut self, pos: Vec2) {
        self.points.truncate(TRAIL_LENGTH - 1);
        self.points.insert(0, TrailPoint { pos, opacity: 1.0 });
        for (rank, point) in self.points.iter_mut().enumerate().skip(1) {
            point.opacity = 1.0 - rank as f32 / TRAIL_LENGTH as f32;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Points won by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Seeded RNG position, serializable as two integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Number of values drawn so far
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        rng.advance(self.draws);
        rng
    }

    /// Uniform sample in [-max, max]
    pub fn symmetric(&mut self, max: f32) -> f32 {
        let mut rng = self.to_rng();
        let value = rng.random_range(-max..=max);
        self.draws += 1;
        value
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Serve/rally phase
    pub phase: GamePhase,
    /// Who serves next, or is serving now
    pub server: Side,
    /// Ticks left before the computer launches its serve
    pub serve_countdown: u32,
    /// Ticks are ignored while paused
    pub paused: bool,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Trail history for rendering (newest first)
    pub trail: Trail,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game: paddles centered, player to serve
    pub fn new(seed: u64) -> Self {
        let player = Paddle::default();
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.pin_to(Side::Player, &player);

        Self {
            seed,
            rng: RngState::new(seed),
            time_ticks: 0,
            phase: GamePhase::Serving,
            server: Side::Player,
            serve_countdown: 0,
            paused: false,
            player,
            computer: Paddle::default(),
            ball,
            score: Score::default(),
            trail: Trail::default(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_serving(&self) -> bool {
        self.phase == GamePhase::Serving
    }

    /// True while the player has to press serve
    #[inline]
    pub fn awaiting_player_serve(&self) -> bool {
        self.is_serving() && self.server == Side::Player
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    /// Pin the ball to the current server's paddle
    pub fn pin_ball(&mut self) {
        let paddle = *self.paddle(self.server);
        self.ball.pin_to(self.server, &paddle);
    }

    /// Put the ball back on `server`'s paddle after a point
    pub fn reset_for_serve(&mut self, server: Side) {
        self.server = server;
        self.phase = GamePhase::Serving;
        self.trail.clear();
        self.serve_countdown = match server {
            Side::Computer => AUTO_SERVE_DELAY_TICKS,
            Side::Player => 0,
        };
        self.pin_ball();
    }

    /// Launch the ball from the server's paddle at a random angle
    pub fn launch(&mut self) {
        let angle = self.rng.symmetric(MAX_SERVE_ANGLE);
        self.ball.vel = Vec2::new(
            self.server.direction() * INITIAL_BALL_SPEED,
            angle.sin() * INITIAL_BALL_SPEED,
        );
        self.phase = GamePhase::Rallying;
        self.serve_countdown = 0;
        self.events.push(GameEvent::Served {
            server: self.server,
        });
    }
}

//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; component functions
//! borrow the pieces they need.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::{scroll_speed, spawn_interval};
use crate::highscores::SessionBest;
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an explicit restart
    GameOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Spawned { id: u32, height: f32 },
    Passed { id: u32, score: u32 },
    SpeedUp { speed: f32 },
    Collided { id: u32, score: u32 },
    /// Session best beaten at the moment of collision
    NewBest { score: u32 },
    Restarted,
}

/// Host drawing surface dimensions, read fresh every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Resting y of the player's top edge, also the obstacles' top edge
    #[inline]
    pub fn ground_y(&self, tuning: &Tuning) -> f32 {
        self.height - tuning.ground_offset
    }
}

/// The rolling player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the circumscribing square (x never changes)
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub jump_power: f32,
    pub gravity: f32,
    /// Roll angle in radians (cosmetic only)
    pub angle: f32,
    pub airborne: bool,
}

impl Player {
    pub fn new(tuning: &Tuning, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, ground_y),
            radius: tuning.player_radius,
            vel_y: 0.0,
            jump_power: tuning.jump_power,
            gravity: tuning.gravity,
            angle: 0.0,
            airborne: false,
        }
    }

    /// Put the player back on the ground at rest
    pub fn reset(&mut self, ground_y: f32) {
        self.pos.y = ground_y;
        self.vel_y = 0.0;
        self.angle = 0.0;
        self.airborne = false;
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Circumscribing square used for collisions
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.pos, Vec2::splat(self.diameter()))
    }
}

/// A tree scrolling toward the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Set once the trailing edge is behind the player
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            width,
            height,
            passed: false,
        }
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Number of spawned heights the generator looks back at
pub const RECENT_HEIGHTS: usize = 2;

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Heights of the most recent spawns, oldest first
    pub recent_heights: Vec<f32>,
    pub score: u32,
    /// Obstacles passed since the last reset
    pub obstacle_counter: u32,
    /// Scroll speed (pixels/tick)
    pub speed: f32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    pub spawn_interval: u32,
    /// Survives restarts
    pub best: SessionBest,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport) -> Self {
        let player = Player::new(&tuning, viewport.ground_y(&tuning));
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Playing,
            player,
            obstacles: Vec::new(),
            recent_heights: Vec::with_capacity(RECENT_HEIGHTS),
            score: 0,
            obstacle_counter: 0,
            speed: scroll_speed(0),
            spawn_timer: 0,
            spawn_interval: spawn_interval(0),
            best: SessionBest::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Back to startup defaults, keeping the session best and the RNG stream
    pub fn reset(&mut self, viewport: Viewport) {
        self.phase = GamePhase::Playing;
        self.player.reset(viewport.ground_y(&self.tuning));
        self.obstacles.clear();
        self.recent_heights.clear();
        self.score = 0;
        self.obstacle_counter = 0;
        self.speed = scroll_speed(0);
        self.spawn_timer = 0;
        self.spawn_interval = spawn_interval(0);
        self.time_ticks = 0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Remember a spawned height for the anti-repetition check
    pub fn record_height(&mut self, height: f32) {
        if self.recent_heights.len() == RECENT_HEIGHTS {
            self.recent_heights.remove(0);
        }
        self.recent_heights.push(height);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

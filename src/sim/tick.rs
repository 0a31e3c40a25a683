//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::collides;
use super::difficulty::{scroll_speed, spawn_interval, speed_steps};
use super::physics;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GamePhase, GameState, Viewport};

/// Autopilot jumps once the nearest obstacle is this many ticks of travel away
const AUTOPILOT_LEAD_TICKS: f32 = 6.0;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space/up/tap)
    pub jump: bool,
    /// Start a new run after game over
    pub restart: bool,
    /// Demo mode - the simulation times jumps itself
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, viewport: Viewport) {
    // Game over halts everything except a restart
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset(viewport);
            state.events.push(GameEvent::Restarted);
            log::info!("Run restarted (session best {})", state.best.best);
        }
        return;
    }

    let ground_y = viewport.ground_y(&state.tuning);
    state.time_ticks += 1;

    let wants_jump = input.jump || (input.autopilot && autopilot_wants_jump(state));
    if wants_jump && physics::try_jump(&mut state.player) {
        state.events.push(GameEvent::Jumped);
    }

    // --- SPAWNING ---
    state.spawn_timer += 1;
    state.spawn_interval = spawn_interval(state.obstacle_counter);
    if state.spawn_timer > state.spawn_interval {
        let id = state.next_entity_id();
        let counter = state.obstacle_counter;
        let recent = state.recent_heights.clone();
        let tuning = state.tuning;
        let obstacle = spawn_obstacle(id, counter, &recent, viewport, &tuning, state.rng_mut());
        log::debug!(
            "Spawned obstacle {} (height {}, counter {})",
            id,
            obstacle.height,
            counter
        );
        state.record_height(obstacle.height);
        state.events.push(GameEvent::Spawned {
            id,
            height: obstacle.height,
        });
        state.obstacles.push(obstacle);
        state.spawn_timer = 0;
    }

    // --- SCROLLING ---
    debug_assert!(state.speed > 0.0);
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= state.speed;
    }

    // --- COLLISIONS ---
    let hit = state
        .obstacles
        .iter()
        .find(|o| collides(&state.player, o))
        .map(|o| o.id);

    match hit {
        Some(id) => end_run(state, id),
        None => score_passed(state),
    }

    // --- PLAYER ---
    physics::integrate(&mut state.player, ground_y);
    if state.phase == GamePhase::Playing {
        physics::spin(&mut state.player, state.speed, &state.tuning);
    }

    // Fully scrolled off the left edge
    state.obstacles.retain(|o| o.trailing_edge() >= 0.0);
}

/// Terminal collision: freeze the run and settle the session best
fn end_run(state: &mut GameState, obstacle_id: u32) {
    state.phase = GamePhase::GameOver;
    state.events.push(GameEvent::Collided {
        id: obstacle_id,
        score: state.score,
    });

    if state.best.record(state.score) {
        state.events.push(GameEvent::NewBest { score: state.score });
        log::info!("New session best: {}", state.score);
    }

    log::info!(
        "Game over after {} ticks: score {}, best {}",
        state.time_ticks,
        state.score,
        state.best.best
    );
}

/// Count obstacles whose trailing edge just went behind the player
fn score_passed(state: &mut GameState) {
    let player_x = state.player.pos.x;

    for obstacle in &mut state.obstacles {
        if obstacle.passed || obstacle.trailing_edge() >= player_x {
            continue;
        }
        obstacle.passed = true;

        let prev = state.obstacle_counter;
        state.score += 1;
        state.obstacle_counter += 1;
        state.events.push(GameEvent::Passed {
            id: obstacle.id,
            score: state.score,
        });

        if speed_steps(prev, state.obstacle_counter) > 0 {
            state.speed = scroll_speed(state.obstacle_counter);
            state.events.push(GameEvent::SpeedUp { speed: state.speed });
            log::debug!(
                "Speed up to {} at {} obstacles",
                state.speed,
                state.obstacle_counter
            );
        }
    }

    debug_assert_eq!(state.score, state.obstacle_counter);
}

/// Grounded and the nearest obstacle ahead is about to arrive
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.player.airborne {
        return false;
    }
    let lead = state.player.pos.x + state.player.diameter();
    let reach = state.speed * AUTOPILOT_LEAD_TICKS;
    state
        .obstacles
        .iter()
        .any(|o| o.pos.x >= lead && o.pos.x - lead <= reach)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::state::Obstacle;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn new_state() -> GameState {
        GameState::new(12345, Tuning::default(), VIEWPORT)
    }

    /// Obstacle on the ground line at the given x
    fn place_obstacle(state: &mut GameState, x: f32) {
        let id = state.next_entity_id();
        let y = VIEWPORT.ground_y(&state.tuning);
        state.obstacles.push(Obstacle::new(id, x, y, 30.0, 60.0));
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    fn restart() -> TickInput {
        TickInput {
            restart: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_spawn_after_interval() {
        let mut state = new_state();
        for _ in 0..100 {
            tick(&mut state, &idle(), VIEWPORT);
        }
        assert!(state.obstacles.is_empty());

        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer, 0);
        // Spawned at the right edge, then scrolled in the same tick
        assert_eq!(state.obstacles[0].pos.x, 794.0);
        assert_eq!(state.obstacles[0].height, 60.0);
        assert!(
            state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::Spawned { .. }))
        );
    }

    #[test]
    fn test_spawn_uses_current_viewport() {
        let mut state = new_state();
        for _ in 0..100 {
            tick(&mut state, &idle(), VIEWPORT);
        }
        let wider = Viewport::new(1000.0, 600.0);
        tick(&mut state, &idle(), wider);
        assert_eq!(state.obstacles[0].pos.x, 994.0);
    }

    #[test]
    fn test_jump_one_tick() {
        let mut state = new_state();
        let ground = VIEWPORT.ground_y(&state.tuning);
        tick(&mut state, &jump(), VIEWPORT);

        assert!(state.player.airborne);
        assert!((state.player.vel_y - -14.2).abs() < 1e-5);
        assert!((state.player.pos.y - (ground - 14.2)).abs() < 1e-3);
        assert_eq!(state.drain_events(), vec![GameEvent::Jumped]);
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let mut state = new_state();
        tick(&mut state, &jump(), VIEWPORT);
        state.drain_events();
        let vel = state.player.vel_y;

        tick(&mut state, &jump(), VIEWPORT);
        // Only gravity applied, no new impulse
        assert!((state.player.vel_y - (vel + 0.8)).abs() < 1e-5);
        assert!(state.player.airborne);
        assert!(!state.drain_events().contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_grounded_player_hit_by_obstacle() {
        let viewport = Viewport::new(600.0, 600.0);
        let mut state = GameState::new(1, Tuning::default(), viewport);
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::new(
            id,
            viewport.width,
            viewport.ground_y(&state.tuning),
            30.0,
            60.0,
        ));

        let mut ticks = 0;
        while !state.is_over() {
            tick(&mut state, &idle(), viewport);
            ticks += 1;
            assert!(ticks <= 100, "obstacle never reached the player");
        }

        let obstacle = &state.obstacles[0];
        assert!(obstacle.pos.x < 100.0 && obstacle.pos.x > 20.0);
        assert_eq!(ticks, 84);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Collided { id, score: 0 }));
        // Zero does not beat an empty best
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewBest { .. })));
    }

    #[test]
    fn test_score_counts_once_per_obstacle() {
        let mut state = new_state();
        place_obstacle(&mut state, 25.0);

        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacle_counter, 1);
        assert!(state.obstacles[0].passed);

        tick(&mut state, &idle(), VIEWPORT);
        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.score, 1);
        let passed = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::Passed { .. }))
            .count();
        assert_eq!(passed, 1);
    }

    #[test]
    fn test_trailing_edge_must_clear_player() {
        let mut state = new_state();
        // After scrolling the trailing edge sits exactly on the player's x
        place_obstacle(&mut state, 26.0);
        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.score, 0);
        assert!(!state.is_over());

        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_speed_increases_once_per_ten() {
        let mut state = new_state();
        state.score = 9;
        state.obstacle_counter = 9;
        place_obstacle(&mut state, 25.0);

        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.obstacle_counter, 10);
        assert_eq!(state.speed, 7.0);
        let events = state.drain_events();
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
                .count(),
            1
        );

        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.speed, 7.0);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::SpeedUp { .. }))
        );
    }

    #[test]
    fn test_spawn_interval_follows_counter() {
        let mut state = new_state();
        state.score = 11;
        state.obstacle_counter = 11;
        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.spawn_interval, 70);

        state.score = 21;
        state.obstacle_counter = 21;
        tick(&mut state, &idle(), VIEWPORT);
        assert_eq!(state.spawn_interval, 50);
    }

    #[test]
    fn test_restart_preserves_session_best() {
        let mut state = new_state();
        state.score = 5;
        state.obstacle_counter = 5;
        state.speed = 6.0;
        place_obstacle(&mut state, 80.0);

        tick(&mut state, &idle(), VIEWPORT);
        assert!(state.is_over());
        assert_eq!(state.best.best, 5);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::NewBest { score: 5 }));

        // Nothing moves while the run is over
        let ticks = state.time_ticks;
        let x = state.obstacles[0].pos.x;
        tick(&mut state, &jump(), VIEWPORT);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.obstacles[0].pos.x, x);
        assert!(state.drain_events().is_empty());

        tick(&mut state, &restart(), VIEWPORT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.speed, 6.0);
        assert_eq!(state.spawn_interval, 100);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.obstacle_counter, 0);
        assert_eq!(state.best.best, 5);
        assert_eq!(state.drain_events(), vec![GameEvent::Restarted]);
    }

    #[test]
    fn test_jump_ignored_when_game_over() {
        let mut state = new_state();
        place_obstacle(&mut state, 80.0);
        tick(&mut state, &idle(), VIEWPORT);
        assert!(state.is_over());

        let before = state.player.clone();
        tick(&mut state, &jump(), VIEWPORT);
        assert_eq!(state.player.vel_y, before.vel_y);
        assert_eq!(state.player.airborne, before.airborne);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = new_state();
        state.score = 3;
        state.obstacle_counter = 3;
        tick(&mut state, &restart(), VIEWPORT);
        assert_eq!(state.score, 3);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_offscreen_obstacles_pruned() {
        let mut state = new_state();
        place_obstacle(&mut state, -30.0);
        tick(&mut state, &idle(), VIEWPORT);
        assert!(state.obstacles.is_empty());
        // Still scored on the way out
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let mut state = new_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input, VIEWPORT);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.score >= 3, "score was {}", state.score);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default(), VIEWPORT);
        let mut state2 = GameState::new(99999, Tuning::default(), VIEWPORT);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        for _ in 0..3000 {
            tick(&mut state1, &input, VIEWPORT);
            tick(&mut state2, &input, VIEWPORT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.recent_heights, state2.recent_heights);
        assert_eq!(state1.obstacles.len(), state2.obstacles.len());
    }
}

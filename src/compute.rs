/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the clock and, where needed, an RNG handle) and returns
/// a brand-new `GameState`.  Side effects are limited to the injected RNG
/// and log output.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::Rng;

use crate::assets::{Sprite, ENEMY_TANKS, PLAYER_TANK};
use crate::config::{GameConfig, RulesConfig};
use crate::cooldown::Cooldown;
use crate::effects::{advance_effects, multi_explosion, startup_explosion_points, Effect};
use crate::entities::{
    shoot_from, Bullet, Enemy, Entity, Facing, GameState, Phase, Player, Point,
};
use crate::score::Score;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial state: empty board, tire tracks on the ground, intro
/// countdown running.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let rules = config.rules.clone();
    let startup = rules.countdown_from.saturating_mul(rules.countdown_frames);
    let player = Player::new(Point::new(config.world.player_x, config.world.player_y));
    debug!("player {:?} spawns at {:?}", PLAYER_TANK, player.origin());
    GameState {
        player,
        enemies: Vec::new(),
        bullets: Vec::new(),
        decorations: tire_tracks(
            config.world.tire_tracks,
            config.world.width,
            config.world.height,
            rng,
        ),
        effects: vec![Effect::countdown(rules.countdown_from, rules.countdown_frames)],
        score: Score::new(),
        cooldown: Cooldown::new(Duration::from_millis(rules.shoot_cooldown_ms)),
        phase: Phase::Startup { frames_left: startup },
        rules,
        frame: 0,
        width: config.world.width,
        height: config.world.height,
    }
}

/// `count` tire tracks at random points of the `width` × `height` world,
/// each one of the two track sprites.
pub fn tire_tracks(count: u32, width: f32, height: f32, rng: &mut impl Rng) -> Vec<Entity> {
    let (half_w, half_h) = (width / 2.0, height / 2.0);
    (0..count)
        .map(|_| {
            let pos = Point::new(rng.gen_range(-half_w..half_w), rng.gen_range(-half_h..half_h));
            let sprite = Sprite::TireTrack(rng.gen_range(1..=2));
            Entity::new(sprite, pos, true, 0.0)
        })
        .collect()
}

/// Grid coordinates of one spawn batch, top row first, right to left.
/// A non-positive spacing yields no positions.
pub fn spawn_positions(width: f32, rules: &RulesConfig) -> Vec<Point> {
    let mut positions = Vec::new();
    if rules.enemy_spacing.is_nan() || rules.enemy_spacing <= 0.0 {
        return positions;
    }
    let mut row_height = rules.enemy_top;
    for _ in 0..rules.enemy_rows {
        row_height -= rules.enemy_row_gap;
        let mut x = width / 2.0 - rules.enemy_spacing;
        while x > -width / 2.0 {
            positions.push(Point::new(x, row_height));
            x -= rules.enemy_spacing;
        }
    }
    positions
}

/// Spawn a new batch if, and only if, no enemies are alive.  A non-zero
/// score earns the wave bonus first.  Each enemy drives a random tank
/// other than the player's.
pub fn spawn_batch(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.enemies.is_empty() {
        return state.clone();
    }
    let mut next = state.clone();
    if next.score.value > 0 {
        next.score.increase_score(next.rules.spawn_bonus);
    }
    next.enemies = spawn_positions(next.width, &next.rules)
        .into_iter()
        .map(|pos| {
            let tank = ENEMY_TANKS[rng.gen_range(0..ENEMY_TANKS.len())];
            Enemy::new(pos, tank)
        })
        .collect();
    next.phase = Phase::Spawning {
        frames_left: next.rules.spawn_pause_frames,
    };
    info!(
        "spawned {} enemies, score {}",
        next.enemies.len(),
        next.score.value
    );
    next
}

/// Start a new round after the player was hit.  The player is moved back
/// to its spawn point, not rebuilt.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    for bullet in next.bullets.iter_mut() {
        bullet.entity.destroy();
    }
    next.bullets.clear();
    for enemy in next.enemies.iter_mut() {
        enemy.entity.destroy();
    }
    next.enemies.clear();
    next.score.set_score(0);
    next.cooldown.cancel();
    next.player.reset();
    next.player.toggle_can_shoot(true);
    info!("round restarted, player back at {:?}", next.player.origin());
    spawn_batch(&next, rng)
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Player input only counts while a round is in play.
pub fn accepts_input(state: &GameState) -> bool {
    state.phase == Phase::Active
}

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    if accepts_input(state) {
        next.player.move_left();
    }
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    if accepts_input(state) {
        next.player.move_right();
    }
    next
}

/// Fire a bullet from the player if the cooldown allows it.
pub fn player_shoot(state: &GameState, now: Instant) -> GameState {
    let mut next = state.clone();
    release_cooldown(&mut next, now);
    if !accepts_input(&next) || !next.player.can_shoot {
        return next;
    }
    match shoot_from(&next.player.entity) {
        Ok(bullet) => {
            next.bullets.push(bullet);
            next.player.toggle_can_shoot(false);
            next.cooldown.arm(now);
            debug!("player fired, reloading for {:?}", next.cooldown.delay());
        }
        Err(e) => warn!("player could not shoot: {}", e),
    }
    next
}

fn release_cooldown(state: &mut GameState, now: Instant) {
    if state.cooldown.poll(now) {
        state.player.toggle_can_shoot(true);
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, now: Instant, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;
    next.effects = advance_effects(&state.effects);
    release_cooldown(&mut next, now);

    match state.phase {
        Phase::Startup { frames_left } => {
            if frames_left <= 1 {
                let points = startup_explosion_points(next.width);
                next.effects.extend(multi_explosion(&points));
                debug!("intro finished at frame {}", next.frame);
                spawn_batch(&next, rng)
            } else {
                next.phase = Phase::Startup {
                    frames_left: frames_left - 1,
                };
                next
            }
        }
        Phase::Spawning { frames_left } => {
            next.phase = if frames_left <= 1 {
                Phase::Active
            } else {
                Phase::Spawning {
                    frames_left: frames_left - 1,
                }
            };
            next
        }
        Phase::Active => {
            if next.enemies.is_empty() {
                spawn_batch(&next, rng)
            } else {
                step_active(next, rng)
            }
        }
        Phase::GameOver { frames_left } => {
            if frames_left <= 1 {
                restart(&next, rng)
            } else {
                next.phase = Phase::GameOver {
                    frames_left: frames_left - 1,
                };
                next
            }
        }
    }
}

/// One frame of play: bullets move and collide, then enemies may fire.
fn step_active(mut state: GameState, rng: &mut impl Rng) -> GameState {
    let rules = state.rules.clone();
    let mut survivors: Vec<Bullet> = Vec::with_capacity(state.bullets.len());
    let mut pending = std::mem::take(&mut state.bullets).into_iter();

    while let Some(mut bullet) = pending.next() {
        // ── 1. Out of bounds ─────────────────────────────────────────────────
        if !bullet.can_move() {
            bullet.entity.destroy();
            continue;
        }

        match bullet.facing() {
            // ── 2. Player shots ↔ enemies ────────────────────────────────────
            Facing::North => {
                // Nothing lives below the enemy floor.
                if bullet.pos().y >= rules.enemy_floor {
                    let hit = state
                        .enemies
                        .iter()
                        .position(|e| bullet.collided_with_entity(&e.entity));
                    if let Some(i) = hit {
                        let mut enemy = state.enemies.remove(i);
                        state.effects.push(Effect::explosion(enemy.pos()));
                        enemy.entity.destroy();
                        bullet.entity.destroy();
                        state.score.increase_score(1);
                        debug!("enemy destroyed, score {}", state.score.value);
                        continue;
                    }
                }
            }
            // ── 3. Enemy shots ↔ player ──────────────────────────────────────
            Facing::South => {
                if bullet.pos().y <= rules.player_ceiling
                    && bullet.collided_with_entity(&state.player.entity)
                {
                    bullet.entity.destroy();
                    // Not yet scanned this frame; cleared along with the rest.
                    survivors.extend(pending);
                    state.bullets = survivors;
                    return game_over(state, Facing::South);
                }
            }
        }

        bullet.move_forward();
        survivors.push(bullet);
    }

    // ── 4. Enemies randomly shoot ────────────────────────────────────────────
    for enemy in &state.enemies {
        if rng.gen_range(0..=rules.enemy_fire_odds) == 0 {
            match shoot_from(&enemy.entity) {
                Ok(bullet) => survivors.push(bullet),
                Err(e) => warn!("enemy could not shoot: {}", e),
            }
        }
    }

    state.bullets = survivors;
    state
}

/// Player struck: blow it up and clear the field of bullets.
fn game_over(mut state: GameState, by: Facing) -> GameState {
    info!(
        "player hit by {} bullet at frame {}, final score {}",
        by.token(),
        state.frame,
        state.score.value
    );
    for bullet in state.bullets.iter_mut() {
        bullet.entity.destroy();
    }
    state.bullets.clear();
    state.effects.push(Effect::explosion(state.player.pos()));
    state.player.entity.hide();
    state.phase = Phase::GameOver {
        frames_left: state.rules.game_over_frames,
    };
    state
}

/// Game entity types and the master game state.
///
/// World coordinates have their origin at the screen centre with y growing
/// upward; headings are degrees counter-clockwise from east.

use std::str::FromStr;

use crate::assets::{Sprite, Tank, PLAYER_TANK};
use crate::config::RulesConfig;
use crate::cooldown::Cooldown;
use crate::effects::Effect;
use crate::error::GameError;
use crate::score::Score;

// ── Movement constants ────────────────────────────────────────────────────────

pub const PLAYER_STEP: f32 = 20.0;
pub const PLAYER_BOUND: f32 = 370.0;

/// Distance a bullet covers on creation.
pub const BULLET_LAUNCH: f32 = 20.0;
/// Distance a bullet covers per frame.
pub const BULLET_SPEED: f32 = 30.0;
pub const BULLET_MAX_X: f32 = 480.0;
pub const BULLET_MAX_Y: f32 = 320.0;
pub const HIT_RADIUS: f32 = 40.0;

pub const HEADING_NORTH: f32 = 90.0;
pub const HEADING_SOUTH: f32 = 270.0;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// A positioned, drawable object.  Player, enemy and bullet all wrap one.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub sprite: Sprite,
    pub pos: Point,
    pub heading: f32,
    visible: bool,
    destroyed: bool,
}

impl Entity {
    pub fn new(sprite: Sprite, pos: Point, visible: bool, heading: f32) -> Self {
        Self {
            sprite,
            pos,
            heading,
            visible,
            destroyed: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// No effect once destroyed.
    pub fn show(&mut self) {
        if !self.destroyed {
            self.visible = true;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn goto(&mut self, pos: Point) {
        self.pos = pos;
    }

    /// Move `distance` units along the current heading.
    pub fn forward(&mut self, distance: f32) {
        // Cardinal headings are exact so vertical travel never drifts sideways.
        let (dx, dy) = match self.heading.rem_euclid(360.0) {
            h if h == 0.0 => (1.0, 0.0),
            h if h == 90.0 => (0.0, 1.0),
            h if h == 180.0 => (-1.0, 0.0),
            h if h == 270.0 => (0.0, -1.0),
            h => {
                let r = h.to_radians();
                (r.cos(), r.sin())
            }
        };
        self.pos.x += dx * distance;
        self.pos.y += dy * distance;
    }

    /// Reset to the origin and hide for good.  Idempotent.
    pub fn destroy(&mut self) {
        self.pos = Point::default();
        self.heading = 0.0;
        self.visible = false;
        self.destroyed = true;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub entity: Entity,
    pub can_shoot: bool,
    origin: Point,
}

impl Player {
    pub fn new(origin: Point) -> Self {
        Self {
            entity: Entity::new(Sprite::Tank(PLAYER_TANK), origin, true, HEADING_NORTH),
            can_shoot: true,
            origin,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn pos(&self) -> Point {
        self.entity.pos
    }

    pub fn move_left(&mut self) {
        let x = (self.entity.pos.x - PLAYER_STEP).max(-PLAYER_BOUND);
        self.entity.pos.x = x;
    }

    pub fn move_right(&mut self) {
        let x = (self.entity.pos.x + PLAYER_STEP).min(PLAYER_BOUND);
        self.entity.pos.x = x;
    }

    pub fn toggle_can_shoot(&mut self, can_shoot: bool) {
        self.can_shoot = can_shoot;
    }

    /// Back to the spawn point, visible.  Used at the start of a new round.
    pub fn reset(&mut self) {
        self.entity.goto(self.origin);
        self.entity.heading = HEADING_NORTH;
        self.entity.show();
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub entity: Entity,
}

impl Enemy {
    pub fn new(pos: Point, tank: Tank) -> Self {
        Self {
            entity: Entity::new(Sprite::Tank(tank), pos, true, HEADING_SOUTH),
        }
    }

    pub fn pos(&self) -> Point {
        self.entity.pos
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

/// Bullet travel direction: north for player shots, south for enemy shots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    North,
    South,
}

impl Facing {
    pub fn token(&self) -> &'static str {
        match self {
            Facing::North => "N",
            Facing::South => "S",
        }
    }

    pub fn heading(&self) -> f32 {
        match self {
            Facing::North => HEADING_NORTH,
            Facing::South => HEADING_SOUTH,
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            Facing::North => Sprite::ExhaustFireUp,
            Facing::South => Sprite::ExhaustFireDown,
        }
    }
}

impl FromStr for Facing {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Facing::North),
            "S" => Ok(Facing::South),
            other => Err(GameError::InvalidFacing(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub entity: Entity,
    facing: Facing,
}

impl Bullet {
    /// Create a bullet at `origin`, already `BULLET_LAUNCH` units along its
    /// path.
    pub fn new(origin: Point, facing: Facing) -> Self {
        let mut entity = Entity::new(facing.sprite(), origin, true, facing.heading());
        entity.forward(BULLET_LAUNCH);
        Self { entity, facing }
    }

    /// Like `new`, from a facing token ("N" or "S").
    pub fn from_token(origin: Point, token: &str) -> Result<Self, GameError> {
        Ok(Self::new(origin, token.parse()?))
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn pos(&self) -> Point {
        self.entity.pos
    }

    /// True while inside the world box.
    pub fn can_move(&self) -> bool {
        let p = self.entity.pos;
        p.x.abs() < BULLET_MAX_X && p.y.abs() < BULLET_MAX_Y
    }

    pub fn move_forward(&mut self) {
        self.entity.forward(BULLET_SPEED);
    }

    pub fn collided_with_entity(&self, other: &Entity) -> bool {
        self.entity.pos.distance(other.pos) <= HIT_RADIUS
    }
}

/// Fire from `shooter`: the player's tank shoots north, every other tank
/// shoots south.
pub fn shoot_from(shooter: &Entity) -> Result<Bullet, GameError> {
    let facing = match shooter.sprite {
        Sprite::Tank(PLAYER_TANK) => Facing::North,
        Sprite::Tank(_) => Facing::South,
        other => return Err(GameError::ShooterMismatch(other)),
    };
    Ok(Bullet::new(shooter.pos, facing))
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Intro countdown; `frames_left` until play begins.
    Startup { frames_left: u32 },
    /// A fresh batch has spawned; enemies hold fire for `frames_left`.
    Spawning { frames_left: u32 },
    Active,
    /// Player was hit; the round restarts after `frames_left`.
    GameOver { frames_left: u32 },
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Insertion order is firing order.
    pub bullets: Vec<Bullet>,
    /// Tire tracks laid once at startup; drawn under everything else.
    pub decorations: Vec<Entity>,
    pub effects: Vec<Effect>,
    pub score: Score,
    pub cooldown: Cooldown,
    pub phase: Phase,
    pub rules: RulesConfig,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}

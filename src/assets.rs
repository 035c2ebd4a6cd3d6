/// Fixed sprite catalog.
///
/// Every sprite has a category and a file name so a graphical frontend can
/// resolve it as `<asset-root>/<category>/<name>.<ext>`.  The terminal
/// frontend only needs the glyph.

use std::path::{Path, PathBuf};

/// Tank models.  The player always drives the Tiger; enemies get one of
/// the others at random.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tank {
    Churchill,
    Crusader,
    Kv1,
    Lee,
    M13,
    Matilda,
    Panther,
    Panzer,
    Sherman,
    Stuart,
    T26,
    T34,
    Tiger,
}

pub const PLAYER_TANK: Tank = Tank::Tiger;

/// Models an enemy can spawn as.
pub const ENEMY_TANKS: [Tank; 12] = [
    Tank::Churchill,
    Tank::Crusader,
    Tank::Kv1,
    Tank::Lee,
    Tank::M13,
    Tank::Matilda,
    Tank::Panther,
    Tank::Panzer,
    Tank::Sherman,
    Tank::Stuart,
    Tank::T26,
    Tank::T34,
];

impl Tank {
    pub fn name(&self) -> &'static str {
        match self {
            Tank::Churchill => "churchill",
            Tank::Crusader => "Crusader",
            Tank::Kv1 => "KV-1",
            Tank::Lee => "Lee",
            Tank::M13 => "M13",
            Tank::Matilda => "matilda",
            Tank::Panther => "panther",
            Tank::Panzer => "panzer",
            Tank::Sherman => "sherman",
            Tank::Stuart => "stuart",
            Tank::T26 => "T-26",
            Tank::T34 => "T-34",
            Tank::Tiger => "Tiger",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Tank(Tank),
    /// North-bound bullet.
    ExhaustFireUp,
    /// South-bound bullet.
    ExhaustFireDown,
    /// Ground decoration, variant 1 or 2.
    TireTrack(u8),
    /// Explosion frame, 0-based.
    Explosion(u8),
    Background,
}

/// Frames the explosion animation plays.  `Explosion(4)` ships with the
/// catalog but is never animated.
pub const EXPLOSION_FRAMES: u8 = 4;

/// Every sprite the game registers.
pub const CATALOG: [Sprite; 23] = [
    Sprite::Tank(Tank::Churchill),
    Sprite::Tank(Tank::Crusader),
    Sprite::Tank(Tank::Kv1),
    Sprite::Tank(Tank::Lee),
    Sprite::Tank(Tank::M13),
    Sprite::Tank(Tank::Matilda),
    Sprite::Tank(Tank::Panther),
    Sprite::Tank(Tank::Panzer),
    Sprite::Tank(Tank::Sherman),
    Sprite::Tank(Tank::Stuart),
    Sprite::Tank(Tank::T26),
    Sprite::Tank(Tank::T34),
    Sprite::Tank(Tank::Tiger),
    Sprite::ExhaustFireUp,
    Sprite::ExhaustFireDown,
    Sprite::TireTrack(1),
    Sprite::TireTrack(2),
    Sprite::Explosion(0),
    Sprite::Explosion(1),
    Sprite::Explosion(2),
    Sprite::Explosion(3),
    Sprite::Explosion(4),
    Sprite::Background,
];

impl Sprite {
    pub fn category(&self) -> &'static str {
        match self {
            Sprite::Tank(_) => "Tanks",
            _ => "Effects",
        }
    }

    pub fn name(&self) -> String {
        match self {
            Sprite::Tank(tank) => tank.name().to_string(),
            Sprite::ExhaustFireUp => "Exhaust_Fire_up".to_string(),
            Sprite::ExhaustFireDown => "Exhaust_Fire_down".to_string(),
            Sprite::TireTrack(n) => format!("Tire_Track_{}", n),
            Sprite::Explosion(frame) => format!("Explosion{}", frame + 1),
            Sprite::Background => "bg-desert".to_string(),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Sprite::Background => "png",
            _ => "gif",
        }
    }

    /// Resolve this sprite's file under `root`.
    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(self.category())
            .join(format!("{}.{}", self.name(), self.extension()))
    }

    /// Terminal glyph used by the crossterm renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Sprite::Tank(Tank::Tiger) => "/▲\\",
            Sprite::Tank(Tank::Churchill) => "«C»",
            Sprite::Tank(Tank::Crusader) => "«R»",
            Sprite::Tank(Tank::Kv1) => "«K»",
            Sprite::Tank(Tank::Lee) => "«L»",
            Sprite::Tank(Tank::M13) => "«M»",
            Sprite::Tank(Tank::Matilda) => "«A»",
            Sprite::Tank(Tank::Panther) => "«P»",
            Sprite::Tank(Tank::Panzer) => "«Z»",
            Sprite::Tank(Tank::Sherman) => "«S»",
            Sprite::Tank(Tank::Stuart) => "«U»",
            Sprite::Tank(Tank::T26) => "«6»",
            Sprite::Tank(Tank::T34) => "«4»",
            Sprite::ExhaustFireUp => "║",
            Sprite::ExhaustFireDown => "↓",
            Sprite::TireTrack(1) => "≡",
            Sprite::TireTrack(_) => "═",
            Sprite::Explosion(0) => "·",
            Sprite::Explosion(1) => "*",
            Sprite::Explosion(2) => "✶",
            Sprite::Explosion(_) => "✺",
            Sprite::Background => " ",
        }
    }
}

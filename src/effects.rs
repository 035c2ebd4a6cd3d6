/// Cosmetic animations.  Nothing in here reads or writes gameplay state;
/// effects are advanced once per tick and dropped when finished.

use crate::assets::{Sprite, EXPLOSION_FRAMES};
use crate::entities::Point;

/// Ticks each explosion frame stays on screen.
pub const TICKS_PER_EXPLOSION_FRAME: u32 = 2;

/// Horizontal gap between the blasts of the intro explosion.
pub const MULTI_EXPLOSION_SPACING: f32 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Explosion {
        pos: Point,
        age: u32,
    },
    /// Large digit shown in the centre of the screen.
    Countdown {
        value: u32,
        frames_left: u32,
        frames_per_digit: u32,
    },
}

impl Effect {
    pub fn explosion(pos: Point) -> Self {
        Effect::Explosion { pos, age: 0 }
    }

    pub fn countdown(from: u32, frames_per_digit: u32) -> Self {
        Effect::Countdown {
            value: from,
            frames_left: frames_per_digit,
            frames_per_digit,
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Effect::Explosion { age, .. } => {
                *age >= EXPLOSION_FRAMES as u32 * TICKS_PER_EXPLOSION_FRAME
            }
            Effect::Countdown { value, .. } => *value == 0,
        }
    }

    /// Sprite for the current animation frame, if the effect draws one.
    pub fn sprite(&self) -> Option<Sprite> {
        match self {
            Effect::Explosion { age, .. } => {
                let frame = (age / TICKS_PER_EXPLOSION_FRAME).min(EXPLOSION_FRAMES as u32 - 1);
                Some(Sprite::Explosion(frame as u8))
            }
            Effect::Countdown { .. } => None,
        }
    }

    fn advanced(&self) -> Self {
        match self {
            Effect::Explosion { pos, age } => Effect::Explosion {
                pos: *pos,
                age: age + 1,
            },
            Effect::Countdown {
                value,
                frames_left,
                frames_per_digit,
            } => {
                if *frames_left <= 1 {
                    Effect::Countdown {
                        value: value.saturating_sub(1),
                        frames_left: *frames_per_digit,
                        frames_per_digit: *frames_per_digit,
                    }
                } else {
                    Effect::Countdown {
                        value: *value,
                        frames_left: frames_left - 1,
                        frames_per_digit: *frames_per_digit,
                    }
                }
            }
        }
    }
}

/// Points along the horizontal centre line, centre first and then fanning
/// out left and right: `0, -100, 100, -200, 200, ...` up to the screen edges.
pub fn startup_explosion_points(width: f32) -> Vec<Point> {
    let mut points = vec![Point::default()];
    let mut x = MULTI_EXPLOSION_SPACING;
    while x <= width / 2.0 {
        points.push(Point::new(-x, 0.0));
        points.push(Point::new(x, 0.0));
        x += MULTI_EXPLOSION_SPACING;
    }
    points
}

/// One explosion per point, all starting on the same tick.
pub fn multi_explosion(points: &[Point]) -> Vec<Effect> {
    points.iter().copied().map(Effect::explosion).collect()
}

/// Advance every effect by one tick, dropping the ones that finish.
pub fn advance_effects(effects: &[Effect]) -> Vec<Effect> {
    effects
        .iter()
        .map(Effect::advanced)
        .filter(|e| !e.is_finished())
        .collect()
}

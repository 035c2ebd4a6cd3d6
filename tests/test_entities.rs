use space_invaders::assets::{Sprite, Tank, PLAYER_TANK};
use space_invaders::error::GameError;
use space_invaders::entities::*;

fn bullet_at(x: f32, y: f32) -> Bullet {
    let mut b = Bullet::new(Point::default(), Facing::North);
    b.entity.goto(Point::new(x, y));
    b
}

// ── Point & Entity ────────────────────────────────────────────────────────────

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn entity_forward_follows_heading() {
    let mut e = Entity::new(Sprite::ExhaustFireUp, Point::default(), true, HEADING_NORTH);
    e.forward(10.0);
    assert_eq!(e.pos, Point::new(0.0, 10.0));
    e.heading = 180.0;
    e.forward(5.0);
    assert_eq!(e.pos, Point::new(-5.0, 10.0));
    e.heading = 45.0;
    e.forward(2.0_f32.sqrt());
    assert!((e.pos.x + 4.0).abs() < 1e-5);
    assert!((e.pos.y - 11.0).abs() < 1e-5);
}

#[test]
fn entity_destroy_is_permanent_and_idempotent() {
    let mut e = Entity::new(Sprite::Tank(Tank::Sherman), Point::new(100.0, 200.0), true, 0.0);
    e.destroy();
    assert!(!e.is_visible());
    assert!(e.is_destroyed());
    assert_eq!(e.pos, Point::default());
    e.destroy();
    assert!(e.is_destroyed());
    e.show();
    assert!(!e.is_visible());
}

#[test]
fn entity_show_hide() {
    let mut e = Entity::new(Sprite::Tank(PLAYER_TANK), Point::default(), false, 0.0);
    assert!(!e.is_visible());
    e.show();
    assert!(e.is_visible());
    e.hide();
    assert!(!e.is_visible());
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_clamps_at_bounds() {
    let mut p = Player::new(Point::new(360.0, -260.0));
    p.move_right();
    assert_eq!(p.pos().x, 370.0);
    p.move_right();
    assert_eq!(p.pos().x, 370.0);

    let mut p = Player::new(Point::new(-360.0, -260.0));
    p.move_left();
    assert_eq!(p.pos().x, -370.0);
    p.move_left();
    assert_eq!(p.pos().x, -370.0);
}

#[test]
fn player_stays_in_bounds_for_any_sequence() {
    let mut p = Player::new(Point::new(0.0, -260.0));
    // Deterministic pseudo-random walk
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        if seed & 0x100 == 0 {
            p.move_left();
        } else {
            p.move_right();
        }
        assert!((-370.0..=370.0).contains(&p.pos().x));
    }
}

#[test]
fn player_reset_returns_to_origin() {
    let mut p = Player::new(Point::new(0.0, -260.0));
    p.move_left();
    p.move_left();
    p.entity.hide();
    p.reset();
    assert_eq!(p.pos(), Point::new(0.0, -260.0));
    assert!(p.entity.is_visible());
}

#[test]
fn player_toggle_can_shoot() {
    let mut p = Player::new(Point::default());
    assert!(p.can_shoot);
    p.toggle_can_shoot(false);
    assert!(!p.can_shoot);
    p.toggle_can_shoot(true);
    assert!(p.can_shoot);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn facing_parses_tokens() {
    assert_eq!("N".parse::<Facing>().ok(), Some(Facing::North));
    assert_eq!("S".parse::<Facing>().ok(), Some(Facing::South));
    assert_eq!(Facing::North.token(), "N");
    assert_eq!(Facing::South.token(), "S");
}

#[test]
fn bullet_rejects_unknown_facing() {
    for token in ["E", "W", "n", "", "NS"] {
        let err = Bullet::from_token(Point::default(), token).unwrap_err();
        assert!(matches!(err, GameError::InvalidFacing(ref t) if t == token));
    }
}

#[test]
fn bullet_launches_twenty_units() {
    let n = Bullet::from_token(Point::new(10.0, 0.0), "N").unwrap();
    assert_eq!(n.pos(), Point::new(10.0, 20.0));
    let s = Bullet::from_token(Point::new(10.0, 0.0), "S").unwrap();
    assert_eq!(s.pos(), Point::new(10.0, -20.0));
}

#[test]
fn bullet_sprite_follows_facing() {
    let up = Bullet::new(Point::default(), Facing::North);
    let down = Bullet::new(Point::default(), Facing::South);
    assert_eq!(up.entity.sprite, Sprite::ExhaustFireUp);
    assert_eq!(down.entity.sprite, Sprite::ExhaustFireDown);
}

#[test]
fn bullet_moves_thirty_units() {
    let mut b = Bullet::new(Point::default(), Facing::South);
    b.move_forward();
    assert_eq!(b.pos(), Point::new(0.0, -50.0));
    assert_eq!(b.facing(), Facing::South);
}

#[test]
fn bullet_can_move_boundaries() {
    assert!(bullet_at(0.0, 319.9).can_move());
    assert!(bullet_at(0.0, -319.9).can_move());
    assert!(!bullet_at(0.0, 320.0).can_move());
    assert!(!bullet_at(0.0, -320.0).can_move());
    assert!(!bullet_at(0.0, 480.0).can_move());
    assert!(!bullet_at(0.0, -480.0).can_move());
}

#[test]
fn bullet_can_move_reads_x() {
    assert!(bullet_at(479.0, 0.0).can_move());
    assert!(!bullet_at(480.0, 0.0).can_move());
    assert!(!bullet_at(-480.0, 0.0).can_move());
}

#[test]
fn bullet_collision_radius() {
    let b = bullet_at(0.0, 0.0);
    let near = Entity::new(Sprite::Tank(Tank::Sherman), Point::new(0.0, 40.0), true, 0.0);
    let diagonal = Entity::new(Sprite::Tank(Tank::Sherman), Point::new(24.0, 30.0), true, 0.0);
    let far = Entity::new(Sprite::Tank(Tank::Sherman), Point::new(0.0, 40.5), true, 0.0);
    assert!(b.collided_with_entity(&near));
    assert!(b.collided_with_entity(&diagonal));
    assert!(!b.collided_with_entity(&far));
}

// ── shoot_from ────────────────────────────────────────────────────────────────

#[test]
fn shoot_from_player_and_enemy() {
    let player = Player::new(Point::new(0.0, -260.0));
    let enemy = Enemy::new(Point::new(50.0, 200.0), Tank::Sherman);
    let up = shoot_from(&player.entity).unwrap();
    let down = shoot_from(&enemy.entity).unwrap();
    assert_eq!(up.facing(), Facing::North);
    assert_eq!(up.pos(), Point::new(0.0, -240.0));
    assert_eq!(down.facing(), Facing::South);
    assert_eq!(down.pos(), Point::new(50.0, 180.0));
}

#[test]
fn shoot_from_rejects_non_shooters() {
    let shell = Bullet::new(Point::default(), Facing::North);
    let err = shoot_from(&shell.entity).unwrap_err();
    assert!(matches!(err, GameError::ShooterMismatch(Sprite::ExhaustFireUp)));

    let smoke = Entity::new(Sprite::Explosion(0), Point::default(), true, 0.0);
    assert!(shoot_from(&smoke).is_err());
    let track = Entity::new(Sprite::TireTrack(1), Point::default(), true, 0.0);
    assert!(shoot_from(&track).is_err());
}

#[test]
fn every_enemy_model_shoots_south() {
    for tank in space_invaders::assets::ENEMY_TANKS {
        let enemy = Enemy::new(Point::new(0.0, 200.0), tank);
        assert_eq!(shoot_from(&enemy.entity).unwrap().facing(), Facing::South);
    }
}

// ── Cloning ───────────────────────────────────────────────────────────────────

#[test]
fn enemy_clone_is_independent() {
    let original = Enemy::new(Point::new(100.0, 200.0), Tank::Sherman);
    let mut cloned = original.clone();
    cloned.entity.destroy();
    assert!(original.entity.is_visible());
    assert_eq!(original.pos(), Point::new(100.0, 200.0));
}

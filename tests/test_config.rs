use std::path::Path;

use space_invaders::config::*;
use space_invaders::error::ConfigError;

#[test]
fn defaults_match_stock_rules() {
    let c = GameConfig::default();
    assert_eq!(c.world.width, 800.0);
    assert_eq!(c.world.player_x, 0.0);
    assert_eq!(c.world.player_y, -260.0);
    assert_eq!(c.world.tire_tracks, 10);
    assert_eq!(c.rules.spawn_bonus, 10);
    assert_eq!(c.rules.spawn_pause_frames, 16);
    assert_eq!(c.rules.countdown_from, 3);
    assert_eq!(c.rules.countdown_frames, 12);
    assert_eq!(c.rules.enemy_fire_odds, 40);
    assert_eq!(c.rules.shoot_cooldown_ms, 1000);
    assert_eq!(c.rules.enemy_floor, 60.0);
    assert_eq!(c.rules.player_ceiling, -200.0);
    assert_eq!(c.rules.enemy_rows, 2);
    assert_eq!(c.display.frame_ms, 50);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let c = GameConfig::from_toml_str(
        r#"
        [rules]
        enemy_fire_odds = 10
        spawn_bonus = 2

        [display]
        frame_ms = 16
        "#,
    )
    .unwrap();
    assert_eq!(c.rules.enemy_fire_odds, 10);
    assert_eq!(c.rules.spawn_bonus, 2);
    assert_eq!(c.display.frame_ms, 16);
    assert_eq!(c.rules.shoot_cooldown_ms, 1000);
    assert_eq!(c.world, WorldConfig::default());
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = GameConfig::from_toml_str("[rules\nenemy_fire_odds = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let err = GameConfig::from_toml_str("[rules]\nenemy_rows = \"two\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn non_positive_enemy_spacing_is_invalid() {
    for spacing in ["0.0", "-50.0"] {
        let doc = format!("[rules]\nenemy_spacing = {}", spacing);
        let err = GameConfig::from_toml_str(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "spacing {}", spacing);
    }
}

#[test]
fn degenerate_world_is_invalid() {
    let err = GameConfig::from_toml_str("[world]\nwidth = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    let err = GameConfig::from_toml_str("[display]\nframe_ms = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn defaults_validate() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn non_toml_extension_is_rejected() {
    let err = GameConfig::load_from_file(Path::new("settings.json")).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = GameConfig::load_from_file(Path::new("definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn load_from_file_reads_toml() {
    let path = std::env::temp_dir().join(format!("space_invaders_test_{}.toml", std::process::id()));
    std::fs::write(&path, "[world]\nplayer_y = -200.0\n").unwrap();
    let c = GameConfig::load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(c.world.player_y, -200.0);
    assert_eq!(c.world.width, 800.0);
}

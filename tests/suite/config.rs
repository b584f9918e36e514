//! Config file to session wiring

use std::fs;

use osteo::session_from_config;
use osteo_config::OsteoConfig;
use osteo_types::TaskId;

#[test]
fn default_config_opens_dashboard_start() {
    let session = session_from_config(&OsteoConfig::default());
    assert_eq!(session.current_level().value(), 2);
    assert_eq!(session.current_xp(), 120);
    assert!(session.is_milestone_achieved("m1"));
}

#[test]
fn configured_rules_and_start_apply() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[progression]\nxp_per_task = 50\nlevel_threshold = 100\n\n[start]\nlevel = 1\nxp = 80\n",
    )
    .unwrap();

    let config = OsteoConfig::load_from(&path).unwrap().unwrap();
    let mut session = session_from_config(&config);
    assert!(!session.is_milestone_achieved("m1"));

    session.toggle_task(TaskId::new(5)).unwrap();
    // 80 + 50 = 130 -> level 2, 30 carried
    assert_eq!(session.current_level().value(), 2);
    assert_eq!(session.current_xp(), 30);
    assert_eq!(session.summary().level_threshold, 100);
}

#[test]
fn start_xp_past_threshold_is_normalized() {
    let config = OsteoConfig::from_toml_str("[start]\nlevel = 1\nxp = 400\n").unwrap();
    let session = session_from_config(&config);
    // 400 = 2 * 150 + 100
    assert_eq!(session.current_level().value(), 3);
    assert_eq!(session.current_xp(), 100);
}

// SPDX-License-Identifier: MPL-2.0
use iced_gallery::config::{self, Config, Tuning, MAX_ZOOM_STEP};
use iced_gallery::gallery;
use iced_gallery::i18n::fluent::I18n;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn hand_edited_settings_are_clamped_into_tuning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
            [display]
            zoom_step = 3.0

            [interaction]
            double_click_ms = 250
            lens_enabled = false
        "#,
    )
    .expect("Failed to write settings");

    let loaded = config::load_from_path(&path).expect("Failed to load settings");
    let tuning = Tuning::from_config(&loaded);

    assert_eq!(tuning.zoom_step, MAX_ZOOM_STEP);
    assert_eq!(tuning.double_click, Duration::from_millis(250));
    assert!(!tuning.lens_enabled);
    assert_eq!(tuning.fit_margin, config::DEFAULT_FIT_MARGIN);
}

#[test]
fn corrupt_settings_fall_back_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "not = [valid").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn manifest_on_disk_applies_attribute_fallbacks() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest = dir.path().join("gallery.toml");
    fs::write(
        &manifest,
        r#"
            [[item]]
            image = "harbor.jpg"

            [[item]]
            image = "market.jpg"
            highres = "market-full.jpg"
            crop = "20% 80%"
            alt = "Market stalls"
        "#,
    )
    .expect("Failed to write manifest");

    let gallery = gallery::load_source(&manifest).expect("manifest should load");
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery.active_index(), Some(0));

    let harbor = gallery.get(0).expect("first item");
    assert_eq!(harbor.high_res_src, dir.path().join("harbor.jpg"));
    assert_eq!(harbor.title, "harbor");
    assert_eq!(harbor.crop_position.to_string(), "50% 14%");

    let market = gallery.get(1).expect("second item");
    assert_eq!(market.high_res_src, dir.path().join("market-full.jpg"));
    assert_eq!(market.title, "Market stalls");
    assert_eq!(market.crop_position.to_string(), "20% 80%");
}

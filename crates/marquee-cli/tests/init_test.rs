//! Init & Guidance Tests
//!
//! Verifies workspace initialization against a programme file and the
//! no-subcommand guidance output.

use anyhow::Result;
use marquee_testing::TestWorld;
use predicates::Predicate;
use predicates::str::contains;

#[test]
fn test_init_reports_catalog_summary() -> Result<()> {
    let world = TestWorld::new();

    let result = world.init()?;
    assert!(result.success(), "init should succeed: {}", result.stderr());

    let stdout = result.stdout();
    assert!(contains("Workspace ready").eval(&stdout));
    assert!(contains("4 films").eval(&stdout));
    assert!(contains("7 screenings").eval(&stdout));
    assert!(contains("1 cancelled").eval(&stdout));
    assert!(contains("2 industry-only").eval(&stdout));

    assert!(world.data_dir().join("config.toml").exists());
    assert!(world.data_dir().join("marquee.db").exists());

    Ok(())
}

#[test]
fn test_init_json_summary() -> Result<()> {
    let world = TestWorld::new();
    let catalog = world.catalog_path().to_string_lossy().to_string();

    let result = world.run(&["--format", "json", "init", "--catalog", &catalog])?;
    assert!(result.success());

    let json = result.json()?;
    assert_eq!(json["film_count"], 4);
    assert_eq!(json["screening_count"], 7);
    assert_eq!(json["span"]["first_day"], "2025-09-10");
    assert_eq!(json["span"]["last_day"], "2025-09-12");

    Ok(())
}

#[test]
fn test_init_with_missing_catalog_fails() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init", "--catalog", "/nonexistent/programme.json"])?;
    assert!(!result.success());
    assert!(contains("Catalog error").eval(&result.stderr()));

    // Nothing half-initialized on failure.
    assert!(!world.data_dir().join("config.toml").exists());

    Ok(())
}

#[test]
fn test_guidance_before_and_after_init() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&[])?;
    assert!(result.success());
    assert!(contains("marquee init --catalog").eval(&result.stdout()));

    world.init()?;

    let result = world.run(&[])?;
    assert!(result.success());
    assert!(contains("marquee timetable").eval(&result.stdout()));

    Ok(())
}

#[test]
fn test_commands_before_init_explain_setup() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["timetable"])?;
    assert!(!result.success());
    assert!(contains("not initialized").eval(&result.stderr()));

    Ok(())
}

//! Timetable Tests
//!
//! Verifies facet filtering, day grouping, and axis placement through the
//! JSON output of `marquee timetable`.

use anyhow::Result;
use marquee_testing::TestWorld;
use serde_json::Value;

fn screening_ids(group: &Value) -> Vec<String> {
    group["screenings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["screening_id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_default_timetable_hides_industry_and_cancelled() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    let result = world.run(&["--format", "json", "timetable"])?;
    assert!(result.success(), "{}", result.stderr());

    let groups = result.json()?;
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0]["day"], "2025-09-10");
    assert_eq!(
        screening_ids(&groups[0]),
        vec!["harbour-matinee", "alpha-opening", "midnight-late"]
    );

    assert_eq!(groups[1]["day"], "2025-09-11");
    assert_eq!(screening_ids(&groups[1]), vec!["midnight-encore"]);

    Ok(())
}

#[test]
fn test_show_industry_reveals_restricted_screenings() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    let result = world.run(&["--format", "json", "timetable", "--show-industry"])?;
    let groups = result.json()?;
    let groups = groups.as_array().unwrap();

    assert_eq!(
        screening_ids(&groups[0]),
        vec![
            "harbour-press",
            "harbour-matinee",
            "alpha-opening",
            "midnight-late"
        ]
    );
    assert_eq!(
        screening_ids(&groups[1]),
        vec!["alpha-press", "midnight-encore"]
    );

    // Cancelled screenings never appear, even with every facet open.
    for group in groups {
        assert!(!screening_ids(group).contains(&"alpha-cancelled".to_string()));
    }

    Ok(())
}

#[test]
fn test_midnight_screening_spans_the_boundary() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    let result = world.run(&["--format", "json", "timetable", "--day", "2025-09-10"])?;
    let groups = result.json()?;
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);

    let late = groups[0]["screenings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["screening_id"] == "midnight-late")
        .unwrap();

    // 23:30 starts 930 minutes into the 1140-minute axis; the 00:45 end
    // reads as 24:45, giving a 75-minute width instead of wrapping to zero.
    let left = late["left"].as_f64().unwrap();
    let width = late["width"].as_f64().unwrap();
    assert!((left - 930.0 / 1140.0).abs() < 1e-9);
    assert!((width - 75.0 / 1140.0).abs() < 1e-9);
    assert!(left + width <= 1.0);

    Ok(())
}

#[test]
fn test_after_midnight_screening_groups_on_its_own_date() -> Result<()> {
    let world = TestWorld::new();
    // A 1:10 AM screening shares the logical festival evening with a 23:50
    // screening but lands in the next calendar day's group. Expected.
    world.write_catalog(
        r#"{
            "items": [
                {
                    "id": "film-x",
                    "title": "X",
                    "scheduleItems": [
                        {
                            "id": "late-show",
                            "startTime": "2025-09-10T23:50:00-04:00",
                            "endTime": "2025-09-11T01:20:00-04:00",
                            "venue": { "name": "Civic Lightbox" }
                        },
                        {
                            "id": "after-midnight",
                            "startTime": "2025-09-11T01:10:00-04:00",
                            "endTime": "2025-09-11T02:40:00-04:00",
                            "venue": { "name": "Civic Lightbox" }
                        }
                    ]
                }
            ]
        }"#,
    )?;
    world.init()?;

    let result = world.run(&["--format", "json", "timetable"])?;
    let groups = result.json()?;
    let groups = groups.as_array().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["day"], "2025-09-10");
    assert_eq!(screening_ids(&groups[0]), vec!["late-show"]);
    assert_eq!(groups[1]["day"], "2025-09-11");
    assert_eq!(screening_ids(&groups[1]), vec!["after-midnight"]);

    Ok(())
}

#[test]
fn test_selected_only_facet() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    world.run(&["select", "toggle", "alpha-opening"])?;

    let result = world.run(&["--format", "json", "timetable", "--selected-only"])?;
    let groups = result.json()?;
    let groups = groups.as_array().unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(screening_ids(&groups[0]), vec!["alpha-opening"]);
    assert_eq!(groups[0]["screenings"][0]["selected"], true);

    Ok(())
}

#[test]
fn test_favorites_only_facet() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    world.run(&["favorite", "toggle", "midnight-run-club"])?;

    let result = world.run(&["--format", "json", "timetable", "--favorites-only"])?;
    let groups = result.json()?;
    let groups = groups.as_array().unwrap();

    let all_ids: Vec<String> = groups.iter().flat_map(|g| screening_ids(g)).collect();
    assert_eq!(all_ids, vec!["midnight-late", "midnight-encore"]);

    Ok(())
}

#[test]
fn test_plain_timetable_renders_grid() -> Result<()> {
    let world = TestWorld::new();
    world.init()?;

    let result = world.run(&["timetable"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Wednesday, September 10"));
    assert!(stdout.contains("8AM"));
    assert!(stdout.contains("\u{2588}"));
    assert!(stdout.contains("Northern Alpha"));

    Ok(())
}

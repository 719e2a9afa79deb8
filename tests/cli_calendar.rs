//! Diary, planned events and the month calendar through the binary.

mod common;

use common::FarmEnv;

#[test]
fn test_calendar_places_events_on_their_days() {
    let env = FarmEnv::new();
    env.create(&["event", "add", "Service tractor", "--date", "2024-03-05", "--kind", "maintenance"]);
    env.create(&["event", "add", "Sow oats", "--date", "2024-03-15"]);
    env.create(&["event", "add", "Sell calves", "--date", "2024-04-02"]);

    let calendar = env.run(&["calendar", "--month", "2024-03", "--json"]).json();
    assert_eq!(calendar["type"], "calendar");
    assert_eq!(calendar["month"], "2024-03");
    // 1 March 2024 is a Friday; weeks start on Monday by default.
    assert_eq!(calendar["leading_blanks"], 4);

    let days = calendar["days"].as_array().unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(days[4]["events"][0]["title"], "Service tractor");
    assert_eq!(days[14]["events"][0]["title"], "Sow oats");
    let in_month: usize = days.iter().map(|d| d["events"].as_array().unwrap().len()).sum();
    assert_eq!(in_month, 2);

    // Upcoming is relative to today (2024-03-10), so the tractor service is past.
    let upcoming: Vec<&str> = calendar["upcoming"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(upcoming, vec!["Sow oats", "Sell calves"]);
}

#[test]
fn test_calendar_offset_moves_across_year_boundary() {
    let env = FarmEnv::new();
    let back = env.run(&["calendar", "--month", "2024-01", "--offset", "-1", "--json"]).json();
    assert_eq!(back["month"], "2023-12");

    let forward = env.run(&["calendar", "--offset", "10", "--json"]).json();
    assert_eq!(forward["month"], "2025-01");
}

#[test]
fn test_calendar_offset_past_supported_years_is_rejected() {
    let env = FarmEnv::new();
    let result = env.run(&["calendar", "--month", "2024-01", "--offset", "4000000"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "outside the supported calendar");

    let result = env.run(&["calendar", "--month", "2024-01", "--offset", "-4000000", "--json"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.json()["validation"], true);
}

#[test]
fn test_calendar_sunday_start_from_config() {
    let env = FarmEnv::new();
    env.write_config("[calendar]\nweek_start = \"sunday\"\n");

    let calendar = env.run(&["calendar", "--month", "2024-03", "--json"]).json();
    assert_eq!(calendar["leading_blanks"], 5);
}

#[test]
fn test_calendar_text_grid_shows_month_and_legend() {
    let env = FarmEnv::new();
    env.create(&["event", "add", "Service tractor", "--date", "2024-03-05", "--kind", "maintenance"]);

    let result = env.run(&["calendar", "--month", "2024-03"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_output_contains!(result, "March 2024");
    assert_output_contains!(result, "Servi~");
    assert_output_contains!(result, "Maintenance");
}

#[test]
fn test_calendar_day_lists_events_and_diary() {
    let env = FarmEnv::new();
    env.create(&["event", "add", "Sow oats", "--date", "2024-03-15"]);
    env.create(&["diary", "add", "Harrowed", "--date", "2024-03-15", "--hours", "4"]);
    env.create(&["diary", "add", "Other day", "--date", "2024-03-16"]);

    let day = env.run(&["calendar", "day", "2024-03-15", "--json"]).json();
    assert_eq!(day["type"], "calendar_day");
    assert_eq!(day["events"].as_array().unwrap().len(), 1);
    assert_eq!(day["diary"].as_array().unwrap().len(), 1);
    assert_eq!(day["diary"][0]["title"], "Harrowed");
}

#[test]
fn test_event_list_upcoming_wins_over_month() {
    let env = FarmEnv::new();
    env.create(&["event", "add", "Past", "--date", "2024-03-01"]);
    env.create(&["event", "add", "Later", "--date", "2024-05-20"]);
    env.create(&["event", "add", "Soon", "--date", "2024-03-12"]);

    let listed = env.run(&["event", "list", "--month", "2024-03", "--upcoming", "--json"]).json();
    let titles: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Soon", "Later"]);
}

#[test]
fn test_malformed_dates_exit_with_usage_error() {
    let env = FarmEnv::new();
    let result = env.run(&["event", "add", "Sow", "--date", "2024-02-30"]);
    assert_eq!(result.exit_code, 2);

    let result = env.run(&["calendar", "--month", "2024-13"]);
    assert_eq!(result.exit_code, 2);
}

#[test]
fn test_diary_filters_and_stats() {
    let env = FarmEnv::new();
    let field = env.create(&["field", "add", "North", "--area", "10", "--crop", "wheat"]);
    env.create(&[
        "diary", "add", "Weeding", "--date", "2024-03-02", "--field", &field, "--hours", "6",
        "--workers", "3", "--cost", "1200",
    ]);
    env.create(&[
        "diary", "add", "Aphids spotted", "--category", "problem", "--date", "2024-03-08",
        "--field", &field,
    ]);
    env.create(&["diary", "add", "Fence repair", "--date", "2024-02-20", "--hours", "2"]);

    let listed = env.run(&["diary", "list", "--field", &field, "--json"]).json();
    let titles: Vec<&str> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Aphids spotted", "Weeding"]);
    assert_eq!(listed["data"][0]["fieldName"], "North");

    let stats = env.run(&["diary", "stats", "--from", "2024-03-01", "--json"]).json();
    assert_eq!(stats["data"]["entries"], 2);
    assert_eq!(stats["data"]["total_hours"], 6.0);
    assert_eq!(stats["data"]["total_workers"], 3);
    assert_eq!(stats["data"]["total_cost"], 1200.0);

    let problems = env.run(&["diary", "list", "--category", "problem"]);
    assert!(problems.success);
    assert_output_contains!(problems, "Aphids spotted");
    assert_output_not_contains!(problems, "Fence repair");
}

#[test]
fn test_diary_entry_for_unknown_field_is_rejected() {
    let env = FarmEnv::new();
    let result = env.run(&["diary", "add", "Weeding", "--field", "missing"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "no field with id 'missing'");
}

#[test]
fn test_diary_defaults_to_today() {
    let env = FarmEnv::new();
    env.create(&["diary", "add", "Checked the bees"]);
    let listed = env.run(&["diary", "list", "--json"]).json();
    assert_eq!(listed["data"][0]["date"], common::TODAY);
}

//! A new user records a season: sign up, plant, log work, harvest, review.

use crate::assert_output_contains;
use crate::common::FarmEnv;

#[test]
fn scenario_first_season_from_signup_to_profit() {
    let env = FarmEnv::on("2024-04-01");

    let result = env.run(&[
        "register", "--email", "ivan@example.com", "--password", "spring2024", "--name", "Ivan",
    ]);
    assert!(result.success, "stderr: {}", result.stderr);

    let field = env.create(&["field", "add", "River plot", "--area", "4", "--crop", "potato"]);
    let seed = env.run(&["field", "seed", &field, "--rate", "250", "--price", "40", "--json"]).json();
    assert_eq!(seed["data"]["expense"]["amount"], 40000.0);

    env.create(&["event", "add", "Hill potatoes", "--date", "2024-04-20", "--field", "River plot"]);
    env.create(&[
        "diary", "add", "Planted", "--field", &field, "--hours", "16", "--workers", "4",
    ]);

    let result = env.run(&[
        "field", "add-harvest", &field, "--quantity", "80", "--unit", "centner", "--income", "120000",
    ]);
    assert!(result.success, "stderr: {}", result.stderr);

    let dashboard = env.run(&["dashboard", "--json"]).json()["data"].clone();
    assert_eq!(dashboard["money"]["expenses"], 40000.0);
    assert_eq!(dashboard["money"]["income"], 120000.0);
    assert_eq!(dashboard["profit"], 80000.0);
    assert_eq!(dashboard["diary_entries_this_month"], 1);
    assert_eq!(dashboard["upcoming"][0]["title"], "Hill potatoes");

    let text = env.run(&[]);
    assert_output_contains!(text, "New farm");
    assert_output_contains!(text, "80 000 RUB");

    let advice = env.run(&["advise", "--json"]).json();
    assert_eq!(advice["data"][0]["field_name"], "River plot");
    assert_eq!(advice["data"][0]["estimated_yield"], 800.0);
}

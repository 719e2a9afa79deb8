//! Weather, advice, account and store commands through the binary.

mod common;

use common::FarmEnv;

#[test]
fn test_weather_forecast_length_and_yesterday() {
    let env = FarmEnv::new();
    let weather = env.run(&["weather", "--days", "3", "--location", "Tula", "--json"]).json();

    assert_eq!(weather["type"], "weather");
    let forecast = weather["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 3);
    assert_eq!(forecast[0]["date"], common::TODAY);
    assert_eq!(weather["yesterday"]["date"], "2024-03-09");
}

#[test]
fn test_weather_rejects_zero_days() {
    let env = FarmEnv::new();
    let result = env.run(&["weather", "--days", "0"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid days");
}

#[test]
fn test_weather_text_report() {
    let env = FarmEnv::new();
    let result = env.run(&["weather", "--days", "2"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_output_contains!(result, "Forecast");
    assert_output_contains!(result, "Yesterday");
}

#[test]
fn test_advise_uses_local_estimate_when_advisor_disabled() {
    let env = FarmEnv::new();
    env.write_config("[services]\nadvisor = false\n");
    env.create(&["field", "add", "North", "--area", "10", "--crop", "wheat"]);

    let advice = env.run(&["advise", "--weather-factor", "0.8", "--json"]).json();
    assert_eq!(advice["type"], "advice");
    assert_eq!(advice["data"][0]["field_name"], "North");
    assert_eq!(advice["data"][0]["estimated_yield"], 280.0);
    assert!(advice["data"][0]["service"].is_null());
}

#[test]
fn test_advise_includes_service_advice_by_default() {
    let env = FarmEnv::new();
    let id = env.create(&["field", "add", "North", "--area", "10", "--crop", "wheat"]);

    let advice = env.run(&["advise", "--field", &id, "--json"]).json();
    assert_eq!(advice["data"][0]["estimated_yield"], 350.0);
    let service = &advice["data"][0]["service"];
    assert!(!service["recommendations"]["recommendations"].as_array().unwrap().is_empty());
}

#[test]
fn test_advise_rejects_non_positive_weather_factor() {
    let env = FarmEnv::new();
    let result = env.run(&["advise", "--weather-factor", "0"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid weather factor");
}

#[test]
fn test_register_whoami_logout() {
    let env = FarmEnv::new();
    let result = env.run(&[
        "register",
        "--email",
        "anna@example.com",
        "--password",
        "harvest2024",
        "--name",
        "Anna",
        "--farm-name",
        "Green Acres",
    ]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_output_contains!(result, "Account created");

    let whoami = env.run(&["whoami", "--json"]).json();
    assert_eq!(whoami["user"]["name"], "Anna");
    assert_eq!(whoami["user"]["farmName"], "Green Acres");

    let dashboard = env.run(&["dashboard"]);
    assert_output_contains!(dashboard, "Green Acres");

    let logout = env.run(&["logout", "--json"]).json();
    assert_eq!(logout["data"]["was_signed_in"], true);

    let whoami = env.run(&["whoami", "--json"]).json();
    assert!(whoami["user"].is_null());
}

#[test]
fn test_register_rejects_weak_password() {
    let env = FarmEnv::new();
    let result = env.run(&[
        "register", "--email", "anna@example.com", "--password", "short", "--name", "Anna",
    ]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid password");
    assert!(!env.store_path().exists());
}

#[test]
fn test_settings_set_currency_changes_money_format() {
    let env = FarmEnv::new();
    let result = env.run(&["settings", "set", "currency", "usd"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let settings = env.run(&["settings", "show", "--json"]).json();
    assert_eq!(settings["data"]["currency"], "USD");

    let id = env.create(&["field", "add", "North", "--area", "1", "--crop", "corn"]);
    let result = env.run(&[
        "field", "add-expense", &id, "--description", "Diesel", "--amount", "1250",
    ]);
    assert_output_contains!(result, "1 250 USD");

    let result = env.run(&["settings", "set", "theme", "dark"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "unknown key 'theme'");
}

#[test]
fn test_store_import_keeps_existing_keys_without_overwrite() {
    let env = FarmEnv::new();
    env.create(&["field", "add", "Existing", "--area", "5", "--crop", "wheat"]);

    // Browser local storage holds every value as a JSON-encoded string.
    let fields = serde_json::json!([{
        "id": "1",
        "name": "Imported",
        "area": 3,
        "crop": "corn",
        "createdAt": "2023-05-01T08:00:00Z",
        "updatedAt": "2023-05-01T08:00:00Z"
    }]);
    let dump = serde_json::json!({
        "agri_fields": fields.to_string(),
        "agri_theme": "dark"
    });
    let dump = env.write_file("dump.json", &dump.to_string());
    let dump = dump.to_str().unwrap();

    let report = env.run(&["store", "import", dump, "--json"]).json();
    assert_eq!(report["type"], "imported");
    assert_eq!(report["data"]["kept"][0], "fields");

    let names: Vec<String> = env.run(&["field", "list", "--json"]).json()["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Existing"]);

    let report = env.run(&["store", "import", dump, "--overwrite", "--json"]).json();
    assert_eq!(report["data"]["imported"][0], "fields");
    let listed = env.run(&["field", "list", "--json"]).json();
    assert_eq!(listed["data"][0]["name"], "Imported");
}

#[test]
fn test_store_import_reads_browser_record_shapes() {
    let env = FarmEnv::new();

    let fields = serde_json::json!([{
        "id": "lt3x9k2abc",
        "name": "Северное поле",
        "area": 12,
        "crop": "wheat",
        "expenses": [],
        "harvest": [{
            "id": "lt3x9k2abe",
            "quantity": 40,
            "unit": "кг",
            "income": 30000,
            "date": "2023-08-20T00:00:00.000Z",
            "notes": ""
        }],
        "notesList": [],
        "createdAt": "2023-05-01T08:00:00.000Z",
        "updatedAt": "2023-08-20T00:00:00.000Z"
    }]);
    let diary = serde_json::json!([{
        "id": 1709000000000u64,
        "date": "2024-03-01T08:00:00.000Z",
        "category": "work",
        "title": "Вспашка",
        "fieldId": 1,
        "hours": 4,
        "workers": 2,
        "cost": 15000,
        "attachments": []
    }]);
    let user = serde_json::json!({
        "id": 1,
        "email": "ivanov@farm.ru",
        "name": "Иванов",
        "farmName": "Урожай",
        "role": "farmer",
        "token": "mock-jwt-token-1709000000000"
    });
    let dump = serde_json::json!({
        "fields": fields.to_string(),
        "agri_diary": diary.to_string(),
        "agri_user": user.to_string()
    });
    let dump = env.write_file("dump.json", &dump.to_string());

    let report = env
        .run(&["store", "import", dump.to_str().unwrap(), "--json"])
        .json();
    assert_eq!(report["data"]["imported"], serde_json::json!(["diary", "fields", "session"]));
    assert_eq!(report["data"]["skipped"], serde_json::json!([]));

    let listed = env.run(&["diary", "list", "--json"]).json();
    assert_eq!(listed["data"][0]["date"], "2024-03-01");
    let whoami = env.run(&["whoami", "--json"]).json();
    assert_eq!(whoami["user"]["farmName"], "Урожай");

    env.create(&["field", "add", "South", "--area", "3", "--crop", "corn"]);
    let store = env.read_store();
    let stored = store["entries"]["fields"].as_array().unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["harvest"][0]["unit"], "kg");
}

#[test]
fn test_store_import_skips_collections_it_cannot_read() {
    let env = FarmEnv::new();
    let dump = serde_json::json!({
        "animals": serde_json::json!([{"id": "a1", "name": "Herd", "type": "llama"}]).to_string()
    });
    let dump = env.write_file("dump.json", &dump.to_string());

    let result = env.run(&["store", "import", dump.to_str().unwrap(), "--json"]);
    assert!(result.success);
    let report = result.json();
    assert_eq!(report["data"]["imported"], serde_json::json!([]));
    assert_eq!(report["data"]["skipped"][0][0], "animals");
    assert!(report["data"]["skipped"][0][1]
        .as_str()
        .unwrap()
        .starts_with("not readable as animal records"));
}

#[test]
fn test_store_info_reports_schema_and_keys() {
    let env = FarmEnv::new();
    env.create(&["event", "add", "Sow", "--date", "2024-04-01"]);

    let info = env.run(&["store", "info", "--json"]).json();
    assert_eq!(info["data"]["exists"], true);
    assert_eq!(info["data"]["schema_version"], 2);

    let store = env.read_store();
    assert_eq!(store["schema_version"], 2);
    assert_eq!(store["entries"]["events"].as_array().unwrap().len(), 1);
}

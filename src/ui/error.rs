use farmbook::domain::entities::{Animal, CalendarEvent, DiaryEntry, Field, Greenhouse, Record};
use farmbook::domain::ports::StoreError;
use farmbook::FarmError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(farm) = err.downcast_ref::<FarmError>() else {
        return ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode);
    };
    format_farm_error(farm).render(supports_color, supports_unicode)
}

fn format_farm_error(err: &FarmError) -> ErrorBlock {
    match err {
        FarmError::NotFound { kind, id } => {
            let block = ErrorBlock::new(err.to_string());
            match list_command(kind) {
                Some(cmd) => block.with_fix(format!("Run `farmbook {} list` to see ids", cmd)),
                None => block,
            }
        }
        FarmError::Validation { .. } => {
            ErrorBlock::new(err.to_string()).with_fix("Nothing was saved; correct the value and retry")
        }
        FarmError::Store(StoreError::Corrupted { path, .. }) => {
            ErrorBlock::new(err.to_string()).with_file(path)
        }
        FarmError::InvalidConfig { file, message } => ErrorBlock::new(message.clone())
            .with_file(file)
            .with_fix("Fix the config file or remove it to use defaults"),
        _ => ErrorBlock::new(err.to_string()),
    }
}

fn list_command(kind: &str) -> Option<&'static str> {
    [
        (Field::KIND, "field"),
        (Animal::KIND, "animal"),
        (Greenhouse::KIND, "greenhouse"),
        (DiaryEntry::KIND, "diary"),
        (CalendarEvent::KIND, "event"),
    ]
    .into_iter()
    .find(|(k, _)| *k == kind)
    .map(|(_, cmd)| cmd)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "type": "error",
            "message": format!("{:#}", err),
            "validation": err
                .downcast_ref::<FarmError>()
                .is_some_and(FarmError::is_validation),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_points_at_the_list_command() {
        let err = anyhow::Error::from(FarmError::NotFound {
            kind: Field::KIND,
            id: "nope".to_string(),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("no field with id 'nope'"));
        assert!(rendered.contains("farmbook field list"));
    }

    #[test]
    fn animal_kind_maps_to_animal_command() {
        assert_eq!(list_command(Animal::KIND), Some("animal"));
        assert_eq!(list_command("tractor"), None);
    }

    #[test]
    fn corrupted_store_shows_path() {
        let err = anyhow::Error::from(FarmError::Store(StoreError::Corrupted {
            path: PathBuf::from("/tmp/farmbook.json"),
            message: "expected value at line 1".to_string(),
        }));
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("/tmp/farmbook.json"));
        assert!(rendered.contains("store file corrupted"));
    }

    #[test]
    fn plain_anyhow_error_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("failed to read dump");
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("failed to read dump: disk full"));
    }
}

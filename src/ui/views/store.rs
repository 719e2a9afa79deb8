use std::path::Path;

use farmbook::application::ImportReport;
use farmbook::infrastructure::StoreInfo;

use super::hint;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::table::{Align, Table};

pub struct StoreInfoView<'a> {
    info: &'a StoreInfo,
}

impl<'a> StoreInfoView<'a> {
    pub fn new(info: &'a StoreInfo) -> Self {
        Self { info }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(Icon::Store, "Store");
        header.add("Path", self.info.path.display().to_string());
        header.add("Schema", self.info.schema_version.to_string());
        header.add(
            "Updated",
            self.info
                .updated_at
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "never".to_string()),
        );
        let mut out = header.render(c, u);
        out.push('\n');

        if !self.info.exists {
            out.push_str(&hint("No store file yet; it is created on the first write.", c));
            return out;
        }

        let mut table = Table::new(&[("Key", Align::Left), ("Items", Align::Right)]);
        for (key, count) in &self.info.keys {
            table.add_row(vec![key.clone(), count.to_string()]);
        }
        for line in table.render_lines(c, u) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

pub struct ImportView<'a> {
    report: &'a ImportReport,
    source: &'a Path,
}

impl<'a> ImportView<'a> {
    pub fn new(report: &'a ImportReport, source: &'a Path) -> Self {
        Self { report, source }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let r = self.report;
        let mut summary = if r.skipped.is_empty() {
            ResultSummary::success("Legacy dump imported")
        } else {
            ResultSummary::partial("Legacy dump imported with warnings")
        };
        summary.add_detail("Source", self.source.display().to_string());
        summary.add_detail("Imported", list_or_none(&r.imported));
        summary.add_detail("Kept", list_or_none(&r.kept));
        for (key, reason) in &r.skipped {
            summary.add_warning(format!("skipped '{}': {}", key, reason));
        }
        if !r.kept.is_empty() {
            summary.with_next_step("Re-run with --overwrite to replace the kept keys");
        }
        summary.render(supports_color, supports_unicode)
    }
}

fn list_or_none(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_store_says_it_will_be_created() {
        let info = StoreInfo {
            path: PathBuf::from("/tmp/farmbook.json"),
            exists: false,
            schema_version: 2,
            updated_at: None,
            keys: Vec::new(),
        };
        let rendered = StoreInfoView::new(&info).render(false, false);
        assert!(rendered.contains("Updated: never"));
        assert!(rendered.contains("created on the first write"));
    }

    #[test]
    fn import_with_kept_keys_suggests_overwrite() {
        let report = ImportReport {
            imported: vec!["fields".to_string()],
            kept: vec!["settings".to_string()],
            skipped: vec![("agri_theme".to_string(), "unknown key".to_string())],
        };
        let rendered = ImportView::new(&report, Path::new("dump.json")).render(false, false);
        assert!(rendered.contains("with warnings"));
        assert!(rendered.contains("skipped 'agri_theme': unknown key"));
        assert!(rendered.contains("--overwrite"));
    }
}

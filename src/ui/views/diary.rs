use farmbook::domain::entities::DiaryEntry;
use farmbook::domain::services::diary_stats::DiaryStats;
use farmbook::domain::services::finance::format_currency;
use farmbook::domain::value_objects::DiaryCategory;

use super::{hint, section};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::{Align, Table};

fn category_cell(category: DiaryCategory, supports_color: bool, supports_unicode: bool) -> String {
    let label = if supports_unicode {
        format!("{} {}", category.icon(), category.label())
    } else {
        category.label().to_string()
    };
    ColoredText::tinted(label, category.tint()).render(supports_color)
}

pub struct DiaryListView<'a> {
    entries: &'a [&'a DiaryEntry],
    currency: &'a str,
    filtered: bool,
}

impl<'a> DiaryListView<'a> {
    pub fn new(entries: &'a [&'a DiaryEntry], currency: &'a str, filtered: bool) -> Self {
        Self {
            entries,
            currency,
            filtered,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(Icon::Diary, "Work diary");
        header.add("Entries", self.entries.len().to_string());
        let mut out = header.render(c, u);
        out.push('\n');

        if self.entries.is_empty() {
            let text = if self.filtered {
                "No entries match the filter."
            } else {
                "The diary is empty. Log work with `farmbook diary add <title>`."
            };
            out.push_str(&hint(text, c));
            return out;
        }

        let mut table = Table::new(&[
            ("Date", Align::Left),
            ("ID", Align::Left),
            ("Category", Align::Left),
            ("Title", Align::Left),
            ("Field", Align::Left),
            ("Hours", Align::Right),
            ("Cost", Align::Right),
        ]);
        for entry in self.entries {
            table.add_row(vec![
                entry.date.to_string(),
                entry.id.to_string(),
                category_cell(entry.category, c, u),
                entry.title.clone(),
                entry.field_name.clone().unwrap_or_default(),
                if entry.hours > 0.0 {
                    entry.hours.to_string()
                } else {
                    String::new()
                },
                if entry.cost > 0.0 {
                    format_currency(entry.cost, self.currency)
                } else {
                    String::new()
                },
            ]);
        }
        for line in table.render_lines(c, u) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

pub struct DiaryStatsView<'a> {
    stats: &'a DiaryStats,
    currency: &'a str,
}

impl<'a> DiaryStatsView<'a> {
    pub fn new(stats: &'a DiaryStats, currency: &'a str) -> Self {
        Self { stats, currency }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut out = CommandHeader::new(Icon::Diary, "Diary statistics").render(c, u);
        out.push('\n');

        let mut totals = Box::with_title(ColoredText::plain("Totals").bold().render(c));
        totals.add_rows(&[
            ("Entries", self.stats.entries.to_string()),
            ("Hours", self.stats.total_hours.to_string()),
            ("Workers", self.stats.total_workers.to_string()),
            ("Cost", format_currency(self.stats.total_cost, self.currency)),
        ]);
        out.push_str(&totals.render(c, u));

        let mut table = Table::new(&[("Category", Align::Left), ("Entries", Align::Right)]);
        for (category, count) in &self.stats.by_category {
            table.add_row(vec![category_cell(*category, c, u), count.to_string()]);
        }
        out.push_str(&section("By category", &table.render_lines(c, u), c));
        out
    }
}

/// Category ids accepted by `--category`, with their labels.
pub struct CategoriesView;

impl CategoriesView {
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut out = CommandHeader::new(Icon::Diary, "Diary categories").render(c, u);
        out.push('\n');

        let mut table = Table::new(&[("ID", Align::Left), ("Label", Align::Left)]);
        for category in DiaryCategory::ALL {
            table.add_row(vec![category.id().to_string(), category_cell(category, c, u)]);
        }
        for line in table.render_lines(c, u) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

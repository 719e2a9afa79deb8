use farmbook::domain::entities::CalendarEvent;
use farmbook::domain::value_objects::Priority;

use super::hint;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

pub struct EventListView<'a> {
    title: String,
    events: &'a [&'a CalendarEvent],
}

impl<'a> EventListView<'a> {
    pub fn new(title: impl Into<String>, events: &'a [&'a CalendarEvent]) -> Self {
        Self {
            title: title.into(),
            events,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(Icon::Calendar, self.title.as_str());
        header.add("Events", self.events.len().to_string());
        let mut out = header.render(c, u);
        out.push('\n');

        if self.events.is_empty() {
            out.push_str(&hint(
                "No events. Plan one with `farmbook event add <title> --date <YYYY-MM-DD>`.",
                c,
            ));
            return out;
        }

        let mut table = Table::new(&[
            ("Date", Align::Left),
            ("ID", Align::Left),
            ("", Align::Left),
            ("Kind", Align::Left),
            ("Title", Align::Left),
            ("Field", Align::Left),
            ("Hours", Align::Right),
        ]);
        for event in self.events {
            table.add_row(vec![
                event.date.to_string(),
                event.id.to_string(),
                Priority::marker(event.priority, u).to_string(),
                ColoredText::tinted(event.kind.label(), event.kind.tint()).render(c),
                event.title.clone(),
                event.field.clone().unwrap_or_default(),
                event.duration.map(|h| h.to_string()).unwrap_or_default(),
            ]);
        }
        for line in table.render_lines(c, u) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

use chrono::NaiveDate;

use farmbook::domain::entities::{CalendarEvent, DiaryEntry};
use farmbook::domain::services::calendar::{truncate_with_overflow, DayCell, MonthGrid};
use farmbook::domain::value_objects::{EventKind, Priority};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::border::{rule, BorderChar};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::primitives::width::{pad_right, truncate};

/// Columns between two vertical bars in the full grid.
const CELL_WIDTH: usize = 10;
/// Columns per day in the compact grid.
const COMPACT_CELL_WIDTH: usize = 5;

const LEGEND: [EventKind; 5] = [
    EventKind::Work,
    EventKind::Harvest,
    EventKind::Meeting,
    EventKind::Maintenance,
    EventKind::Other,
];

pub struct CalendarView<'a> {
    grid: &'a MonthGrid<'a, CalendarEvent>,
    today: NaiveDate,
    upcoming: &'a [&'a CalendarEvent],
    max_per_cell: usize,
}

impl<'a> CalendarView<'a> {
    pub fn new(
        grid: &'a MonthGrid<'a, CalendarEvent>,
        today: NaiveDate,
        upcoming: &'a [&'a CalendarEvent],
        max_per_cell: usize,
    ) -> Self {
        Self {
            grid,
            today,
            upcoming,
            max_per_cell,
        }
    }

    fn header(&self) -> CommandHeader {
        let month = self.grid.month();
        let mut header = CommandHeader::new(
            Icon::Calendar,
            format!("{} {}", month.name(), month.year()),
        );
        header.add("Today", self.today.to_string());
        header.add("Events", self.grid.item_count().to_string());
        header
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut out = self.header().render(c, u);
        out.push('\n');

        let border = |left, joint, right| -> String {
            let segments = vec![rule(CELL_WIDTH, u); 7];
            let line = format!(
                "{}{}{}",
                BorderChar::render(&left, u),
                segments.join(BorderChar::render(&joint, u)),
                BorderChar::render(&right, u)
            );
            ColoredText::dim(line).render(c)
        };
        let bar = ColoredText::dim(BorderChar::Vertical.render(u)).render(c);
        let row = |cells: Vec<String>| -> String {
            let inner: Vec<String> = cells
                .iter()
                .map(|cell| format!(" {} ", pad_right(cell, CELL_WIDTH - 2)))
                .collect();
            format!("{}{}{}\n", bar, inner.join(&bar), bar)
        };

        out.push_str(&border(BorderChar::TopLeft, BorderChar::TeeDown, BorderChar::TopRight));
        out.push('\n');
        let headers = self
            .grid
            .week_start()
            .headers()
            .iter()
            .map(|h| ColoredText::dim(*h).bold().render(c))
            .collect();
        out.push_str(&row(headers));

        for week in self.grid.weeks() {
            out.push_str(&border(BorderChar::TeeRight, BorderChar::Cross, BorderChar::TeeLeft));
            out.push('\n');

            let columns: Vec<Vec<String>> = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => self.day_lines(day, c, u),
                    None => Vec::new(),
                })
                .collect();
            let height = columns.iter().map(Vec::len).max().unwrap_or(0).max(2);
            for line in 0..height {
                let cells = columns
                    .iter()
                    .map(|col| col.get(line).cloned().unwrap_or_default())
                    .collect();
                out.push_str(&row(cells));
            }
        }

        out.push_str(&border(BorderChar::BottomLeft, BorderChar::TeeUp, BorderChar::BottomRight));
        out.push('\n');

        let legend: Vec<String> = LEGEND
            .iter()
            .map(|k| format!("{} {}", tag(*k, c), k.label()))
            .collect();
        out.push_str(&legend.join("  "));
        out.push_str("\n\n");

        out.push_str(&render_upcoming(self.upcoming, c, u));
        out
    }

    pub fn render_compact(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut out = self.header().render(c, u);
        out.push('\n');

        let headers: Vec<String> = self
            .grid
            .week_start()
            .headers()
            .iter()
            .map(|h| ColoredText::dim(pad_right(&format!(" {}", h), COMPACT_CELL_WIDTH)).render(c))
            .collect();
        out.push_str(headers.concat().trim_end());
        out.push('\n');

        let mark = if u { "•" } else { "+" };
        for week in self.grid.weeks() {
            let line: String = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => {
                        let is_today = day.date == self.today;
                        let (open, close) = if is_today { ("[", "]") } else { (" ", " ") };
                        let text = format!(
                            "{}{:>2}{}{}",
                            open,
                            day.day(),
                            close,
                            if day.is_empty() { " " } else { mark }
                        );
                        if is_today {
                            ColoredText::info(text).bold().render(c)
                        } else {
                            text
                        }
                    }
                    None => " ".repeat(COMPACT_CELL_WIDTH),
                })
                .collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');

        out.push_str(&render_upcoming(self.upcoming, c, u));
        out
    }

    fn day_lines(&self, day: &DayCell<'_, CalendarEvent>, c: bool, u: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if day.date == self.today {
            lines.push(
                ColoredText::info(format!("{:>2} today", day.day()))
                    .bold()
                    .render(c),
            );
        } else {
            lines.push(format!("{:>2}", day.day()));
        }

        let (shown, hidden) = truncate_with_overflow(&day.items, self.max_per_cell);
        for event in shown {
            lines.push(format!(
                "{} {}",
                tag(event.kind, c),
                truncate(&event.title, CELL_WIDTH - 4, u)
            ));
        }
        if hidden > 0 {
            lines.push(ColoredText::dim(format!("+{} more", hidden)).render(c));
        }
        lines
    }
}

/// One-letter kind tag in the kind's color.
fn tag(kind: EventKind, supports_color: bool) -> String {
    ColoredText::tinted(kind.tag().to_string(), kind.tint())
        .bold()
        .render(supports_color)
}

/// `! H Cut hay (North, 4h)`: priority marker, kind tag, title and details.
pub fn event_line(event: &CalendarEvent, supports_color: bool, supports_unicode: bool) -> String {
    let mut details = Vec::new();
    if let Some(field) = &event.field {
        details.push(field.clone());
    }
    if let Some(hours) = event.duration {
        details.push(format!("{}h", hours));
    }
    let details = if details.is_empty() {
        String::new()
    } else {
        ColoredText::dim(format!(" ({})", details.join(", "))).render(supports_color)
    };

    format!(
        "{} {} {}{}",
        Priority::marker(event.priority, supports_unicode),
        tag(event.kind, supports_color),
        event.title,
        details
    )
}

fn render_upcoming(events: &[&CalendarEvent], c: bool, u: bool) -> String {
    let mut out = format!("{}\n", ColoredText::info("Upcoming").bold().render(c));
    if events.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::dim("No upcoming events.").render(c)
        ));
        return out;
    }
    for event in events {
        out.push_str(&format!(
            "  {}  {}\n",
            ColoredText::dim(event.date.to_string()).render(c),
            event_line(event, c, u)
        ));
    }
    out
}

/// Everything planned or logged on one day, untruncated.
pub struct DayView<'a> {
    date: NaiveDate,
    events: &'a [&'a CalendarEvent],
    diary: &'a [&'a DiaryEntry],
}

impl<'a> DayView<'a> {
    pub fn new(date: NaiveDate, events: &'a [&'a CalendarEvent], diary: &'a [&'a DiaryEntry]) -> Self {
        Self {
            date,
            events,
            diary,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(
            Icon::Calendar,
            self.date.format("%A, %-d %B %Y").to_string(),
        );
        header.add("Events", self.events.len().to_string());
        header.add("Diary entries", self.diary.len().to_string());
        let mut out = header.render(c, u);
        out.push('\n');

        if self.events.is_empty() && self.diary.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(c, u),
                ColoredText::dim("Nothing planned or logged on this day.").render(c)
            ));
            return out;
        }

        for event in self.events {
            out.push_str(&format!("  {}", event_line(event, c, u)));
            out.push_str(&format!("  {}\n", ColoredText::dim(event.id.to_string()).render(c)));
        }
        if !self.diary.is_empty() {
            if !self.events.is_empty() {
                out.push('\n');
            }
            for entry in self.diary {
                out.push_str(&format!(
                    "  {} {}  {}\n",
                    Icon::Diary.colored(c, u),
                    ColoredText::tinted(entry.category.label(), entry.category.tint()).render(c),
                    entry.title
                ));
            }
        }
        out
    }
}

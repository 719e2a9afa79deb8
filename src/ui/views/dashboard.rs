use farmbook::domain::services::finance::{format_currency, ActivityKind};
use farmbook::Dashboard;

use super::calendar::event_line;
use super::{day, hint, section, signed_money};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;

pub struct DashboardView<'a> {
    dashboard: &'a Dashboard,
    currency: &'a str,
    farm_name: Option<&'a str>,
}

impl<'a> DashboardView<'a> {
    pub fn new(dashboard: &'a Dashboard, currency: &'a str, farm_name: Option<&'a str>) -> Self {
        Self {
            dashboard,
            currency,
            farm_name,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let d = self.dashboard;

        let mut header = CommandHeader::new(Icon::Dashboard, self.farm_name.unwrap_or("My farm"));
        header.add("Today", d.today.format("%A, %-d %B %Y").to_string());
        let mut out = header.render(c, u);
        out.push('\n');

        if d.is_empty() {
            out.push_str(&hint(
                "Nothing recorded yet. Start with `farmbook field add` or `farmbook animal add`.",
                c,
            ));
            return out;
        }

        let mut farm = Box::with_title(ColoredText::plain("Farm").bold().render(c));
        farm.add_rows(&[
            ("Fields", format!("{} ({} ha)", d.fields, (d.field_area * 100.0).round() / 100.0)),
            ("Animals", format!("{} head", d.animals)),
            ("Greenhouses", d.greenhouses.to_string()),
            (
                "Diary this month",
                format!(
                    "{} entries, {} h",
                    d.diary_entries_this_month, d.diary_hours_this_month
                ),
            ),
        ]);
        out.push_str(&farm.render(c, u));

        let mut money = Box::with_title(ColoredText::plain("Money").bold().render(c));
        money.add_rows(&[
            ("Expenses", format_currency(d.money.expenses, self.currency)),
            ("Income", format_currency(d.money.income, self.currency)),
            ("Profit", signed_money(d.profit, self.currency, c)),
        ]);
        out.push_str(&money.render(c, u));

        let recent: Vec<String> = if d.recent.is_empty() {
            vec![ColoredText::dim("No expenses or harvests yet.").render(c)]
        } else {
            d.recent
                .iter()
                .map(|a| {
                    let amount = match a.kind {
                        ActivityKind::Expense => ColoredText::error(format!(
                            "-{}",
                            format_currency(a.amount, self.currency)
                        )),
                        ActivityKind::Harvest => ColoredText::success(format!(
                            "+{}",
                            format_currency(a.amount, self.currency)
                        )),
                    }
                    .render(c);
                    format!(
                        "{}  {}: {}  {}",
                        ColoredText::dim(day(&a.date)).render(c),
                        a.field,
                        a.description,
                        amount
                    )
                })
                .collect()
        };
        out.push_str(&section("Recent activity", &recent, c));

        let upcoming: Vec<String> = if d.upcoming.is_empty() {
            vec![ColoredText::dim("No upcoming events.").render(c)]
        } else {
            d.upcoming
                .iter()
                .map(|e| {
                    format!(
                        "{}  {}",
                        ColoredText::dim(e.date.to_string()).render(c),
                        event_line(e, c, u)
                    )
                })
                .collect()
        };
        out.push_str(&section("Upcoming", &upcoming, c));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use farmbook::domain::services::finance::{Activity, MoneySummary};

    fn dashboard() -> Dashboard {
        Dashboard {
            today: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            fields: 2,
            field_area: 22.5,
            animals: 40,
            greenhouses: 1,
            money: MoneySummary {
                expenses: 15_000.0,
                income: 5_000.0,
            },
            profit: -10_000.0,
            recent: vec![Activity {
                kind: ActivityKind::Expense,
                field: "North".to_string(),
                description: "Fertilizer".to_string(),
                amount: 15_000.0,
                date: Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap(),
            }],
            upcoming: Vec::new(),
            diary_entries_this_month: 3,
            diary_hours_this_month: 12.5,
        }
    }

    #[test]
    fn shows_totals_and_activity() {
        let d = dashboard();
        let rendered = DashboardView::new(&d, "RUB", Some("Green Acres")).render(false, false);
        assert!(rendered.contains("Green Acres"));
        assert!(rendered.contains("2 (22.5 ha)"));
        assert!(rendered.contains("-10 000 RUB"));
        assert!(rendered.contains("2024-03-09  North: Fertilizer  -15 000 RUB"));
        assert!(rendered.contains("No upcoming events."));
    }

    #[test]
    fn empty_farm_shows_getting_started_hint() {
        let mut d = dashboard();
        d.fields = 0;
        d.animals = 0;
        d.greenhouses = 0;
        d.diary_entries_this_month = 0;
        let rendered = DashboardView::new(&d, "RUB", None).render(false, false);
        assert!(rendered.contains("My farm"));
        assert!(rendered.contains("farmbook field add"));
        assert!(!rendered.contains("Money"));
    }
}

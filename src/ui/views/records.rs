//! Listings and detail pages for fields, animal groups and greenhouses.

use farmbook::domain::entities::{Animal, Field, Greenhouse, Harvested, Ledger};
use farmbook::domain::services::finance::{format_currency, MoneySummary};

use super::{day, hint, section, signed_money};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::{Align, Table};

/// Table of records of one kind with farm-wide totals in the header.
pub struct RecordListView {
    header: CommandHeader,
    table: Table,
    empty_hint: &'static str,
}

impl RecordListView {
    pub fn fields(fields: &[Field], currency: &str, supports_color: bool) -> Self {
        let mut header = CommandHeader::new(Icon::Field, "Fields");
        header.add("Count", fields.len().to_string());
        header.add(
            "Total area",
            format!("{} ha", round2(fields.iter().map(|f| f.area).sum())),
        );

        let mut table = Table::new(&[
            ("ID", Align::Left),
            ("Name", Align::Left),
            ("Crop", Align::Left),
            ("Area, ha", Align::Right),
            ("Expenses", Align::Right),
            ("Income", Align::Right),
            ("Profit", Align::Right),
        ]);
        for field in fields {
            let money = MoneySummary::of(field);
            table.add_row(vec![
                field.id.to_string(),
                field.name.clone(),
                field.crop.label().to_string(),
                field.area.to_string(),
                format_currency(money.expenses, currency),
                format_currency(money.income, currency),
                signed_money(money.profit(), currency, supports_color),
            ]);
        }

        Self {
            header,
            table,
            empty_hint: "No fields yet. Add one with `farmbook field add <name> --area <ha> --crop <crop>`.",
        }
    }

    pub fn animals(animals: &[Animal], currency: &str, supports_color: bool) -> Self {
        let mut header = CommandHeader::new(Icon::Animal, "Animals");
        header.add("Groups", animals.len().to_string());
        header.add(
            "Head",
            animals.iter().map(|a| u64::from(a.count)).sum::<u64>().to_string(),
        );

        let mut table = Table::new(&[
            ("ID", Align::Left),
            ("Name", Align::Left),
            ("Kind", Align::Left),
            ("Count", Align::Right),
            ("Expenses", Align::Right),
            ("Income", Align::Right),
            ("Profit", Align::Right),
        ]);
        for animal in animals {
            let money = MoneySummary::of(animal);
            table.add_row(vec![
                animal.id.to_string(),
                animal.name.clone(),
                animal.kind.label().to_string(),
                animal.count.to_string(),
                format_currency(money.expenses, currency),
                format_currency(money.income, currency),
                signed_money(money.profit(), currency, supports_color),
            ]);
        }

        Self {
            header,
            table,
            empty_hint: "No animals yet. Add a group with `farmbook animal add <name> --kind <kind>`.",
        }
    }

    pub fn greenhouses(greenhouses: &[Greenhouse], currency: &str, supports_color: bool) -> Self {
        let mut header = CommandHeader::new(Icon::Greenhouse, "Greenhouses");
        header.add("Count", greenhouses.len().to_string());
        header.add(
            "Covered area",
            format!("{} m²", round2(greenhouses.iter().map(|g| g.area).sum())),
        );

        let mut table = Table::new(&[
            ("ID", Align::Left),
            ("Name", Align::Left),
            ("Type", Align::Left),
            ("Crop", Align::Left),
            ("Area, m²", Align::Right),
            ("Profit", Align::Right),
        ]);
        for greenhouse in greenhouses {
            let money = MoneySummary::of(greenhouse);
            table.add_row(vec![
                greenhouse.id.to_string(),
                greenhouse.name.clone(),
                greenhouse.kind.label().to_string(),
                greenhouse.crop.label().to_string(),
                greenhouse.area.to_string(),
                signed_money(money.profit(), currency, supports_color),
            ]);
        }

        Self {
            header,
            table,
            empty_hint: "No greenhouses yet. Add one with `farmbook greenhouse add <name> --area <m²>`.",
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = self.header.render(supports_color, supports_unicode);
        out.push('\n');
        if self.table.is_empty() {
            out.push_str(&hint(self.empty_hint, supports_color));
            return out;
        }
        for line in self.table.render_lines(supports_color, supports_unicode) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// One record with its money box and ledger sections.
pub struct RecordDetailView {
    header: CommandHeader,
    money: MoneySummary,
    currency: String,
    notes: String,
    sections: Vec<(&'static str, Table)>,
    journal: Vec<String>,
}

impl RecordDetailView {
    pub fn field(field: &Field, currency: &str) -> Self {
        let mut header = CommandHeader::new(Icon::Field, field.name.as_str());
        header.add("ID", field.id.to_string());
        header.add("Crop", field.crop.label());
        header.add("Area", format!("{} ha", field.area));
        header.add("Created", day(&field.created_at));

        let mut view = Self::ledger(header, field, currency, &field.notes);
        view.sections.push(("Harvest", harvest_table(field, currency)));
        view
    }

    pub fn animal(animal: &Animal, currency: &str) -> Self {
        let mut header = CommandHeader::new(Icon::Animal, animal.name.as_str());
        header.add("ID", animal.id.to_string());
        header.add("Kind", animal.kind.label());
        header.add("Count", animal.count.to_string());
        header.add("Created", day(&animal.created_at));

        let mut income = Table::new(&[
            ("Date", Align::Left),
            ("Description", Align::Left),
            ("Amount", Align::Right),
        ]);
        for row in &animal.income {
            income.add_row(vec![
                day(&row.date),
                row.description.clone(),
                format_currency(row.amount, currency),
            ]);
        }

        let mut view = Self::ledger(header, animal, currency, &animal.notes);
        view.sections.push(("Income", income));
        view
    }

    pub fn greenhouse(greenhouse: &Greenhouse, currency: &str) -> Self {
        let mut header = CommandHeader::new(Icon::Greenhouse, greenhouse.name.as_str());
        header.add("ID", greenhouse.id.to_string());
        header.add("Type", greenhouse.kind.label());
        header.add("Crop", greenhouse.crop.label());
        header.add("Area", format!("{} m²", greenhouse.area));
        header.add("Created", day(&greenhouse.created_at));

        let mut view = Self::ledger(header, greenhouse, currency, &greenhouse.notes);
        view.sections.push(("Harvest", harvest_table(greenhouse, currency)));
        view
    }

    fn ledger<L: Ledger>(header: CommandHeader, record: &L, currency: &str, notes: &str) -> Self {
        let mut expenses = Table::new(&[
            ("Date", Align::Left),
            ("Description", Align::Left),
            ("Qty", Align::Right),
            ("Amount", Align::Right),
        ]);
        for expense in record.expenses() {
            expenses.add_row(vec![
                day(&expense.date),
                expense.description.clone(),
                format!("{} {}", expense.quantity, expense.unit),
                format_currency(expense.amount, currency),
            ]);
        }

        let journal = record
            .notes()
            .iter()
            .map(|note| format!("{}  {}", day(&note.date), note.content))
            .collect();

        Self {
            header,
            money: MoneySummary::of(record),
            currency: currency.to_string(),
            notes: notes.to_string(),
            sections: vec![("Expenses", expenses)],
            journal,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut out = self.header.render(c, u);
        if !self.notes.trim().is_empty() {
            out.push_str(&hint(&self.notes, c));
        }
        out.push('\n');

        let mut totals = Box::with_title(ColoredText::plain("Money").bold().render(c));
        totals.add_rows(&[
            ("Expenses", format_currency(self.money.expenses, &self.currency)),
            ("Income", format_currency(self.money.income, &self.currency)),
            ("Profit", signed_money(self.money.profit(), &self.currency, c)),
        ]);
        out.push_str(&totals.render(c, u));

        for (title, table) in &self.sections {
            let lines = if table.is_empty() {
                vec![ColoredText::dim("none").render(c)]
            } else {
                table.render_lines(c, u)
            };
            out.push_str(&section(title, &lines, c));
        }

        let journal = if self.journal.is_empty() {
            vec![ColoredText::dim("none").render(c)]
        } else {
            self.journal.clone()
        };
        out.push_str(&section("Notes", &journal, c));
        out
    }
}

fn harvest_table<H: Harvested>(record: &H, currency: &str) -> Table {
    let mut table = Table::new(&[
        ("Date", Align::Left),
        ("Quantity", Align::Right),
        ("Income", Align::Right),
    ]);
    for harvest in record.harvests() {
        table.add_row(vec![
            day(&harvest.date),
            format!("{} {}", harvest.quantity, harvest.unit.symbol()),
            format_currency(harvest.income, currency),
        ]);
    }
    table
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use crossterm::style::Stylize;

use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::width::{pad_right, visible_width};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Box {
    title: Option<String>,
    content: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.content.push(part.to_string());
        }
    }

    pub fn add_empty(&mut self) {
        self.content.push(String::new());
    }

    /// Label/value pairs with the values aligned in one column.
    pub fn add_rows<L: AsRef<str>, V: AsRef<str>>(&mut self, rows: &[(L, V)]) {
        let label_width = rows
            .iter()
            .map(|(l, _)| visible_width(l.as_ref()))
            .max()
            .unwrap_or(0);
        for (label, value) in rows {
            self.content.push(format!(
                "{}  {}",
                pad_right(label.as_ref(), label_width),
                value.as_ref()
            ));
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        lines.extend(self.content.iter().cloned());

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let h = BorderChar::Horizontal.render(supports_unicode);
        let v = color_border(
            BorderChar::Vertical.render(supports_unicode),
            supports_color,
            self.style,
        );

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for line in &lines {
            out.push_str(&v);
            out.push(' ');
            out.push_str(&pad_right(line, inner_width - 1));
            out.push_str(&v);
            out.push('\n');
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h.repeat(inner_width),
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: BoxStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        BoxStyle::Info => theme::colors::INFO,
        BoxStyle::Success => theme::colors::SUCCESS,
        BoxStyle::Warning => theme::colors::WARNING,
        BoxStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_splits_multiline_content_into_rows() {
        let mut b = Box::with_title("TITLE");
        b.add_line("Line1\nLine2");
        let rendered = b.render(false, true);

        let line2 = rendered
            .lines()
            .find(|l| l.contains("Line2"))
            .expect("expected Line2 to appear in output");
        assert!(line2.starts_with(BorderChar::Vertical.render(true)));
    }

    #[test]
    fn rows_align_values() {
        let mut b = Box::default();
        b.add_rows(&[("Area", "12.5 ha"), ("Crop", "Wheat"), ("Expenses", "0 RUB")]);
        let rendered = b.render(false, false);
        assert!(rendered.contains("| Area      12.5 ha "));
        assert!(rendered.contains("| Expenses  0 RUB "));
    }

    #[test]
    fn every_row_has_the_same_width() {
        let mut b = Box::with_title("Fields");
        b.add_line("short");
        b.add_line("a considerably longer line");
        let rendered = b.render(false, true);
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}

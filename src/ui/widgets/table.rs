use crate::ui::primitives::border::rule;
use crate::ui::primitives::text::ColoredText;
use crate::ui::primitives::width::{pad_left, pad_right, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Column-aligned rows with a dim header line, meant to sit inside a `Box`.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<(String, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[(&str, Align)]) -> Self {
        Self {
            headers: headers
                .iter()
                .map(|(h, a)| (h.to_string(), *a))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Cells may contain ANSI color; widths are measured without it.
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render_lines(&self, supports_color: bool, supports_unicode: bool) -> Vec<String> {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, (h, _))| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |cells: &[String]| -> String {
            self.headers
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, ((_, align), w))| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    match align {
                        Align::Left => pad_right(cell, *w),
                        Align::Right => pad_left(cell, *w),
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let header: Vec<String> = self.headers.iter().map(|(h, _)| h.clone()).collect();
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let mut out = vec![
            ColoredText::dim(line(&header)).render(supports_color),
            ColoredText::dim(rule(total, supports_unicode)).render(supports_color),
        ];
        out.extend(self.rows.iter().map(|r| line(r)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_by_widest_cell() {
        let mut t = Table::new(&[("Name", Align::Left), ("Area", Align::Right)]);
        t.add_row(vec!["North".into(), "12.5".into()]);
        t.add_row(vec!["Orchard by the road".into(), "3".into()]);

        let lines = t.render_lines(false, false);
        assert_eq!(lines[0], "Name                 Area");
        assert_eq!(lines[1], "-".repeat(25));
        assert_eq!(lines[2], "North                12.5");
        assert_eq!(lines[3], "Orchard by the road     3");
    }
}

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::primitives::width::pad_right;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        out.push_str(&format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        ));

        let width = self.items.iter().map(|(l, _)| l.len() + 1).max().unwrap_or(0);
        for (label, value) in &self.items {
            let label = format!("{}:", label);
            out.push_str(&format!(
                "{} {}\n",
                ColoredText::dim(pad_right(&label, width)).render(supports_color),
                value
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Calendar, "March 2024");
        header.add("Events", "3");

        let rendered = header.render(false, false);
        assert!(rendered.contains("[CALENDAR] March 2024"));
    }

    #[test]
    fn aligns_item_values() {
        let mut header = CommandHeader::new(Icon::Store, "Store");
        header.add("Path", "/tmp/farmbook.json");
        header.add("Schema", "2");

        let rendered = header.render(false, false);
        assert!(rendered.contains("Path:   /tmp/farmbook.json\n"));
        assert!(rendered.contains("Schema: 2\n"));
    }
}

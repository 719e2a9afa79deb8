use farmbook::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Config sections farmbook reads; listed under unknown-key warnings.
const KNOWN_SECTIONS: &str = "[storage], [calendar], [services], [output]";

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
    hint: Option<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            hint: None,
        }
    }

    /// One line per ignored key, `file:line` when known, with the
    /// did-you-mean suggestion indented below it.
    pub fn config_keys(warnings: &[ConfigWarning]) -> Self {
        let title = match warnings.len() {
            1 => "Ignored 1 unknown config key".to_string(),
            n => format!("Ignored {} unknown config keys", n),
        };
        let mut block = Self::new(title);
        for w in warnings {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            block.add_line(format!("'{}' in {}", w.key, location));
            if let Some(suggestion) = &w.suggestion {
                block.add_line(format!("  Did you mean '{}'?", suggestion));
            }
        }
        block.hint = Some(format!("farmbook reads {}", KNOWN_SECTIONS));
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        for line in &self.lines {
            b.add_line(line.clone());
        }
        if let Some(hint) = &self.hint {
            b.add_empty();
            b.add_line(ColoredText::dim(hint.as_str()).render(supports_color));
        }
        b.render(supports_color, supports_unicode)
    }
}

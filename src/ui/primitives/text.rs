use std::fmt;

use crossterm::style::{Color, Stylize};

use farmbook::domain::value_objects::Tint;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Error,
    Warning,
    Info,
    Dim,
    /// Category color of a diary entry or event kind
    Category(Tint),
}

impl SemanticColor {
    fn color(&self) -> Color {
        match self {
            SemanticColor::Success => theme::colors::SUCCESS,
            SemanticColor::Error => theme::colors::ERROR,
            SemanticColor::Warning => theme::colors::WARNING,
            SemanticColor::Info => theme::colors::INFO,
            SemanticColor::Dim => theme::colors::DIM,
            SemanticColor::Category(tint) => theme::tint_color(*tint),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    fn with(text: impl Into<String>, color: Option<SemanticColor>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::with(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with(text, Some(SemanticColor::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with(text, Some(SemanticColor::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with(text, Some(SemanticColor::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with(text, Some(SemanticColor::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with(text, Some(SemanticColor::Dim))
    }

    pub fn tinted(text: impl Into<String>, tint: Tint) -> Self {
        Self::with(text, Some(SemanticColor::Category(tint)))
    }

    /// Green for gains, red for losses.
    pub fn signed(text: impl Into<String>, value: f64) -> Self {
        if value < 0.0 {
            Self::error(text)
        } else {
            Self::success(text)
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = self.text.as_str().with(color.color());
        if self.bold {
            styled = styled.bold();
        }
        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_returns_plain_text() {
        let t = ColoredText::success("ok");
        assert_eq!(t.render(false), "ok");
    }

    #[test]
    fn render_with_color_includes_ansi_escape() {
        let t = ColoredText::tinted("Harvest", Tint::Yellow);
        assert!(t.render(true).contains("\u{1b}["));
    }

    #[test]
    fn signed_picks_color_by_sign() {
        assert_eq!(
            ColoredText::signed("-5", -5.0),
            ColoredText::error("-5")
        );
        assert_eq!(ColoredText::signed("5", 5.0), ColoredText::success("5"));
    }
}

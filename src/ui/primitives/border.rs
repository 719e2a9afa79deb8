use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
    TeeDown,
    TeeUp,
    TeeRight,
    TeeLeft,
    Cross,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        use theme::{borders as u, borders_ascii as a};

        match (supports_unicode, self) {
            (true, BorderChar::TopLeft) => u::TOP_LEFT,
            (true, BorderChar::TopRight) => u::TOP_RIGHT,
            (true, BorderChar::BottomLeft) => u::BOTTOM_LEFT,
            (true, BorderChar::BottomRight) => u::BOTTOM_RIGHT,
            (true, BorderChar::Horizontal) => u::HORIZONTAL,
            (true, BorderChar::Vertical) => u::VERTICAL,
            (true, BorderChar::TeeDown) => u::TEE_DOWN,
            (true, BorderChar::TeeUp) => u::TEE_UP,
            (true, BorderChar::TeeRight) => u::TEE_RIGHT,
            (true, BorderChar::TeeLeft) => u::TEE_LEFT,
            (true, BorderChar::Cross) => u::CROSS,
            (false, BorderChar::TopLeft) => a::TOP_LEFT,
            (false, BorderChar::TopRight) => a::TOP_RIGHT,
            (false, BorderChar::BottomLeft) => a::BOTTOM_LEFT,
            (false, BorderChar::BottomRight) => a::BOTTOM_RIGHT,
            (false, BorderChar::Horizontal) => a::HORIZONTAL,
            (false, BorderChar::Vertical) => a::VERTICAL,
            (false, BorderChar::TeeDown) => a::TEE_DOWN,
            (false, BorderChar::TeeUp) => a::TEE_UP,
            (false, BorderChar::TeeRight) => a::TEE_RIGHT,
            (false, BorderChar::TeeLeft) => a::TEE_LEFT,
            (false, BorderChar::Cross) => a::CROSS,
        }
    }
}

/// Horizontal rule of `width` columns.
pub fn rule(width: usize, supports_unicode: bool) -> String {
    BorderChar::Horizontal.render(supports_unicode).repeat(width)
}

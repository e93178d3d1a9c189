use crossterm::style::{Attribute, Color, ContentStyle};

/// Styles applied to each kind of line the desk prints.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub banner: ContentStyle,
    pub menu_header: ContentStyle,
    pub menu_item: ContentStyle,
    pub prompt: ContentStyle,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: ContentStyle,
    pub success: ContentStyle,
    pub warning: ContentStyle,
    pub error: ContentStyle,

    /// When `false`, [`Theme::paint`] returns text untouched.
    pub colored: bool,
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold_fg(color: Color) -> ContentStyle {
    let mut style = fg(color);
    style.attributes.set(Attribute::Bold);
    style
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// ANSI colour theme for interactive terminals.
    pub fn color() -> Self {
        Self {
            banner: bold_fg(Color::Cyan),
            menu_header: bold_fg(Color::White),
            menu_item: fg(Color::Grey),
            prompt: bold_fg(Color::White),

            info: fg(Color::Cyan),
            success: fg(Color::Green),
            warning: fg(Color::Yellow),
            error: fg(Color::Red),

            colored: true,
        }
    }

    /// No escape sequences at all. Used for pipes, files and tests.
    pub fn plain() -> Self {
        Self {
            banner: ContentStyle::default(),
            menu_header: ContentStyle::default(),
            menu_item: ContentStyle::default(),
            prompt: ContentStyle::default(),

            info: ContentStyle::default(),
            success: ContentStyle::default(),
            warning: ContentStyle::default(),
            error: ContentStyle::default(),

            colored: false,
        }
    }

    /// Pick [`Theme::color`] or [`Theme::plain`].
    pub fn from_color_flag(use_color: bool) -> Self {
        if use_color {
            Self::color()
        } else {
            Self::plain()
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Render `text` in `style`, or verbatim for an uncoloured theme.
    pub fn paint(&self, style: ContentStyle, text: &str) -> String {
        if self.colored {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}

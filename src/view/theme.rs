//! Dark/light theme state
//!
//! Besides the flag itself the theme drives three CSS custom properties that
//! embedded charts use for their tooltips.

/// Tooltip colors derived from the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipPalette {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl TooltipPalette {
    pub const LIGHT: TooltipPalette = TooltipPalette {
        background: "#ffffff",
        border: "#e5e7eb",
        text: "#111827",
    };

    pub const DARK: TooltipPalette = TooltipPalette {
        background: "#374151",
        border: "#4b5563",
        text: "#f9fafb",
    };

    /// `(property, value)` pairs to set on the document element
    pub fn css_variables(&self) -> [(&'static str, &'static str); 3] {
        [
            ("--tooltip-bg", self.background),
            ("--tooltip-border", self.border),
            ("--tooltip-text", self.text),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flip the theme and return the new tooltip palette
    pub fn toggle(&mut self) -> TooltipPalette {
        self.dark = !self.dark;
        self.tooltip()
    }

    pub fn tooltip(&self) -> TooltipPalette {
        if self.dark {
            TooltipPalette::DARK
        } else {
            TooltipPalette::LIGHT
        }
    }

    /// Class toggled on the document root
    pub fn document_class(&self) -> Option<&'static str> {
        self.dark.then_some("dark")
    }

    pub fn label(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

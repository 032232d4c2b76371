//! Signal styling
//!
//! Total mapping from a [`Signal`] to an icon and tone. Unrecognized tags get
//! the neutral treatment.

use crate::indicators::Signal;

/// Icon shown next to a signal label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalIcon {
    TrendingUp,
    TrendingDown,
    AlertCircle,
}

impl SignalIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SignalIcon::TrendingUp => "▲",
            SignalIcon::TrendingDown => "▼",
            SignalIcon::AlertCircle => "●",
        }
    }
}

/// Semantic color family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Affirmative,
    Warning,
    Neutral,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Affirmative => "text-green-500",
            Tone::Warning => "text-red-500",
            Tone::Neutral => "text-yellow-500",
        }
    }
}

/// Visual treatment for one signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalStyle {
    pub icon: SignalIcon,
    pub tone: Tone,
}

impl SignalStyle {
    pub fn for_signal(signal: &Signal) -> Self {
        match signal {
            Signal::Positive => Self {
                icon: SignalIcon::TrendingUp,
                tone: Tone::Affirmative,
            },
            Signal::Negative => Self {
                icon: SignalIcon::TrendingDown,
                tone: Tone::Warning,
            },
            Signal::Neutral | Signal::Unrecognized(_) => Self {
                icon: SignalIcon::AlertCircle,
                tone: Tone::Neutral,
            },
        }
    }
}

impl From<&Signal> for SignalStyle {
    fn from(signal: &Signal) -> Self {
        Self::for_signal(signal)
    }
}

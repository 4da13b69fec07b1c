//! Display-string selection
//!
//! The locale flag picks user-visible strings only; timer semantics are
//! identical in both languages.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ja,
}

impl Locale {
    /// Title of the timer surface
    pub fn timer_title(&self) -> &'static str {
        match self {
            Locale::En => "POMODORO",
            Locale::Ja => "ポモドーロ",
        }
    }

    /// Notice surfaced when the countdown completes
    pub fn completion_notice(&self) -> &'static str {
        match self {
            Locale::En => "⏰ Time is up! Take a break!",
            Locale::Ja => "⏰ 時間です!休憩しましょう!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_differ_by_locale() {
        assert_ne!(
            Locale::En.completion_notice(),
            Locale::Ja.completion_notice()
        );
        assert!(Locale::En.completion_notice().contains("Time is up"));
    }
}

// src/config/insight.rs
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthInsight {
    pub category: String,
    pub value: String,
    pub trend: Trend,
    #[serde(default)]
    pub ai_note: Option<String>,
}

impl HealthInsight {
    /// Badge text, e.g. "↑ up".
    pub fn trend_label(&self) -> String {
        format!("{} {}", self.trend.arrow(), self.trend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_label() {
        let insight = HealthInsight {
            category: "Sleep Quality".to_string(),
            value: "7.2 hrs".to_string(),
            trend: Trend::Up,
            ai_note: None,
        };
        assert_eq!(insight.trend_label(), "↑ up");
        assert_eq!(Trend::Down.arrow(), "↓");
        assert_eq!(Trend::Stable.to_string(), "stable");
    }
}

//! Calendar View Mode

use serde::{Deserialize, Serialize};

/// Grid layout; serialized the same way the backend stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Month, ViewMode::Week, ViewMode::Day];

    /// Toolbar button text
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Month => "Mes",
            ViewMode::Week => "Semana",
            ViewMode::Day => "Día",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ViewMode::Month => "view-month",
            ViewMode::Week => "view-week",
            ViewMode::Day => "view-day",
        }
    }
}

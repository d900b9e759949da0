//! Admin Dashboard Stat Card
//!
//! Display-only figures for the admin dashboard. These are not fetched
//! from the messaging endpoint and are never sent back to it.

use serde::{Deserialize, Serialize};

/// One stat card on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStat {
    pub label: String,
    pub value: String,
    /// Icon name for the rendering layer
    pub icon: String,
    /// Trend badge text, e.g. "+12%"
    pub trend: String,
}

impl AdminStat {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        icon: impl Into<String>,
        trend: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.into(),
            trend: trend.into(),
        }
    }

    /// Whether the trend badge marks growth.
    pub fn is_growing(&self) -> bool {
        self.trend.starts_with('+')
    }
}

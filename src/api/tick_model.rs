use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rendering priority tier; `Primary` is the coarsest and most prominent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickLevel {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

/// Calendar unit a tick marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickType {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

/// Granularity of a coarse tick supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTickScale {
    Year,
    Month,
    Day,
    Hour,
}

impl BaseTickScale {
    #[must_use]
    pub fn tick_type(self) -> TickType {
        match self {
            Self::Year => TickType::Year,
            Self::Month => TickType::Month,
            Self::Day => TickType::Day,
            Self::Hour => TickType::Hour,
        }
    }

    /// Level a base tick of this scale is folded in at.
    #[must_use]
    pub fn default_level(self) -> TickLevel {
        match self {
            Self::Year => TickLevel::Primary,
            Self::Month => TickLevel::Secondary,
            Self::Day => TickLevel::Tertiary,
            Self::Hour => TickLevel::Quaternary,
        }
    }
}

/// Coarse tick computed upstream; the engine augments but never drops these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTick {
    pub t: DateTime<Utc>,
    pub label: String,
    pub x: f64,
    pub scale: BaseTickScale,
}

impl BaseTick {
    #[must_use]
    pub fn new(t: DateTime<Utc>, label: impl Into<String>, x: f64, scale: BaseTickScale) -> Self {
        Self {
            t,
            label: label.into(),
            x,
            scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub t: DateTime<Utc>,
    pub label: String,
    pub x: f64,
    pub level: TickLevel,
    #[serde(rename = "type")]
    pub kind: TickType,
}

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AxisMargins;
use crate::error::{AxisError, AxisResult};
use crate::render::Color;

use super::Season;

/// Time zone used for calendar walking, labels and season dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl AxisTimeZone {
    #[must_use]
    pub fn offset_minutes(self) -> i16 {
        match self {
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => minutes,
        }
    }

    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        let seconds = i32::from(self.offset_minutes()) * 60;
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }

    fn validate(self) -> AxisResult<Self> {
        // chrono accepts strictly less than one day of offset.
        if i32::from(self.offset_minutes()).abs() >= 24 * 60 {
            return Err(AxisError::InvalidConfig(
                "time zone offset must be within +/- 24h".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Minimum pixel distance between a candidate tick and already accepted ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSpacingPolicy {
    /// Month candidates vs primary ticks.
    pub month_vs_primary_px: f64,
    /// Day candidates vs ticks sharing the day tick's level.
    pub day_same_level_px: f64,
    /// Day candidates vs ticks at any other level.
    pub day_other_level_px: f64,
    pub hour_px: f64,
    pub minute_px: f64,
}

impl Default for TickSpacingPolicy {
    fn default() -> Self {
        Self {
            month_vs_primary_px: 40.0,
            day_same_level_px: 24.0,
            day_other_level_px: 30.0,
            hour_px: 25.0,
            minute_px: 40.0,
        }
    }
}

impl TickSpacingPolicy {
    fn validate(self) -> AxisResult<Self> {
        for (name, value) in [
            ("month_vs_primary_px", self.month_vs_primary_px),
            ("day_same_level_px", self.day_same_level_px),
            ("day_other_level_px", self.day_other_level_px),
            ("hour_px", self.hour_px),
            ("minute_px", self.minute_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AxisError::InvalidConfig(format!(
                    "tick spacing `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Fill color per season band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonPalette {
    pub spring: Color,
    pub summer: Color,
    pub autumn: Color,
    pub winter: Color,
}

impl Default for SeasonPalette {
    fn default() -> Self {
        Self {
            spring: Color::rgba(0.55, 0.80, 0.45, 0.12),
            summer: Color::rgba(0.98, 0.82, 0.30, 0.12),
            autumn: Color::rgba(0.90, 0.52, 0.22, 0.12),
            winter: Color::rgba(0.45, 0.65, 0.90, 0.12),
        }
    }
}

impl SeasonPalette {
    #[must_use]
    pub fn color(self, season: Season) -> Color {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Autumn => self.autumn,
            Season::Winter => self.winter,
        }
    }

    fn validate(self) -> AxisResult<Self> {
        for season in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
            if !self.color(season).is_normalized() {
                return Err(AxisError::InvalidConfig(format!(
                    "season palette color for {} must have channels in [0, 1]",
                    season.label()
                )));
            }
        }
        Ok(self)
    }
}

/// Serializable engine configuration.
///
/// Every field has a default so partial JSON documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisEngineConfig {
    #[serde(default)]
    pub margins: AxisMargins,
    #[serde(default)]
    pub spacing: TickSpacingPolicy,
    #[serde(default)]
    pub time_zone: AxisTimeZone,
    #[serde(default)]
    pub season_palette: SeasonPalette,
    #[serde(default = "default_season_band_max_span_days")]
    pub season_band_max_span_days: f64,
}

impl Default for AxisEngineConfig {
    fn default() -> Self {
        Self {
            margins: AxisMargins::default(),
            spacing: TickSpacingPolicy::default(),
            time_zone: AxisTimeZone::default(),
            season_palette: SeasonPalette::default(),
            season_band_max_span_days: default_season_band_max_span_days(),
        }
    }
}

impl AxisEngineConfig {
    #[must_use]
    pub fn with_margins(mut self, margins: AxisMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: AxisTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: TickSpacingPolicy) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn validate(self) -> AxisResult<Self> {
        self.margins.validate()?;
        self.spacing.validate()?;
        self.time_zone.validate()?;
        self.season_palette.validate()?;
        if !self.season_band_max_span_days.is_finite() || self.season_band_max_span_days < 0.0 {
            return Err(AxisError::InvalidConfig(
                "season band max span must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_season_band_max_span_days() -> f64 {
    365.0 * 10.0
}

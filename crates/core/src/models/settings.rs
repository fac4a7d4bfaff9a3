//! Per-user display preferences.
//!
//! [`AppSettings`] is a plain value. Nothing mutates it in place: every
//! update goes through [`AppSettings::apply`] or one of the `with_*`
//! builders and yields a new value, which the caller persists and passes on
//! to the view builders.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
    /// Hour-only labels ("8 AM") for grid headers. Not a stored preference.
    #[serde(rename = "12h-condensed")]
    TwelveHourCondensed,
}

impl TimeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "24h",
            TimeFormat::TwelveHour => "12h",
            TimeFormat::TwelveHourCondensed => "12h-condensed",
        }
    }

    /// Whether a user may pick this format as their preference.
    pub fn is_selectable(self) -> bool {
        !matches!(self, TimeFormat::TwelveHourCondensed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Blue,
    Pink,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Pink => "pink",
        }
    }
}

macro_rules! impl_setting_text {
    ($ty:ty, $label:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = TimetableError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$($variant),+]
                    .into_iter()
                    .find(|candidate| candidate.as_str() == s)
                    .ok_or_else(|| TimetableError::Validation(format!("Unknown {}: {}", $label, s)))
            }
        }
    };
}

impl_setting_text!(
    TimeFormat,
    "time format",
    [
        TimeFormat::TwentyFourHour,
        TimeFormat::TwelveHour,
        TimeFormat::TwelveHourCondensed,
    ]
);
impl_setting_text!(Theme, "theme", [Theme::Light, Theme::Dark]);
impl_setting_text!(Accent, "accent", [Accent::Blue, Accent::Pink]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub time_format: TimeFormat,
    pub theme: Theme,
    pub accent: Accent,
}

impl AppSettings {
    pub fn with_time_format(self, time_format: TimeFormat) -> TimetableResult<Self> {
        if !time_format.is_selectable() {
            return Err(TimetableError::Validation(format!(
                "Time format {} cannot be selected",
                time_format
            )));
        }
        Ok(Self { time_format, ..self })
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn with_accent(self, accent: Accent) -> Self {
        Self { accent, ..self }
    }

    /// Produces the settings that result from a partial update.
    pub fn apply(self, update: &UpdateSettingsRequest) -> TimetableResult<Self> {
        let mut next = self;
        if let Some(time_format) = update.time_format {
            next = next.with_time_format(time_format)?;
        }
        if let Some(theme) = update.theme {
            next = next.with_theme(theme);
        }
        if let Some(accent) = update.accent {
            next = next.with_accent(accent);
        }
        Ok(next)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub time_format: Option<TimeFormat>,
    pub theme: Option<Theme>,
    pub accent: Option<Accent>,
}

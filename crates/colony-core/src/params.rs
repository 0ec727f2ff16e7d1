//! Named simulation parameters.
//!
//! [`SimulationParameters`] holds the nine tunable values of a run: agent
//! counts, agent speeds, deposit count and richness, harvest rate, and field
//! size. The whole set is replaced at reset; single values can be changed
//! between ticks by name through [`SimulationParameters::set`].
//!
//! Every value is checked before it is stored, so a rejected update never
//! leaves the parameters half-modified.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised when reading or updating parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// The name does not match any recognized parameter.
    #[error("unknown parameter: {name}")]
    UnknownParameter {
        /// The name that was not recognized.
        name: String,
    },

    /// The value is outside the range the parameter accepts.
    #[error("invalid value {value} for {name}: {reason}")]
    InvalidParameter {
        /// The parameter being set.
        name: ParameterName,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// The recognized parameter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    /// Number of scouts spawned at reset.
    ScoutCount,
    /// Number of foragers spawned at reset.
    ForagerCount,
    /// Number of deposits generated at reset (wire name `papers_found`).
    DepositCount,
    /// Scout travel per tick at full time factor.
    ScoutSpeed,
    /// Forager travel per tick at full time factor.
    ForagerSpeed,
    /// Initial yield of every deposit.
    FieldRichness,
    /// Yield harvested per visit at full time factor (wire name
    /// `paper_analysis_rate`).
    HarvestRate,
    /// Field width.
    Width,
    /// Field height.
    Height,
}

impl ParameterName {
    /// Every parameter, in a stable order.
    pub const ALL: [Self; 9] = [
        Self::ScoutCount,
        Self::ForagerCount,
        Self::DepositCount,
        Self::ScoutSpeed,
        Self::ForagerSpeed,
        Self::FieldRichness,
        Self::HarvestRate,
        Self::Width,
        Self::Height,
    ];

    /// The wire name of the parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScoutCount => "scout_count",
            Self::ForagerCount => "forager_count",
            Self::DepositCount => "papers_found",
            Self::ScoutSpeed => "scout_speed",
            Self::ForagerSpeed => "forager_speed",
            Self::FieldRichness => "field_richness",
            Self::HarvestRate => "paper_analysis_rate",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    const fn is_count(self) -> bool {
        matches!(
            self,
            Self::ScoutCount | Self::ForagerCount | Self::DepositCount
        )
    }

    const fn must_be_positive(self) -> bool {
        matches!(
            self,
            Self::ScoutSpeed | Self::ForagerSpeed | Self::Width | Self::Height
        )
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterName {
    type Err = ParameterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "scout_count" => Ok(Self::ScoutCount),
            "forager_count" => Ok(Self::ForagerCount),
            "papers_found" | "deposit_count" => Ok(Self::DepositCount),
            "scout_speed" => Ok(Self::ScoutSpeed),
            "forager_speed" => Ok(Self::ForagerSpeed),
            "field_richness" => Ok(Self::FieldRichness),
            "paper_analysis_rate" | "harvest_rate" => Ok(Self::HarvestRate),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            other => Err(ParameterError::UnknownParameter {
                name: other.to_owned(),
            }),
        }
    }
}

/// The tunable values of a simulation run.
///
/// Field names follow the wire format of the original dashboard, so a
/// parameter set can be posted as JSON or written in YAML using the same
/// keys that [`ParameterName`] parses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Number of scouts.
    #[serde(default = "default_scout_count")]
    pub scout_count: u32,

    /// Number of foragers.
    #[serde(default = "default_forager_count")]
    pub forager_count: u32,

    /// Number of deposits scattered over the field.
    #[serde(
        rename = "papers_found",
        alias = "deposit_count",
        default = "default_deposit_count"
    )]
    pub deposit_count: u32,

    /// Scout travel per tick at full time factor.
    #[serde(default = "default_scout_speed")]
    pub scout_speed: f64,

    /// Forager travel per tick at full time factor.
    #[serde(default = "default_forager_speed")]
    pub forager_speed: f64,

    /// Initial yield of every deposit.
    #[serde(default = "default_field_richness")]
    pub field_richness: f64,

    /// Yield harvested per visit at full time factor.
    #[serde(
        rename = "paper_analysis_rate",
        alias = "harvest_rate",
        default = "default_harvest_rate"
    )]
    pub harvest_rate: f64,

    /// Field width.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Field height.
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            scout_count: default_scout_count(),
            forager_count: default_forager_count(),
            deposit_count: default_deposit_count(),
            scout_speed: default_scout_speed(),
            forager_speed: default_forager_speed(),
            field_richness: default_field_richness(),
            harvest_rate: default_harvest_rate(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl SimulationParameters {
    /// Check every parameter against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::InvalidParameter`] for the first value that
    /// is out of range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        ParameterName::ALL
            .into_iter()
            .try_for_each(|name| check_value(name, self.get(name)))
    }

    /// Read a parameter by name as a float.
    pub fn get(&self, name: ParameterName) -> f64 {
        match name {
            ParameterName::ScoutCount => f64::from(self.scout_count),
            ParameterName::ForagerCount => f64::from(self.forager_count),
            ParameterName::DepositCount => f64::from(self.deposit_count),
            ParameterName::ScoutSpeed => self.scout_speed,
            ParameterName::ForagerSpeed => self.forager_speed,
            ParameterName::FieldRichness => self.field_richness,
            ParameterName::HarvestRate => self.harvest_rate,
            ParameterName::Width => self.width,
            ParameterName::Height => self.height,
        }
    }

    /// Update a single parameter by its wire name.
    ///
    /// Returns the parsed parameter name on success.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UnknownParameter`] if `name` is not
    /// recognized, or [`ParameterError::InvalidParameter`] if `value` is out
    /// of range. In both cases no parameter is modified.
    pub fn set(&mut self, name: &str, value: f64) -> Result<ParameterName, ParameterError> {
        let parameter: ParameterName = name.parse()?;
        check_value(parameter, value)?;

        match parameter {
            ParameterName::ScoutCount => self.scout_count = to_count(value),
            ParameterName::ForagerCount => self.forager_count = to_count(value),
            ParameterName::DepositCount => self.deposit_count = to_count(value),
            ParameterName::ScoutSpeed => self.scout_speed = value,
            ParameterName::ForagerSpeed => self.forager_speed = value,
            ParameterName::FieldRichness => self.field_richness = value,
            ParameterName::HarvestRate => self.harvest_rate = value,
            ParameterName::Width => self.width = value,
            ParameterName::Height => self.height = value,
        }

        Ok(parameter)
    }
}

/// Check a single value against the range its parameter accepts.
fn check_value(name: ParameterName, value: f64) -> Result<(), ParameterError> {
    let invalid = |reason| ParameterError::InvalidParameter {
        name,
        value,
        reason,
    };

    if !value.is_finite() {
        return Err(invalid("must be a finite number"));
    }

    if name.is_count() {
        if value < 1.0 {
            return Err(invalid("must be at least 1"));
        }
        if value.fract() != 0.0 {
            return Err(invalid("must be a whole number"));
        }
        if value > f64::from(u32::MAX) {
            return Err(invalid("is too large"));
        }
    } else if name.must_be_positive() {
        if value <= 0.0 {
            return Err(invalid("must be positive"));
        }
    } else if value < 0.0 {
        return Err(invalid("must not be negative"));
    }

    Ok(())
}

/// Convert a count that has already passed [`check_value`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    value as u32
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_scout_count() -> u32 {
    3
}

const fn default_forager_count() -> u32 {
    7
}

const fn default_deposit_count() -> u32 {
    8
}

const fn default_scout_speed() -> f64 {
    4.0
}

const fn default_forager_speed() -> f64 {
    2.0
}

const fn default_field_richness() -> f64 {
    100.0
}

const fn default_harvest_rate() -> f64 {
    1.0
}

const fn default_width() -> f64 {
    1000.0
}

const fn default_height() -> f64 {
    800.0
}

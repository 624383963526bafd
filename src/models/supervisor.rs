//! Supervisor and regimen models.
//!
//! A supervisor is a roster entry owned by the external roster store; the
//! scheduling core only reads it. The regimen string ("14x7") encodes the
//! work/rest cadence and is parsed fail-soft: a string that cannot be
//! parsed degrades to the standard 14x7 regimen instead of aborting
//! generation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::CycleState;

static REGIMEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)x(\d+)").expect("regimen pattern is valid"));

/// Regimen used when a supervisor's regimen string cannot be parsed.
pub const DEFAULT_REGIMEN: Regimen = Regimen {
    work_days: 14,
    rest_days: 7,
};

/// A drilling supervisor as stored in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    /// Roster identifier.
    pub id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Work/rest cadence as "NxM" (e.g. "14x7", "7x7").
    #[serde(rename = "regimen")]
    pub regimen: String,
    /// Current cycle state, if the roster tracks one. Informational only;
    /// projection ignores it.
    #[serde(rename = "estadoCiclo", skip_serializing_if = "Option::is_none")]
    pub cycle_state: Option<CycleState>,
}

impl Supervisor {
    /// Creates a supervisor with the default 14x7 regimen.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            regimen: DEFAULT_REGIMEN.to_string(),
            cycle_state: None,
        }
    }

    /// Sets the regimen string.
    pub fn with_regimen(mut self, regimen: impl Into<String>) -> Self {
        self.regimen = regimen.into();
        self
    }

    /// Sets the tracked cycle state.
    pub fn with_cycle_state(mut self, state: CycleState) -> Self {
        self.cycle_state = Some(state);
        self
    }

    /// Parsed regimen, falling back to 14x7 on malformed input.
    pub fn parsed_regimen(&self) -> Regimen {
        Regimen::parse_or_default(&self.regimen)
    }
}

/// A work/rest cadence: `work_days` on site followed by `rest_days` off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regimen {
    /// Days on site per cycle (ascent, induction, drilling, descent).
    #[serde(rename = "diasTrabajo")]
    pub work_days: u32,
    /// Days off site per cycle.
    #[serde(rename = "diasDescanso")]
    pub rest_days: u32,
}

impl Regimen {
    /// Creates a regimen.
    pub fn new(work_days: u32, rest_days: u32) -> Self {
        Self {
            work_days,
            rest_days,
        }
    }

    /// Full cycle length in days.
    #[inline]
    pub fn cycle_len(&self) -> u32 {
        self.work_days + self.rest_days
    }

    /// Parses a regimen string, substituting the 14x7 default when the
    /// string is malformed.
    ///
    /// This is the entry point generation uses: malformed roster data must
    /// never abort schedule generation. The fallback is logged at `warn`.
    pub fn parse_or_default(s: &str) -> Self {
        match s.parse() {
            Ok(regimen) => regimen,
            Err(err) => {
                log::warn!("regimen '{s}' unusable ({err}), falling back to 14x7");
                DEFAULT_REGIMEN
            }
        }
    }
}

/// Why a regimen string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegimenParseError {
    /// The string contains no "NxM" pattern.
    #[error("no NxM pattern in regimen string")]
    PatternMismatch,
    /// A component, or the total cycle length, does not fit in `u32`.
    #[error("regimen component out of range")]
    OutOfRange,
    /// Both components are zero, which would make the cycle zero days long.
    #[error("regimen describes a zero-length cycle")]
    ZeroCycle,
}

impl FromStr for Regimen {
    type Err = RegimenParseError;

    /// Extracts the first "NxM" match (case-insensitive separator) from
    /// anywhere in the string.
    ///
    /// Zero-valued single components are accepted as written ("0x5" is a
    /// supervisor who never works); only a cycle of zero total length is
    /// rejected. Both components and their sum (the cycle length) must
    /// fit in `u32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = REGIMEN_RE
            .captures(s)
            .ok_or(RegimenParseError::PatternMismatch)?;
        let work_days: u32 = caps[1]
            .parse()
            .map_err(|_| RegimenParseError::OutOfRange)?;
        let rest_days: u32 = caps[2]
            .parse()
            .map_err(|_| RegimenParseError::OutOfRange)?;
        if work_days.checked_add(rest_days).is_none() {
            return Err(RegimenParseError::OutOfRange);
        }
        if work_days == 0 && rest_days == 0 {
            return Err(RegimenParseError::ZeroCycle);
        }
        Ok(Self {
            work_days,
            rest_days,
        })
    }
}

impl fmt::Display for Regimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.work_days, self.rest_days)
    }
}

//! Cycle state enumeration.
//!
//! A supervisor is in exactly one of five states on any given day. The
//! single-letter codes are the cell labels the dashboard grid renders and
//! the values used on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a supervisor within their work/rest cycle on a given day.
///
/// Closed enumeration; the projector never produces anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleState {
    /// Travel up to the site, first day of the cycle.
    #[serde(rename = "S")]
    Ascent,
    /// Onboarding days immediately after ascent, before drilling.
    #[serde(rename = "I")]
    Induction,
    /// Actively supervising drilling work. The "always 2" rule counts
    /// supervisors in this state.
    #[serde(rename = "P")]
    Drilling,
    /// Travel down from the site, last working day of the cycle.
    #[serde(rename = "B")]
    Descent,
    /// Off-site rest days (also the state before a supervisor's cycle
    /// has started).
    #[serde(rename = "D")]
    Rest,
}

impl CycleState {
    /// Single-letter code used in grid cells and on the wire.
    #[inline]
    pub fn code(self) -> char {
        match self {
            Self::Ascent => 'S',
            Self::Induction => 'I',
            Self::Drilling => 'P',
            Self::Descent => 'B',
            Self::Rest => 'D',
        }
    }

    /// Human-readable name for the dashboard legend.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascent => "Ascent",
            Self::Induction => "Induction",
            Self::Drilling => "Drilling",
            Self::Descent => "Descent",
            Self::Rest => "Rest",
        }
    }

    /// All states, in legend order.
    pub const ALL: [CycleState; 5] = [
        Self::Ascent,
        Self::Induction,
        Self::Drilling,
        Self::Descent,
        Self::Rest,
    ];
}

impl fmt::Display for CycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<char> = CycleState::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_wire_format_is_letter_code() {
        for state in CycleState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.code()));
            let back: CycleState = serde_json::from_str(&json).unwrap();
            assert_eq!(back, state);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CycleState::Drilling.to_string(), "Drilling");
        assert_eq!(CycleState::Rest.name(), "Rest");
    }
}

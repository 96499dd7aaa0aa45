//! Carrier templates that turn a flight plan into a [`Document`].
//!
//! Each supported carrier is a variant of the closed [`Carrier`] enum, and
//! each carrier's layout is a [`BriefTemplate`] implementation. Templates are
//! pure: the same plan and profile always produce the same document.
//!
//! ```rust
//! use flightbrief_core::templates::Carrier;
//!
//! let carrier: Carrier = "jst".parse().unwrap();
//! assert_eq!(carrier, Carrier::Jetstar);
//! assert_eq!(carrier.code(), "JST");
//! assert!("VOZ".parse::<Carrier>().is_err());
//! ```

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    config::BriefConfig,
    document::Document,
    error::{BriefError, Result},
    models::RawFlightPlan,
};

pub mod jetstar;

pub use jetstar::JetstarTemplate;

/// A carrier-specific document layout.
pub trait BriefTemplate {
    /// The carrier this template lays out.
    fn carrier(&self) -> Carrier;

    /// Builds the complete brief for `plan`.
    ///
    /// # Errors
    ///
    /// Returns `BriefError::InvalidInput` if a field the layout does
    /// arithmetic on cannot be parsed.
    fn assemble(&self, plan: &RawFlightPlan) -> Result<Document>;
}

/// Carriers with a brief template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Carrier {
    Jetstar,
}

impl Carrier {
    /// Every supported carrier.
    pub fn all() -> &'static [Carrier] {
        &[Carrier::Jetstar]
    }

    /// ICAO airline designator.
    pub fn code(&self) -> &'static str {
        match self {
            Carrier::Jetstar => "JST",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Carrier::Jetstar => "Jetstar",
        }
    }

    /// The template for this carrier, configured from `config`.
    pub fn template(&self, config: &BriefConfig) -> Box<dyn BriefTemplate> {
        match self {
            Carrier::Jetstar => Box::new(JetstarTemplate::new(config.jetstar.clone())),
        }
    }

    fn supported_codes() -> String {
        Self::all()
            .iter()
            .map(Carrier::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Carrier {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| BriefError::UnknownCarrier {
                code: code.to_string(),
                supported: Self::supported_codes(),
            })
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("JST".parse::<Carrier>().unwrap(), Carrier::Jetstar);
        assert_eq!(" jst ".parse::<Carrier>().unwrap(), Carrier::Jetstar);
    }

    #[test]
    fn test_unknown_carrier_lists_supported() {
        let err = "VOZ".parse::<Carrier>().unwrap_err();
        match err {
            BriefError::UnknownCarrier { code, supported } => {
                assert_eq!(code, "VOZ");
                assert_eq!(supported, "JST");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_template_reports_carrier() {
        let template = Carrier::Jetstar.template(&BriefConfig::default());
        assert_eq!(template.carrier(), Carrier::Jetstar);
        assert_eq!(Carrier::Jetstar.to_string(), "JST");
    }
}

//! Evidence taxonomy: the closed set of trust tiers a claim can carry.

use crate::errors::IntegrityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trust tier assigned to a claim, determining its numeric weight.
///
/// The set is closed: an unknown category name fails at construction
/// time instead of defaulting to some weight. Weights are distinct and
/// strictly decreasing from `Verified` to `Projected`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceCategory {
    /// Official data, published sources, direct measurement
    Verified,
    /// Derived from verified inputs with explicit formula
    Calculated,
    /// Proxy measures, interpolation, expert judgment
    Estimated,
    /// Logical derivation with stated assumptions
    Inferred,
    /// Counterfactual scenarios, forecasts, simulations
    Projected,
}

impl EvidenceCategory {
    /// All categories, strongest evidence first.
    pub const ALL: [EvidenceCategory; 5] = [
        EvidenceCategory::Verified,
        EvidenceCategory::Calculated,
        EvidenceCategory::Estimated,
        EvidenceCategory::Inferred,
        EvidenceCategory::Projected,
    ];

    /// Trust weight in [0, 1].
    pub fn weight(self) -> f64 {
        match self {
            EvidenceCategory::Verified => 1.0,
            EvidenceCategory::Calculated => 0.85,
            EvidenceCategory::Estimated => 0.65,
            EvidenceCategory::Inferred => 0.45,
            EvidenceCategory::Projected => 0.25,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EvidenceCategory::Verified => {
                "Official data, published sources, direct measurement"
            }
            EvidenceCategory::Calculated => {
                "Derived from verified inputs with explicit formula"
            }
            EvidenceCategory::Estimated => {
                "Proxy measures, interpolation, expert judgment"
            }
            EvidenceCategory::Inferred => {
                "Logical derivation with stated assumptions"
            }
            EvidenceCategory::Projected => {
                "Counterfactual scenarios, forecasts, simulations"
            }
        }
    }

    /// Example instances per tier. Documentation only, never enforced.
    pub fn examples(self) -> &'static [&'static str] {
        match self {
            EvidenceCategory::Verified => &[
                "SERVEL election results",
                "World Bank statistics",
                "CSJN fallos",
            ],
            EvidenceCategory::Calculated => &[
                "CF = [PE × (1-Gap) × (1-CD) × SP] / CLI",
                "FSI = (1-Gap) × 100%",
            ],
            EvidenceCategory::Estimated => &[
                "Elite support from polling aggregates",
                "Pre-1990 Argentina CLI",
            ],
            EvidenceCategory::Inferred => &[
                "Cultural distance from survey responses",
                "Institutional fit scoring",
            ],
            EvidenceCategory::Projected => &[
                "Chile 'if passed' scenario",
                "Argentina 2030 CLI projection",
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceCategory::Verified => "verified",
            EvidenceCategory::Calculated => "calculated",
            EvidenceCategory::Estimated => "estimated",
            EvidenceCategory::Inferred => "inferred",
            EvidenceCategory::Projected => "projected",
        }
    }
}

impl fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EvidenceCategory {
    type Err = IntegrityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvidenceCategory::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| IntegrityError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_strictly_decrease_with_trust() {
        let weights: Vec<f64> = EvidenceCategory::ALL.iter().map(|c| c.weight()).collect();
        for pair in weights.windows(2) {
            assert!(
                pair[0] > pair[1],
                "weights must strictly decrease: {} vs {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn category_names_round_trip() {
        for category in EvidenceCategory::ALL {
            let parsed: EvidenceCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "speculative".parse::<EvidenceCategory>().unwrap_err();
        assert!(err.to_string().contains("speculative"));
    }

    #[test]
    fn categories_serialize_as_lowercase_names() {
        let json = serde_json::to_string(&EvidenceCategory::Projected).unwrap();
        assert_eq!(json, "\"projected\"");
    }
}

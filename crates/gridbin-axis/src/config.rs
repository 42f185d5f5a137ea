//! Axis configuration records.
//!
//! An axis serializes to `{"type": <TypeName>, "payload": {...}}` so that a
//! reader can dispatch on the type name before decoding the payload.

use crate::axis::{Axis, BinnedAxis};
use crate::boundary::AxisBoundary;
use crate::equidistant::EquidistantAxis;
use crate::variable::VariableAxis;
use gridbin_core::{AxisError, GridError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Serializable description of an [`Axis`].
///
/// Decoding a record does not validate it; [`build`](Self::build) does.
///
/// # Examples
///
/// ```
/// use gridbin_axis::{AxisBoundary, AxisConfig, BinnedAxis};
///
/// let json = r#"{"type":"VariableAxis","payload":{"edges":[0.0,1.0,4.0],"boundary":"Closed"}}"#;
/// let config = AxisConfig::from_json(json).unwrap();
/// let axis = config.build().unwrap();
/// assert_eq!(axis.n_bins(), 2);
/// assert_eq!(axis.boundary(), AxisBoundary::Closed);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AxisConfig {
    /// Uniform bins over `[min, max)`.
    EquidistantAxis {
        /// Lower domain bound.
        min: f64,
        /// Upper domain bound.
        max: f64,
        /// Number of real bins.
        n_bins: usize,
        /// Boundary policy; open when omitted.
        #[serde(default)]
        boundary: AxisBoundary,
    },
    /// Explicit bin edges.
    VariableAxis {
        /// Strictly increasing edges.
        edges: Vec<f64>,
        /// Boundary policy; open when omitted.
        #[serde(default)]
        boundary: AxisBoundary,
    },
}

impl AxisConfig {
    /// Validate the record and construct the axis it describes.
    pub fn build(&self) -> Result<Axis, AxisError> {
        match self {
            Self::EquidistantAxis {
                min,
                max,
                n_bins,
                boundary,
            } => EquidistantAxis::new(*min, *max, *n_bins, *boundary).map(Axis::from),
            Self::VariableAxis { edges, boundary } => {
                VariableAxis::new(edges.clone(), *boundary).map(Axis::from)
            }
        }
    }

    /// Boundary policy named by the record.
    pub fn boundary(&self) -> AxisBoundary {
        match self {
            Self::EquidistantAxis { boundary, .. } | Self::VariableAxis { boundary, .. } => {
                *boundary
            }
        }
    }

    /// Encode as a JSON record.
    pub fn to_json(&self) -> Result<String, GridError> {
        serde_json::to_string(self).map_err(|e| GridError::InvalidRecord {
            reason: e.to_string(),
        })
    }

    /// Decode a JSON record.
    ///
    /// Malformed JSON, unknown type names, and missing fields are
    /// `Err(GridError::InvalidRecord)`. The payload is validated later, by
    /// [`build`](Self::build).
    pub fn from_json(s: &str) -> Result<Self, GridError> {
        serde_json::from_str(s).map_err(|e| {
            warn!(error = %e, "failed to decode axis record");
            GridError::InvalidRecord {
                reason: e.to_string(),
            }
        })
    }
}

impl From<&EquidistantAxis> for AxisConfig {
    fn from(a: &EquidistantAxis) -> Self {
        Self::EquidistantAxis {
            min: a.min(),
            max: a.max(),
            n_bins: a.n_bins(),
            boundary: a.boundary(),
        }
    }
}

impl From<&VariableAxis> for AxisConfig {
    fn from(a: &VariableAxis) -> Self {
        Self::VariableAxis {
            edges: a.edges().to_vec(),
            boundary: a.boundary(),
        }
    }
}

impl From<&Axis> for AxisConfig {
    fn from(a: &Axis) -> Self {
        match a {
            Axis::Equidistant(e) => e.into(),
            Axis::Variable(v) => v.into(),
        }
    }
}

impl TryFrom<AxisConfig> for Axis {
    type Error = AxisError;

    fn try_from(config: AxisConfig) -> Result<Self, Self::Error> {
        match config {
            AxisConfig::VariableAxis { edges, boundary } => {
                VariableAxis::new(edges, boundary).map(Axis::from)
            }
            other => other.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equidistant_record_shape() {
        let axis = EquidistantAxis::bound(0.0, 4.0, 4).unwrap();
        let value = serde_json::to_value(AxisConfig::from(&axis)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "EquidistantAxis",
                "payload": {"min": 0.0, "max": 4.0, "n_bins": 4, "boundary": "Bound"}
            })
        );
    }

    #[test]
    fn variable_record_round_trips_through_axis() {
        let axis = Axis::from(VariableAxis::closed(vec![0.0, 0.5, 3.0]).unwrap());
        let json = AxisConfig::from(&axis).to_json().unwrap();
        let rebuilt = AxisConfig::from_json(&json).unwrap().build().unwrap();
        assert_eq!(rebuilt, axis);
    }

    #[test]
    fn missing_boundary_defaults_to_open() {
        let config: AxisConfig = serde_json::from_value(json!({
            "type": "EquidistantAxis",
            "payload": {"min": -1.0, "max": 1.0, "n_bins": 2}
        }))
        .unwrap();
        assert_eq!(config.boundary(), AxisBoundary::Open);
    }

    #[test]
    fn undecodable_records_are_invalid() {
        for bad in [
            "{",
            r#"{"type":"LogAxis","payload":{}}"#,
            r#"{"type":"VariableAxis","payload":{"boundary":"Open"}}"#,
            r#"{"type":"VariableAxis","payload":{"edges":[0.0,1.0],"boundary":"Wrap"}}"#,
        ] {
            assert!(
                matches!(AxisConfig::from_json(bad), Err(GridError::InvalidRecord { .. })),
                "{bad} decoded"
            );
        }
    }

    #[test]
    fn build_revalidates_payload() {
        let config = AxisConfig::VariableAxis {
            edges: vec![0.0, 2.0, 1.0],
            boundary: AxisBoundary::Open,
        };
        assert!(matches!(
            config.build(),
            Err(AxisError::NonIncreasingEdges { index: 2, .. })
        ));
        assert!(Axis::try_from(config).is_err());

        let config = AxisConfig::EquidistantAxis {
            min: 0.0,
            max: 1.0,
            n_bins: 0,
            boundary: AxisBoundary::Closed,
        };
        assert_eq!(Axis::try_from(config), Err(AxisError::EmptyAxis));
    }
}

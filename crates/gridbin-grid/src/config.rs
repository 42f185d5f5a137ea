//! Grid configuration records.

use gridbin_axis::{Axis, AxisConfig};
use gridbin_core::GridError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Serializable description of a grid's axes.
///
/// Encodes as `{"type": "Grid", "payload": {"axes": [...]}}`, each axis
/// being an [`AxisConfig`] record. Cell values are not part of the record.
///
/// # Examples
///
/// ```
/// use gridbin_grid::GridConfig;
///
/// let json = r#"{"type":"Grid","payload":{"axes":[
///     {"type":"EquidistantAxis","payload":{"min":0.0,"max":1.0,"n_bins":10,"boundary":"Closed"}},
///     {"type":"VariableAxis","payload":{"edges":[0.0,0.5,3.0]}}
/// ]}}"#;
/// let config = GridConfig::from_json(json).unwrap();
/// assert_eq!(config.ndim(), 2);
/// let axes = config.build_axes().unwrap();
/// assert_eq!(axes.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum GridConfig {
    /// A grid over the listed axes.
    Grid {
        /// One record per axis, in order.
        axes: Vec<AxisConfig>,
    },
}

impl GridConfig {
    /// A record over the given axis records.
    pub fn new(axes: Vec<AxisConfig>) -> Self {
        Self::Grid { axes }
    }

    /// Record describing `axes`.
    pub fn from_axes<'a>(axes: impl IntoIterator<Item = &'a Axis>) -> Self {
        Self::new(axes.into_iter().map(AxisConfig::from).collect())
    }

    /// The axis records.
    pub fn axes(&self) -> &[AxisConfig] {
        match self {
            Self::Grid { axes } => axes,
        }
    }

    /// Number of axes described.
    pub fn ndim(&self) -> usize {
        self.axes().len()
    }

    /// Validate and construct every axis.
    ///
    /// Returns `Err(GridError::EmptyGrid)` for a record without axes and
    /// `Err(GridError::InvalidAxis)` naming the first axis that fails.
    pub fn build_axes(&self) -> Result<Vec<Axis>, GridError> {
        if self.axes().is_empty() {
            return Err(GridError::EmptyGrid);
        }
        self.axes()
            .iter()
            .enumerate()
            .map(|(axis, c)| c.build().map_err(|source| GridError::InvalidAxis { axis, source }))
            .collect()
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
    /// `Err(GridError::InvalidRecord)`. Axis parameters are validated
    /// later, by [`build_axes`](Self::build_axes).
    pub fn from_json(s: &str) -> Result<Self, GridError> {
        serde_json::from_str(s).map_err(|e| {
            warn!(error = %e, "failed to decode grid record");
            GridError::InvalidRecord {
                reason: e.to_string(),
            }
        })
    }
}

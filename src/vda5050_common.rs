use serde::{Deserialize, Serialize};

use crate::error::{
    check_non_negative, check_range, check_theta, ValidationError, DEVIATION_THETA_LIMIT,
};

/// header_id of a message. The header_id is defined per topic and incremented by 1 with
/// each sent (but not necessarily received) message.
pub type HeaderId = u32;

/// Node position. Optional for vehicles that cannot use node coordinates for localization.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodePosition {
    /// X position on the map in reference to the map coordinate system (in m).
    pub x: f64,
    /// Y position on the map in reference to the map coordinate system (in m).
    pub y: f64,
    /// Absolute orientation of the AGV on the node (in rad). Range: [-pi, pi].
    pub theta: Option<f64>,
    /// Indicates how exact an AGV has to drive over a node in order for it to count as traversed.
    pub allowed_deviation_xy: Option<f64>,
    /// Indicates how big the deviation of theta angle can be. The lowest acceptable angle is theta - allowedDeviationTheta and the highest acceptable angle is theta + allowedDeviationTheta.
    pub allowed_deviation_theta: Option<f64>,
    /// Unique identification of the map in which the position is referenced.
    pub map_id: String,
    /// Additional information on the map.
    pub map_description: Option<String>,
}

impl NodePosition {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if let Some(theta) = self.theta {
            check_theta(&format!("{}.theta", path), theta)?;
        }
        if let Some(deviation) = self.allowed_deviation_xy {
            check_non_negative(&format!("{}.allowedDeviationXy", path), deviation)?;
        }
        if let Some(deviation) = self.allowed_deviation_theta {
            check_range(
                &format!("{}.allowedDeviationTheta", path),
                deviation,
                -DEVIATION_THETA_LIMIT,
                DEVIATION_THETA_LIMIT,
            )?;
        }
        Ok(())
    }
}

/// Current position of the AGV on the map.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgvPosition {
    /// X position on the map in reference to the map coordinate system (in m).
    pub x: f64,
    /// Y position on the map in reference to the map coordinate system (in m).
    pub y: f64,
    /// False if the AGV does not know its position, e.g. after booting.
    pub position_initialized: bool,
    /// Orientation of the AGV (in rad). Range: [-pi, pi].
    pub theta: f64,
    /// Unique identification of the map in which the position is referenced.
    pub map_id: String,
    /// Vehicle-specific range in which the position is located with a defined probability.
    pub deviation_range: Option<f64>,
    /// Additional information on the map.
    pub map_description: Option<String>,
    /// Describes the quality of the localization. 0.0 means unknown position, 1.0 means sure position. Optional for vehicles that cannot estimate their localization score.
    pub localization_score: Option<f64>,
}

impl AgvPosition {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        check_theta(&format!("{}.theta", path), self.theta)?;
        if let Some(score) = self.localization_score {
            check_range(&format!("{}.localizationScore", path), score, 0.0, 1.0)?;
        }
        Ok(())
    }
}

/// The AGV velocity in vehicle coordinates.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Velocity {
    /// The AGV velocity in its x direction (in m/s).
    pub vx: Option<f64>,
    /// The AGV velocity in its y direction (in m/s).
    pub vy: Option<f64>,
    /// The AGV turning speed around its z axis (in rad/s).
    pub omega: Option<f64>,
}

/// NURBS curve defining the path between two nodes of an edge.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    /// Defines the number of control points that influence any given point on the curve. Increasing the degree increases continuity. If not defined, the default value is 1.
    pub degree: u32,
    /// Sequence of parameter values that determines where and how the control points affect the NURBS curve. Has size of controlPoints + degree + 1.
    pub knot_vector: Vec<f64>,
    /// List of control points defining the NURBS, including the start and end point.
    pub control_points: Vec<ControlPoint>,
}

impl Trajectory {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if self.degree < 1 {
            return Err(ValidationError::DegreeTooSmall {
                field: format!("{}.degree", path),
                degree: self.degree,
            });
        }
        let expected = self.control_points.len() + self.degree as usize + 1;
        if self.knot_vector.len() != expected {
            return Err(ValidationError::KnotVectorMismatch {
                field: format!("{}.knotVector", path),
                expected,
                actual: self.knot_vector.len(),
            });
        }
        for (i, control_point) in self.control_points.iter().enumerate() {
            control_point.validate(&format!("{}.controlPoints[{}]", path, i))?;
        }
        Ok(())
    }
}

/// Control point of a NURBS trajectory.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPoint {
    /// X coordinate described in the world coordinate system.
    pub x: f64,
    /// Y coordinate described in the world coordinate system.
    pub y: f64,
    /// The weight with which this control point pulls on the curve. When not defined, the default is 1.0.
    pub weight: Option<f64>,
    /// Orientation of the AGV on this position of the curve (in rad). Range: [-pi, pi].
    pub orientation: Option<f64>,
}

impl ControlPoint {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if let Some(weight) = self.weight {
            check_non_negative(&format!("{}.weight", path), weight)?;
        }
        if let Some(orientation) = self.orientation {
            check_theta(&format!("{}.orientation", path), orientation)?;
        }
        Ok(())
    }
}

/// Load that is currently handled by the AGV.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    /// Unique identification number of the load, e.g. barcode or RFID. Empty field if the AGV can identify the load but did not identify it yet.
    pub load_id: Option<String>,
    /// Type of load.
    pub load_type: Option<String>,
    /// Indicates which load handling/load carrying unit of the AGV is used, e.g. in case the AGV has multiple spots/positions to carry loads.
    pub load_position: Option<String>,
    /// Point of reference for the location of the bounding box.
    pub bounding_box_reference: Option<BoundingBoxReference>,
    /// Dimensions of the load's bounding box (in m).
    pub load_dimensions: Option<LoadDimensions>,
    /// Absolute weight of the load measured (in kg).
    pub weight: Option<f64>,
}

impl Load {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if let Some(weight) = self.weight {
            check_non_negative(&format!("{}.weight", path), weight)?;
        }
        if let Some(reference) = &self.bounding_box_reference {
            if let Some(theta) = reference.theta {
                check_theta(&format!("{}.boundingBoxReference.theta", path), theta)?;
            }
        }
        Ok(())
    }
}

/// Point of reference for the location of the bounding box. The point of reference is always the center of the bounding box's bottom surface (at height = 0) and is described in coordinates of the AGV coordinate system.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBoxReference {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Orientation of the load's bounding box. Important e.g. for tugger trains.
    pub theta: Option<f64>,
}

/// Dimensions of the load's bounding box (in m).
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadDimensions {
    /// Absolute length of the load's bounding box (in m).
    pub length: f64,
    /// Absolute width of the load's bounding box (in m).
    pub width: f64,
    /// Absolute height of the load's bounding box (in m). Optional, set value only if known.
    pub height: Option<f64>,
}

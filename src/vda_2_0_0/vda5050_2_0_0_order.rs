use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{check_theta, ValidationError};
use crate::vda5050_common::{HeaderId, NodePosition, Trajectory};
use crate::vda_2_0_0::vda5050_2_0_0_action::Action;
use crate::VdaMessage;

/// An order to be communicated from master control to the AGV.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// header_id of the message. The header_id is defined per topic and incremented by 1 with each sent (but not necessarily received) message.
    pub header_id: HeaderId,
    /// Timestamp (ISO8601, UTC); YYYY-MM-DDTHH:mm:ss.ssZ; e.g. 2017-04-15T11:40:03.12Z
    pub timestamp: String,
    /// Version of the protocol [Major].[Minor].[Patch], e.g. 1.3.2
    pub version: String,
    /// Manufacturer of the AGV
    pub manufacturer: String,
    /// Serial number of the AGV
    pub serial_number: String,
    /// Order identification. This is to be used to identify multiple order messages that belong to the same order.
    pub order_id: String,
    /// Order update identification. Is unique per orderId. If an order update is rejected, this field is to be passed in the rejection message.
    pub order_update_id: u32,
    /// Unique identifier of the zone set that the AGV has to use for navigation or that was used by master control for planning.
    pub zone_set_id: Option<String>,
    /// Array of nodes to be traversed for fulfilling the order. One node is enough for a valid order. Leave edge list empty for that case.
    pub nodes: Vec<Node>,
    /// Array of edges to be traversed for fulfilling the order. May be empty in case only one node is used for an order.
    pub edges: Vec<Edge>,
}

impl VdaMessage for Order {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.nodes.is_empty() {
            return Err(ValidationError::EmptyNodes);
        }
        let node_ids: HashSet<&str> = self.nodes.iter().map(|node| node.node_id.as_str()).collect();
        for (i, node) in self.nodes.iter().enumerate() {
            node.validate(&format!("nodes[{}]", i))?;
        }
        for (i, edge) in self.edges.iter().enumerate() {
            edge.validate(&format!("edges[{}]", i), &node_ids)?;
        }
        Ok(())
    }
}

/// Node Object of an order.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique node identification. For example: pumpenhaus_1, MONTAGE
    pub node_id: String,
    /// Number to track the sequence of nodes and edges in an order and to simplify order updates. The main purpose is to distinguish between a node which is passed more than once within one orderId.
    pub sequence_id: u32,
    /// Additional information on the node.
    pub node_description: Option<String>,
    /// True indicates that the node is part of the base. False indicates that the node is part of the horizon.
    pub released: bool,
    /// Node position. Optional for vehicles that do not require the node position (e.g. line-guided vehicles).
    pub node_position: Option<NodePosition>,
    /// Array of actions that are to be executed on the node. Their sequence in the list governs their sequence of execution.
    pub actions: Vec<Action>,
}

impl Node {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if let Some(position) = &self.node_position {
            position.validate(&format!("{}.nodePosition", path))?;
        }
        Ok(())
    }
}

/// Directional connection between two nodes.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique edge identification.
    pub edge_id: String,
    /// Number to track the sequence of nodes and edges in an order and to simplify order updates. The variable sequenceId runs across all nodes and edges of the same order and is reset when a new orderId is issued.
    pub sequence_id: u32,
    /// Additional information on the edge.
    pub edge_description: Option<String>,
    /// True indicates that the edge is part of the base. False indicates that the edge is part of the horizon.
    pub released: bool,
    /// The nodeId of the start node.
    pub start_node_id: String,
    /// The nodeId of the end node.
    pub end_node_id: String,
    /// Permitted maximum speed on the edge (in m/s). Speed is defined by the fastest measurement of the vehicle.
    pub max_speed: Option<f64>,
    /// Permitted maximum height of the vehicle, including the load, on the edge (in m).
    pub max_height: Option<f64>,
    /// Permitted minimal height of the load handling device on the edge (in m).
    pub min_height: Option<f64>,
    /// Orientation of the AGV on the edge (in rad). Range: [-pi, pi].
    pub orientation: Option<f64>,
    /// Enum GLOBAL or TANGENTIAL: defines if the orientation is relative to the global project coordinate system or tangential to the edge. If not defined, the default value is TANGENTIAL.
    pub orientation_type: Option<OrientationType>,
    /// Sets direction at junctions for line-guided or wire-guided vehicles, to be defined initially (vehicle-individual). Examples: left, right, straight.
    pub direction: Option<String>,
    /// True: rotation is allowed on the edge. False: rotation is not allowed on the edge. Optional: No limit, if not set.
    pub rotation_allowed: Option<bool>,
    /// Maximum rotation speed (in rad/s). Optional: No limit, if not set.
    pub max_rotation_speed: Option<f64>,
    /// Distance of the path from startNode to endNode (in m). Optional: This value is used by line-guided AGVs to decrease their speed before reaching a stop position.
    pub length: Option<f64>,
    /// Trajectory JSON object for this edge as NURBS. Defines the curve on which the AGV should move between startNode and endNode. Optional: Can be omitted if an AGV cannot process trajectories or if an AGV plans its own trajectory.
    pub trajectory: Option<Trajectory>,
    /// Array of actions to be executed on the edge. An action triggered by an edge will only be active for the time that the AGV is traversing the edge which triggered the action.
    pub actions: Vec<Action>,
}

impl Edge {
    /// The orientation type of this edge, falling back to the protocol default.
    pub fn orientation_type(&self) -> OrientationType {
        self.orientation_type.unwrap_or(OrientationType::Tangential)
    }

    pub(crate) fn validate(
        &self,
        path: &str,
        node_ids: &HashSet<&str>,
    ) -> Result<(), ValidationError> {
        for (field, node_id) in [
            ("startNodeId", &self.start_node_id),
            ("endNodeId", &self.end_node_id),
        ] {
            if !node_ids.contains(node_id.as_str()) {
                return Err(ValidationError::UnknownNodeReference {
                    field: format!("{}.{}", path, field),
                    node_id: node_id.clone(),
                });
            }
        }
        if let Some(orientation) = self.orientation {
            check_theta(&format!("{}.orientation", path), orientation)?;
        }
        if let Some(trajectory) = &self.trajectory {
            trajectory.validate(&format!("{}.trajectory", path))?;
        }
        Ok(())
    }
}

/// Defines whether an edge orientation is given in the global project coordinate system or tangential to the edge.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrientationType {
    /// Relative to the global project specific map coordinate system.
    Global,
    /// The tangential interpolation of the orientation from the start to the end node.
    Tangential,
}

use serde::{Deserialize, Serialize};

use crate::error::{check_non_negative, check_range, ValidationError};
use crate::vda5050_common::{AgvPosition, HeaderId, Load, NodePosition, Trajectory, Velocity};
use crate::VdaMessage;

/// All encompassing state of the AGV. The state message is sent on events (e.g. receiving an order, arriving at a node) and cyclically in between.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct State {
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
    /// Unique order identification of the current order or the previous finished order. The orderId is kept until a new order is received. Empty string if no previous orderId is available.
    pub order_id: String,
    /// Order update identification to identify that an order update has been accepted by the AGV. 0 if no previous orderUpdateId is available.
    pub order_update_id: u32,
    /// Unique identifier of the zone set that the AGV currently uses for path planning. Must be the same as the one used in the order (or the order update).
    pub zone_set_id: Option<String>,
    /// nodeId of the last reached node or, if the AGV is currently on a node, the current node. Empty string if no lastNodeId is available.
    pub last_node_id: String,
    /// sequenceId of the last reached node or, if the AGV is currently on a node, the current node. 0 if no lastNodeSequenceId is available.
    pub last_node_sequence_id: u32,
    /// True indicates that the AGV is driving and/or rotating. Other movements of the AGV (e.g. lift movements) are not included here.
    pub driving: bool,
    /// True indicates that the AGV is currently in a paused state, either because of the push of a physical button on the AGV or because of an instantAction. The AGV can resume the order.
    pub paused: Option<bool>,
    /// True indicates that the AGV is almost at the end of the base and will reduce speed if no new base is transmitted. Trigger for master control to send a new base.
    pub new_base_request: Option<bool>,
    /// Used by line-guided vehicles to indicate the distance it has been driving past the lastNodeId (in m).
    pub distance_since_last_node: Option<f64>,
    /// Current operating mode of the AGV.
    pub operating_mode: OperatingMode,
    /// Array of nodeState objects that need to be traversed for fulfilling the order. Empty list if the AGV is idle.
    pub node_states: Vec<NodeState>,
    /// Array of edgeState objects that need to be traversed for fulfilling the order. Empty list if the AGV is idle.
    pub edge_states: Vec<EdgeState>,
    /// Current position of the AGV on the map. Optional: can only be omitted for AGVs without the capability to localize themselves, e.g. line-guided AGVs.
    pub agv_position: Option<AgvPosition>,
    /// The AGV velocity in vehicle coordinates.
    pub velocity: Option<Velocity>,
    /// Array of loads that are currently handled by the AGV. Optional: if the AGV cannot determine load state, leave the field out of the state.
    pub loads: Option<Vec<Load>>,
    /// Array of actionState objects of all actions of the current or previous order. An action state is kept until a new order is received.
    pub action_states: Vec<ActionState>,
    /// Contains all battery-related information.
    pub battery_state: BatteryState,
    /// Array of error objects. Empty array if there are no errors.
    pub errors: Vec<Error>,
    /// Array of information objects. An empty array indicates that the AGV has no information. Used for visualization or debugging, must not be used for logic in master control.
    pub information: Option<Vec<Information>>,
    /// Object that holds information about the safety status.
    pub safety_state: SafetyState,
}

impl VdaMessage for State {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(position) = &self.agv_position {
            position.validate("agvPosition")?;
        }
        if let Some(loads) = &self.loads {
            for (i, load) in loads.iter().enumerate() {
                load.validate(&format!("loads[{}]", i))?;
            }
        }
        for (i, node_state) in self.node_states.iter().enumerate() {
            if let Some(position) = &node_state.node_position {
                position.validate(&format!("nodeStates[{}].nodePosition", i))?;
            }
        }
        for (i, edge_state) in self.edge_states.iter().enumerate() {
            if let Some(trajectory) = &edge_state.trajectory {
                trajectory.validate(&format!("edgeStates[{}].trajectory", i))?;
            }
        }
        self.battery_state.validate("batteryState")?;
        Ok(())
    }
}

/// State of a node the AGV still has to traverse.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    /// Unique node identification.
    pub node_id: String,
    /// sequenceId to discern multiple nodes with same nodeId.
    pub sequence_id: u32,
    /// True indicates that the node is part of the base. False indicates that the node is part of the horizon.
    pub released: bool,
    /// Additional information on the node.
    pub node_description: Option<String>,
    /// Node position. Optional: master control has this information, so it is only required for visualization purposes.
    pub node_position: Option<NodePosition>,
}

/// State of an edge the AGV still has to traverse.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeState {
    /// Unique edge identification.
    pub edge_id: String,
    /// sequenceId to discern multiple edges with same edgeId.
    pub sequence_id: u32,
    /// True indicates that the edge is part of the base. False indicates that the edge is part of the horizon.
    pub released: bool,
    /// Additional information on the edge.
    pub edge_description: Option<String>,
    /// The trajectory of the edge. Only to be communicated if the trajectory is different from the one in the order (e.g. calculated by the AGV).
    pub trajectory: Option<Trajectory>,
}

/// State of an action of the current or previous order.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionState {
    /// Unique actionId, e.g. blink_123jdaimoim234
    pub action_id: String,
    /// actionType of the action. Optional: only for informational or visualization purposes. Order knows the type.
    pub action_type: Option<String>,
    /// Additional information on the current action.
    pub action_description: Option<String>,
    /// Current status of the action.
    pub action_status: ActionStatus,
    /// Description of the result, e.g. the result of a RFID-read. Errors will be transmitted in errors.
    pub result_description: Option<String>,
}

/// Current status of an action.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionStatus {
    /// Action was received by the AGV but the node where it triggers was not yet reached or the trigger of an instant action was not yet fulfilled.
    Waiting,
    /// Action was triggered, preparation is in progress.
    Initializing,
    /// The action is running.
    Running,
    /// The action is finished. A result is reported via the resultDescription.
    Finished,
    /// Action could not be finished for whatever reason.
    Failed,
}

/// Current operating mode of the AGV.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperatingMode {
    /// AGV is under full control of master control. AGV drives and executes actions based on orders from master control.
    Automatic,
    /// AGV is under control of master control. AGV drives and executes actions based on orders from master control, but the maximum speed is limited by the HMI.
    Semiautomatic,
    /// Master control is not in control of the AGV. Supervisor doesn't send driving orders or actions to the AGV. HMI can be used to control the steering and velocity and handling device of the AGV.
    Manual,
    /// Master control is not in control of the AGV. Master control sends only monitoring related topics. AGV is in service mode.
    Service,
    /// Master control is not in control of the AGV. Supervisor doesn't send driving orders or actions to the AGV. The AGV is being taught, e.g. mapping is done by a master-control-initiated desire.
    Teachin,
}

/// Contains all battery-related information.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatteryState {
    /// State of charge: if the AGV only provides values for good or bad battery levels, these will be indicated as 20% (bad) or 80% (good).
    pub battery_charge: f64,
    /// Battery voltage (in V).
    pub battery_voltage: Option<f64>,
    /// State of health of the battery (in %). Range: [0, 100].
    pub battery_health: Option<f64>,
    /// True: charging in progress. False: AGV is currently not charging.
    pub charging: bool,
    /// Estimated reach with current state of charge (in m).
    pub reach: Option<f64>,
}

impl BatteryState {
    pub(crate) fn validate(&self, path: &str) -> Result<(), ValidationError> {
        if let Some(health) = self.battery_health {
            check_range(&format!("{}.batteryHealth", path), health, 0.0, 100.0)?;
        }
        if let Some(reach) = self.reach {
            check_non_negative(&format!("{}.reach", path), reach)?;
        }
        Ok(())
    }
}

/// An error object describing an AGV-reported operational fault. These are data carried inside the state, not decode failures.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Type/name of the error.
    pub error_type: String,
    /// Array of references to identify the source of the error (e.g. headerId, orderId, actionId).
    pub error_references: Option<Vec<ErrorReference>>,
    /// Error description.
    pub error_description: Option<String>,
    /// WARNING: AGV is ready to start (e.g. maintenance cycle expiration warning). FATAL: AGV is not in running condition, user intervention required (e.g. laser scanner is contaminated).
    pub error_level: ErrorLevel,
}

/// Reference to identify the source of an error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReference {
    /// References the type of reference (e.g. headerId, orderId, actionId).
    pub reference_key: String,
    /// References the value which belongs to the reference key.
    pub reference_value: String,
}

/// Severity of an error reported by the AGV.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorLevel {
    /// AGV is ready to start (e.g. maintenance cycle expiration warning).
    Warning,
    /// AGV is not in running condition, user intervention required.
    Fatal,
}

/// An information object. Used for visualization or debugging, must not be used for logic in master control.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Information {
    /// Type/name of the information.
    pub info_type: String,
    /// Array of references to identify the source of the information.
    pub info_references: Option<Vec<InfoReference>>,
    /// Information description.
    pub info_description: Option<String>,
    /// DEBUG: used for debugging. INFO: used for visualization.
    pub info_level: InfoLevel,
}

/// Reference to identify the source of an information object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InfoReference {
    /// References the type of reference (e.g. headerId, orderId, actionId).
    pub reference_key: String,
    /// References the value which belongs to the reference key.
    pub reference_value: String,
}

/// Severity of an information object.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum InfoLevel {
    /// Used for debugging.
    Debug,
    /// Used for visualization.
    Info,
}

/// Object that holds information about the safety status.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyState {
    /// Acknowledge type of the e-stop.
    pub e_stop: EStop,
    /// Protective field violation. True: field is violated. False: field is not violated.
    pub field_violation: bool,
}

/// Acknowledge type of the e-stop.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EStop {
    /// Auto-acknowledgeable e-stop is activated, e.g. by bumper or protective field.
    Autoack,
    /// E-stop has to be acknowledged manually at the vehicle.
    Manual,
    /// Facility e-stop has to be acknowledged remotely.
    Remote,
    /// No e-stop is activated.
    None,
}

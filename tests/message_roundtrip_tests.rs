use std::collections::BTreeMap;

use vda5050_types::{
    utils,
    vda5050_common::{
        AgvPosition, BoundingBoxReference, ControlPoint, Load, LoadDimensions, NodePosition,
        Trajectory, Velocity,
    },
    vda_2_0_0::{
        vda5050_2_0_0_action::{Action, ActionParameter, ActionParameterValue, BlockingType},
        vda5050_2_0_0_connection::{Connection, ConnectionState},
        vda5050_2_0_0_instant_actions::InstantActions,
        vda5050_2_0_0_order::{Edge, Node, Order, OrientationType},
        vda5050_2_0_0_state::{
            ActionState, ActionStatus, BatteryState, EStop, EdgeState, Error, ErrorLevel,
            ErrorReference, InfoLevel, Information, NodeState, OperatingMode, SafetyState, State,
        },
        vda5050_2_0_0_visualization::Visualization,
    },
    VdaMessage,
};

fn create_test_position(x: f64, y: f64) -> NodePosition {
    NodePosition {
        x,
        y,
        theta: Some(1.57),
        allowed_deviation_xy: Some(0.1),
        allowed_deviation_theta: Some(0.1),
        map_id: "test_map".to_string(),
        map_description: None,
    }
}

fn create_test_trajectory() -> Trajectory {
    Trajectory {
        degree: 1,
        knot_vector: vec![0.0, 0.0, 1.0, 1.0],
        control_points: vec![
            ControlPoint {
                x: 10.5,
                y: 20.3,
                weight: Some(1.0),
                orientation: None,
            },
            ControlPoint {
                x: 15.0,
                y: 25.0,
                weight: None,
                orientation: Some(0.5),
            },
        ],
    }
}

fn create_test_order() -> Order {
    Order {
        header_id: 1,
        timestamp: utils::get_timestamp(),
        version: "2.0.0".to_string(),
        manufacturer: "TEST".to_string(),
        serial_number: "TEST-AGV-001".to_string(),
        order_id: "order_001".to_string(),
        order_update_id: 0,
        zone_set_id: None,
        nodes: vec![
            Node {
                node_id: "node_001".to_string(),
                sequence_id: 0,
                node_description: Some("Start node".to_string()),
                released: true,
                node_position: Some(create_test_position(10.5, 20.3)),
                actions: vec![Action {
                    action_type: "pick".to_string(),
                    action_id: "pick_001".to_string(),
                    action_description: None,
                    blocking_type: BlockingType::Hard,
                    action_parameters: Some(vec![
                        ActionParameter {
                            key: "duration".to_string(),
                            value: ActionParameterValue::Float(103.2),
                        },
                        ActionParameter {
                            key: "direction".to_string(),
                            value: ActionParameterValue::Str("left".to_string()),
                        },
                        ActionParameter {
                            key: "signal".to_string(),
                            value: ActionParameterValue::Bool(true),
                        },
                        ActionParameter {
                            key: "stations".to_string(),
                            value: ActionParameterValue::Array(vec![
                                ActionParameterValue::Int(1),
                                ActionParameterValue::Int(2),
                                ActionParameterValue::Int(3),
                            ]),
                        },
                    ]),
                }],
            },
            Node {
                node_id: "node_002".to_string(),
                sequence_id: 2,
                node_description: None,
                released: false,
                node_position: Some(create_test_position(15.0, 25.0)),
                actions: vec![],
            },
        ],
        edges: vec![Edge {
            edge_id: "edge_001".to_string(),
            sequence_id: 1,
            edge_description: Some("Path from start to end".to_string()),
            released: true,
            start_node_id: "node_001".to_string(),
            end_node_id: "node_002".to_string(),
            max_speed: Some(0.5),
            max_height: None,
            min_height: None,
            orientation: Some(-1.2),
            orientation_type: None,
            direction: Some("straight".to_string()),
            rotation_allowed: Some(true),
            max_rotation_speed: None,
            length: Some(6.5),
            trajectory: Some(create_test_trajectory()),
            actions: vec![],
        }],
    }
}

fn create_test_state() -> State {
    State {
        header_id: 7,
        timestamp: utils::get_timestamp(),
        version: "2.0.0".to_string(),
        manufacturer: "TEST".to_string(),
        serial_number: "TEST-AGV-001".to_string(),
        order_id: "order_001".to_string(),
        order_update_id: 0,
        zone_set_id: None,
        last_node_id: "node_001".to_string(),
        last_node_sequence_id: 0,
        driving: true,
        paused: Some(false),
        new_base_request: Some(true),
        distance_since_last_node: Some(0.4),
        operating_mode: OperatingMode::Automatic,
        node_states: vec![NodeState {
            node_id: "node_002".to_string(),
            sequence_id: 2,
            released: false,
            node_description: None,
            node_position: Some(create_test_position(15.0, 25.0)),
        }],
        edge_states: vec![EdgeState {
            edge_id: "edge_001".to_string(),
            sequence_id: 1,
            released: true,
            edge_description: None,
            trajectory: Some(create_test_trajectory()),
        }],
        agv_position: Some(AgvPosition {
            x: 10.6,
            y: 20.4,
            position_initialized: true,
            theta: 1.2,
            map_id: "test_map".to_string(),
            deviation_range: None,
            map_description: None,
            localization_score: Some(0.95),
        }),
        velocity: Some(Velocity {
            vx: Some(0.4),
            vy: None,
            omega: Some(0.02),
        }),
        loads: Some(vec![Load {
            load_id: Some("pallet_42".to_string()),
            load_type: Some("EPAL".to_string()),
            load_position: Some("front".to_string()),
            bounding_box_reference: Some(BoundingBoxReference {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                theta: Some(0.0),
            }),
            load_dimensions: Some(LoadDimensions {
                length: 1.2,
                width: 0.8,
                height: Some(1.0),
            }),
            weight: Some(120.0),
        }]),
        action_states: vec![ActionState {
            action_id: "pick_001".to_string(),
            action_type: Some("pick".to_string()),
            action_description: None,
            action_status: ActionStatus::Running,
            result_description: None,
        }],
        battery_state: BatteryState {
            battery_charge: 78.0,
            battery_voltage: Some(47.9),
            battery_health: Some(92.0),
            charging: false,
            reach: Some(4500.0),
        },
        errors: vec![Error {
            error_type: "bumperViolation".to_string(),
            error_references: Some(vec![ErrorReference {
                reference_key: "actionId".to_string(),
                reference_value: "pick_001".to_string(),
            }]),
            error_description: Some("Bumper pressed during pick".to_string()),
            error_level: ErrorLevel::Warning,
        }],
        information: Some(vec![Information {
            info_type: "debugPose".to_string(),
            info_references: None,
            info_description: None,
            info_level: InfoLevel::Debug,
        }]),
        safety_state: SafetyState {
            e_stop: EStop::None,
            field_violation: false,
        },
    }
}

#[test]
fn test_order_round_trip() {
    let order = create_test_order();
    let encoded = order.to_json_string().unwrap();
    let decoded = Order::from_json_str(&encoded).unwrap();
    assert_eq!(order, decoded);
}

#[test]
fn test_state_round_trip() {
    let state = create_test_state();
    let encoded = state.to_json_string().unwrap();
    let decoded = State::from_json_str(&encoded).unwrap();
    assert_eq!(state, decoded);
}

#[test]
fn test_order_wire_field_names() {
    let order = create_test_order();
    let encoded = order.to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

    assert_eq!(value["headerId"], 1);
    assert_eq!(value["orderUpdateId"], 0);
    assert_eq!(value["serialNumber"], "TEST-AGV-001");
    assert_eq!(value["nodes"][0]["nodePosition"]["allowedDeviationXy"], 0.1);
    assert_eq!(value["nodes"][0]["actions"][0]["blockingType"], "HARD");
    assert_eq!(value["edges"][0]["startNodeId"], "node_001");
    assert_eq!(value["edges"][0]["trajectory"]["knotVector"][2], 1.0);
    // Absent optionals are omitted, not encoded as null.
    assert!(value.get("zoneSetId").is_none());
    assert!(value["edges"][0].get("maxHeight").is_none());
}

#[test]
fn test_state_wire_enum_spellings() {
    let state = create_test_state();
    let value: serde_json::Value =
        serde_json::from_str(&state.to_json_string().unwrap()).unwrap();

    assert_eq!(value["operatingMode"], "AUTOMATIC");
    assert_eq!(value["actionStates"][0]["actionStatus"], "RUNNING");
    assert_eq!(value["errors"][0]["errorLevel"], "WARNING");
    assert_eq!(value["information"][0]["infoLevel"], "DEBUG");
    assert_eq!(value["safetyState"]["eStop"], "NONE");
}

#[test]
fn test_operating_mode_spellings() {
    assert_eq!(
        serde_json::to_string(&OperatingMode::Semiautomatic).unwrap(),
        "\"SEMIAUTOMATIC\""
    );
    assert_eq!(
        serde_json::to_string(&OperatingMode::Teachin).unwrap(),
        "\"TEACHIN\""
    );
    assert_eq!(
        serde_json::to_string(&EStop::Autoack).unwrap(),
        "\"AUTOACK\""
    );
}

#[test]
fn test_connection_broken_round_trip() {
    let payload = r#"{
        "headerId": 3,
        "timestamp": "2017-04-15T11:40:03.12Z",
        "version": "2.0.0",
        "manufacturer": "TEST",
        "serialNumber": "TEST-AGV-001",
        "connectionState": "CONNECTIONBROKEN"
    }"#;

    let connection = Connection::from_json_str(payload).unwrap();
    assert_eq!(connection.connection_state, ConnectionState::ConnectionBroken);

    let re_encoded = connection.to_json_string().unwrap();
    let original: serde_json::Value = serde_json::from_str(payload).unwrap();
    let round_tripped: serde_json::Value = serde_json::from_str(&re_encoded).unwrap();
    assert_eq!(original, round_tripped);
}

#[test]
fn test_visualization_optional_header_absent() {
    let payload = r#"{
        "agvPosition": {
            "x": 1.0,
            "y": 2.0,
            "positionInitialized": true,
            "theta": 0.0,
            "mapId": "test_map"
        }
    }"#;

    let visualization = Visualization::from_json_str(payload).unwrap();
    assert!(visualization.header_id.is_none());
    assert!(visualization.timestamp.is_none());
    assert!(visualization.velocity.is_none());

    let position = visualization.agv_position.as_ref().unwrap();
    assert_eq!(position.x, 1.0);
    assert!(position.localization_score.is_none());

    // Omitted fields must stay omitted when re-encoding.
    let value: serde_json::Value =
        serde_json::from_str(&visualization.to_json_string().unwrap()).unwrap();
    assert!(value.get("headerId").is_none());
    assert!(value.get("velocity").is_none());
}

#[test]
fn test_instant_actions_round_trip() {
    let instant_actions = InstantActions {
        header_id: Some(12),
        timestamp: Some(utils::get_timestamp()),
        version: Some("2.0.0".to_string()),
        manufacturer: Some("TEST".to_string()),
        serial_number: Some("TEST-AGV-001".to_string()),
        actions: vec![Action {
            action_type: "cancelOrder".to_string(),
            action_id: "cancel_001".to_string(),
            action_description: None,
            blocking_type: BlockingType::Hard,
            action_parameters: None,
        }],
    };

    let encoded = instant_actions.to_json_string().unwrap();
    let decoded = InstantActions::from_json_str(&encoded).unwrap();
    assert_eq!(instant_actions, decoded);
}

#[test]
fn test_action_new_generates_unique_ids() {
    let first = Action::new("startPause", BlockingType::Hard);
    let second = Action::new("startPause", BlockingType::Hard);

    assert_eq!(first.action_type, "startPause");
    assert_ne!(first.action_id, second.action_id);
    assert!(first.action_parameters.is_none());
}

#[test]
fn test_action_parameter_value_shapes() {
    let payload = r#"{
        "actions": [{
            "actionType": "custom",
            "actionId": "custom_001",
            "blockingType": "NONE",
            "actionParameters": [
                {"key": "empty", "value": null},
                {"key": "flag", "value": false},
                {"key": "count", "value": 42},
                {"key": "duration", "value": 103.2},
                {"key": "name", "value": "left"},
                {"key": "list", "value": [1, "two", true]},
                {"key": "map", "value": {"a": 1, "b": "x"}}
            ]
        }]
    }"#;

    let instant_actions = InstantActions::from_json_str(payload).unwrap();
    let params = instant_actions.actions[0].action_parameters.as_ref().unwrap();

    assert_eq!(params[0].value, ActionParameterValue::Null);
    assert_eq!(params[1].value, ActionParameterValue::Bool(false));
    assert_eq!(params[2].value, ActionParameterValue::Int(42));
    assert_eq!(params[3].value, ActionParameterValue::Float(103.2));
    assert_eq!(params[4].value, ActionParameterValue::Str("left".to_string()));
    assert_eq!(
        params[5].value,
        ActionParameterValue::Array(vec![
            ActionParameterValue::Int(1),
            ActionParameterValue::Str("two".to_string()),
            ActionParameterValue::Bool(true),
        ])
    );
    let expected_map: BTreeMap<String, ActionParameterValue> = [
        ("a".to_string(), ActionParameterValue::Int(1)),
        ("b".to_string(), ActionParameterValue::Str("x".to_string())),
    ]
    .into_iter()
    .collect();
    assert_eq!(params[6].value, ActionParameterValue::Map(expected_map));

    // Integers and floats re-encode exactly as received.
    let encoded = instant_actions.to_json_string().unwrap();
    let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(value["actions"][0]["actionParameters"][2]["value"], 42);
    assert_eq!(value["actions"][0]["actionParameters"][3]["value"], 103.2);
}

#[test]
fn test_edge_orientation_type_default() {
    let order = create_test_order();
    assert_eq!(order.edges[0].orientation_type(), OrientationType::Tangential);

    let mut edge = order.edges[0].clone();
    edge.orientation_type = Some(OrientationType::Global);
    assert_eq!(edge.orientation_type(), OrientationType::Global);
}

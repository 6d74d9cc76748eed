pub mod vda5050_2_0_0_action;
pub mod vda5050_2_0_0_connection;
pub mod vda5050_2_0_0_instant_actions;
pub mod vda5050_2_0_0_order;
pub mod vda5050_2_0_0_state;
pub mod vda5050_2_0_0_visualization;

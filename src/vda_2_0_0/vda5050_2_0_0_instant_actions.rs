use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::vda5050_common::HeaderId;
use crate::vda_2_0_0::vda5050_2_0_0_action::Action;
use crate::VdaMessage;

/// Instant actions that the AGV is to execute as soon as they arrive, bypassing the
/// order sequencing. Header fields are optional on this topic.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstantActions {
    /// header_id of the message. The header_id is defined per topic and incremented by 1 with each sent (but not necessarily received) message.
    pub header_id: Option<HeaderId>,
    /// Timestamp (ISO8601, UTC); YYYY-MM-DDTHH:mm:ss.ssZ; e.g. 2017-04-15T11:40:03.12Z
    pub timestamp: Option<String>,
    /// Version of the protocol [Major].[Minor].[Patch], e.g. 1.3.2
    pub version: Option<String>,
    /// Manufacturer of the AGV
    pub manufacturer: Option<String>,
    /// Serial number of the AGV
    pub serial_number: Option<String>,
    /// Array of actions that need to be performed immediately and are not part of the regular order.
    pub actions: Vec<Action>,
}

impl VdaMessage for InstantActions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

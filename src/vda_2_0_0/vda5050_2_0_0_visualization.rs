use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::vda5050_common::{AgvPosition, HeaderId, Velocity};
use crate::VdaMessage;

/// AGV position and/or velocity for visualization purposes. Can be published at a
/// higher rate if wanted. Since bandwidth may be expensive depending on the update
/// rate for this topic, all fields are optional.
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
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
    /// Current position of the AGV on the map.
    pub agv_position: Option<AgvPosition>,
    /// The AGV velocity in vehicle coordinates.
    pub velocity: Option<Velocity>,
}

impl VdaMessage for Visualization {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(position) = &self.agv_position {
            position.validate("agvPosition")?;
        }
        Ok(())
    }
}

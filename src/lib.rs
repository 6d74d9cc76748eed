//! VDA5050 message types: the data contracts exchanged between a fleet
//! master-control system and AGVs over a publish/subscribe transport.
//!
//! The crate defines the five message types — Order, State, Visualization,
//! Connection, InstantActions — together with their nested structures, enforces
//! the field-level range constraints of the protocol and (de)serializes each
//! message to its JSON wire form. Transport concerns (broker connection, topic
//! routing, retries) are left to the integrating layer.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod error;
pub mod utils;
pub mod vda5050_common;
pub mod vda_2_0_0;

use crate::error::{DecodeError, ValidationError};

/// Common surface of the five top-level protocol messages.
///
/// A message is either fully valid or not created: `from_json_str` rejects a
/// payload that is malformed JSON, misses a required field, carries an enum
/// string outside its defined set, or violates a documented range constraint.
pub trait VdaMessage: Serialize + DeserializeOwned {
    /// Check every documented field constraint, recursing into nested structures.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Decode a message from its JSON wire form and validate it.
    fn from_json_str(payload: &str) -> Result<Self, DecodeError> {
        let message: Self = serde_json::from_str(payload)?;
        message.validate()?;
        Ok(message)
    }

    /// Encode the message to its JSON wire form. Optional fields that are absent
    /// are omitted from the encoding.
    fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

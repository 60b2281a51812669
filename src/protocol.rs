use crate::game::input::{AxisKey, SteerIntent};
use crate::game::types::{WorldEvent, WorldSnapshot};
use serde::{Deserialize, Serialize};

/// Line-delimited JSON as it arrives from the input source.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum JsonClientMessage {
  #[serde(rename = "input")]
  Input {
    dx: Option<f64>,
    dy: Option<f64>,
    active: Option<bool>,
  },
  #[serde(rename = "key")]
  Key { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientMessage {
  Steer(SteerIntent),
  Key(AxisKey),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ServerMessage<'a> {
  #[serde(rename = "state")]
  State(&'a WorldSnapshot),
  #[serde(rename = "event")]
  Event(&'a WorldEvent),
}

/// Returns `None` for anything that is not a recognised message. Missing
/// joystick fields read as a released stick.
pub fn decode_client_message(text: &str) -> Option<ClientMessage> {
  let message = serde_json::from_str::<JsonClientMessage>(text).ok()?;
  match message {
    JsonClientMessage::Input { dx, dy, active } => Some(ClientMessage::Steer(SteerIntent {
      dx: dx.unwrap_or(0.0),
      dy: dy.unwrap_or(0.0),
      active: active.unwrap_or(false),
    })),
    JsonClientMessage::Key { key } => AxisKey::from_key_name(&key).map(ClientMessage::Key),
  }
}

pub fn encode_state(snapshot: &WorldSnapshot) -> serde_json::Result<String> {
  serde_json::to_string(&ServerMessage::State(snapshot))
}

pub fn encode_event(event: &WorldEvent) -> serde_json::Result<String> {
  serde_json::to_string(&ServerMessage::Event(event))
}

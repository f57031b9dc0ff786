//! Text protocol spoken over the WebSocket.
//!
//! Client messages are `PREFIX:{json}` (or a bare `FRAME`); server messages
//! use the same shape so a front end can split on the first colon.

use geoedit_core::{ButtonState, Frame, InputEvent, MouseButton, SceneEvent};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid {command} payload: {source}")]
    InvalidPayload {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key must be a single character, got {0:?}")]
    InvalidKey(String),
}

impl ProtocolError {
    pub fn code(&self) -> &'static str {
        match self {
            ProtocolError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            ProtocolError::InvalidPayload { .. } => "INVALID_PAYLOAD",
            ProtocolError::InvalidKey(_) => "INVALID_KEY",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    Input(InputEvent),
    /// Ask for the current frame without changing anything.
    Frame,
}

#[derive(Deserialize)]
struct KeyCmd {
    key: String,
    #[serde(default = "pressed")]
    state: ButtonState,
}

#[derive(Deserialize)]
struct MouseCmd {
    button: MouseButton,
    state: ButtonState,
    x: i32,
    y: i32,
}

#[derive(Deserialize)]
struct MotionCmd {
    x: i32,
    y: i32,
}

#[derive(Deserialize)]
struct ResizeCmd {
    width: u32,
    height: u32,
}

fn pressed() -> ButtonState {
    ButtonState::Pressed
}

fn payload<'a, T: Deserialize<'a>>(command: &'static str, json_str: &'a str) -> Result<T, ProtocolError> {
    serde_json::from_str(json_str).map_err(|source| ProtocolError::InvalidPayload { command, source })
}

pub fn parse_command(text: &str) -> Result<ClientCommand, ProtocolError> {
    let text = text.trim();
    if text == "FRAME" {
        return Ok(ClientCommand::Frame);
    }

    let (prefix, json_str) = text
        .split_once(':')
        .ok_or_else(|| ProtocolError::UnknownCommand(text.to_string()))?;

    let event = match prefix {
        "KEY" => {
            let cmd: KeyCmd = payload("KEY", json_str)?;
            let mut chars = cmd.key.chars();
            let key = match (chars.next(), chars.next()) {
                (Some(key), None) => key,
                _ => return Err(ProtocolError::InvalidKey(cmd.key)),
            };
            InputEvent::Key { key, state: cmd.state }
        }
        "MOUSE" => {
            let cmd: MouseCmd = payload("MOUSE", json_str)?;
            InputEvent::Button { button: cmd.button, state: cmd.state, x: cmd.x, y: cmd.y }
        }
        "MOTION" => {
            let cmd: MotionCmd = payload("MOTION", json_str)?;
            InputEvent::Motion { x: cmd.x, y: cmd.y }
        }
        "RESIZE" => {
            let cmd: ResizeCmd = payload("RESIZE", json_str)?;
            InputEvent::Resize { width: cmd.width, height: cmd.height }
        }
        other => return Err(ProtocolError::UnknownCommand(other.to_string())),
    };
    Ok(ClientCommand::Input(event))
}

pub fn event_message(event: &SceneEvent) -> String {
    format!("EVENT:{}", serde_json::to_string(event).unwrap_or("{}".into()))
}

pub fn render_update(frame: &Frame) -> String {
    format!("RENDER_UPDATE:{}", serde_json::to_string(frame).unwrap_or("{}".into()))
}

/// Format an error as a JSON message for the frontend
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!(
        "ERROR_UPDATE:{}",
        json!({
            "code": code,
            "message": message,
            "severity": severity
        })
    )
}

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Width of the board in squares; coordinates on the wire are `0..BOARD_WIDTH`
pub const BOARD_WIDTH: u8 = 8;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Failed to encode message: {0}")]
    Encode(String),

    #[error("Failed to decode message: {0}")]
    Decode(String),

    #[error("Square ({x}, {y}) is off the board")]
    InvalidSquare { x: u8, y: u8 },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    White,
    Black,
}

/// A single move as relayed between peers: `from`, `to` and, for a capture
/// hop, the captured square
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireMove {
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub captured: Option<(u8, u8)>,
}

impl WireMove {
    /// Reject coordinates outside the board
    pub fn validate(&self) -> Result<(), ProtocolError> {
        let squares = [Some(self.from), Some(self.to), self.captured];
        for (x, y) in squares.into_iter().flatten() {
            if x >= BOARD_WIDTH || y >= BOARD_WIDTH {
                return Err(ProtocolError::InvalidSquare { x, y });
            }
        }
        Ok(())
    }
}

/// In-game messages
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum GameMessage {
    // Client → Server
    SubmitMove { mv: WireMove },
    Resign,

    // Server → Client (Broadcast)
    MoveMade { mv: WireMove, by: PlayerColor },
    GameEnd {
        winner: Option<PlayerColor>,
        reason: String,
    },
}

/// Compact binary frame (bincode)
pub fn encode_binary<T: Serialize>(message: &T) -> Result<Vec<u8>, ProtocolError> {
    bincode::serialize(message).map_err(|e| ProtocolError::Encode(e.to_string()))
}

pub fn decode_binary<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    bincode::deserialize(bytes).map_err(|e| ProtocolError::Decode(e.to_string()))
}

/// One JSON object terminated by a newline
pub fn encode_json_line<T: Serialize>(message: &T) -> Result<String, ProtocolError> {
    let mut line = serde_json::to_string(message).map_err(|e| ProtocolError::Encode(e.to_string()))?;
    line.push('\n');
    Ok(line)
}

pub fn decode_json_line<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    serde_json::from_str(line.trim_end()).map_err(|e| ProtocolError::Decode(e.to_string()))
}

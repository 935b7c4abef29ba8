//! Relay protocol shared by checkers clients and the move-forwarding server
//!
//! Moves travel as plain integer tuples so a relay can forward them verbatim
//! without knowing the rules.

pub mod protocol;

pub use protocol::{
    decode_binary, decode_json_line, encode_binary, encode_json_line, GameMessage, PlayerColor,
    ProtocolError, WireMove,
};

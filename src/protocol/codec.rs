//! Move payloads on the wire.
//!
//! Two forms are supported:
//!
//! - **Text arguments** as they appear after a move command. Tiles are their
//!   integer codes; a placement is `code@x,y`:
//!
//!   ```text
//!   put:    "0@0,0 6@0,1"
//!   trade:  "0 35 12"
//!   ```
//!
//! - **Binary replies** (`bincode`): the result of asking a player for a move,
//!   either the move or the single [`ProtocolError`] it failed with.
//!
//! Framing and transport belong to the network layer.

use thiserror::Error;

use super::error::{Classify, ProtocolError, QwirkleError};
use crate::board::Coordinate;
use crate::core::{DuplicateCell, Move, Placement, PutMove, TradeMove};
use crate::tiles::{Tile, TileCodeError};

/// Outcome of a move request as sent to the peer.
pub type Reply = Result<Move, ProtocolError>;

/// A payload could not be encoded or decoded.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed token {0:?}")]
    Malformed(String),
    #[error("move has no tiles")]
    Empty,
    #[error(transparent)]
    Tile(#[from] TileCodeError),
    #[error(transparent)]
    DuplicateCell(#[from] DuplicateCell),
    #[error(transparent)]
    Binary(#[from] bincode::Error),
}

impl Classify for CodecError {
    fn protocol_error(&self) -> ProtocolError {
        match self {
            CodecError::Malformed(_) | CodecError::Empty | CodecError::Binary(_) => {
                ProtocolError::InvalidCommand
            }
            CodecError::Tile(e) => e.protocol_error(),
            CodecError::DuplicateCell(e) => e.protocol_error(),
        }
    }
}

impl From<CodecError> for QwirkleError {
    fn from(e: CodecError) -> Self {
        Self::new(e.protocol_error())
    }
}

fn parse_int(token: &str, part: &str) -> Result<i32, CodecError> {
    part.trim()
        .parse()
        .map_err(|_| CodecError::Malformed(token.to_string()))
}

fn parse_tile(token: &str, part: &str) -> Result<Tile, CodecError> {
    Ok(Tile::try_from(parse_int(token, part)?)?)
}

/// `"code@x,y"` tokens ordered by cell.
#[must_use]
pub fn encode_put(mv: &PutMove) -> String {
    mv.sorted()
        .iter()
        .map(|p| format!("{}@{},{}", p.tile.code(), p.coordinate.x, p.coordinate.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse whitespace-separated `code@x,y` tokens.
pub fn decode_put(text: &str) -> Result<PutMove, CodecError> {
    let mut placements = Vec::new();
    for token in text.split_whitespace() {
        let (code, cell) = token
            .split_once('@')
            .ok_or_else(|| CodecError::Malformed(token.to_string()))?;
        let (x, y) = cell
            .split_once(',')
            .ok_or_else(|| CodecError::Malformed(token.to_string()))?;
        placements.push(Placement {
            coordinate: Coordinate::new(parse_int(token, x)?, parse_int(token, y)?),
            tile: parse_tile(token, code)?,
        });
    }
    if placements.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(PutMove::from_placements(placements)?)
}

/// Tile codes in trade order.
#[must_use]
pub fn encode_trade(mv: &TradeMove) -> String {
    mv.tiles
        .iter()
        .map(|t| t.code().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse whitespace-separated tile codes.
pub fn decode_trade(text: &str) -> Result<TradeMove, CodecError> {
    let trade = text
        .split_whitespace()
        .map(|token| parse_tile(token, token))
        .collect::<Result<TradeMove, _>>()?;
    if trade.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(trade)
}

/// Normalize a player's result into a reply.
pub fn to_reply<M, E>(result: Result<M, E>) -> Reply
where
    M: Into<Move>,
    E: Into<QwirkleError>,
{
    result.map(Into::into).map_err(|e| e.into().error())
}

pub fn encode_reply(reply: &Reply) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(reply)?)
}

pub fn decode_reply(bytes: &[u8]) -> Result<Reply, CodecError> {
    Ok(bincode::deserialize(bytes)?)
}

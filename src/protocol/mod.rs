//! Wire protocol contract: error categories, classification, and payload codecs.

pub mod error;
pub mod codec;

pub use error::{Classify, PlayError, ProtocolError, QwirkleError, SearchError};
pub use codec::{
    decode_put, decode_reply, decode_trade, encode_put, encode_reply, encode_trade, to_reply,
    CodecError, Reply,
};

//! Wire format for native-auth tokens.
//!
//! An unsigned challenge is `b64(host).blockHash.ttl.b64(json(extraInfo))`;
//! an access token is `b64(address).b64(challenge).signatureHex`. Both are
//! built and taken apart here with no I/O.

pub mod codec;
pub mod error;

pub use codec::{
    decode_access, decode_value, encode_access, encode_unsigned, encode_unsigned_token,
    encode_value, signable_payload, DELIMITER, SIGNING_SUFFIX,
};
pub use error::CodecError;

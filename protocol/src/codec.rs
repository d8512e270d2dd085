//! Token codec: dot-joined, base64url segments.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use nauth_types::{DecodedToken, UnsignedToken};
use serde_json::Value;

use crate::CodecError;

/// Separator between token segments.
pub const DELIMITER: char = '.';

/// Accepts URL-safe input with or without padding. Standard-alphabet
/// characters are mapped onto URL-safe ones before decoding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Literal appended to every signed payload: the empty signing context.
pub const SIGNING_SUFFIX: &str = "{}";

const ACCESS_SEGMENTS: usize = 3;
const BODY_SEGMENTS: usize = 4;

/// Base64url-encode (no padding) the UTF-8 bytes of `value`.
pub fn encode_value(value: &str) -> String {
    URL_SAFE_NO_PAD.encode(value.as_bytes())
}

/// Decode a base64 segment back into a UTF-8 string.
///
/// Both alphabets and both padding styles are accepted.
pub fn decode_value(segment: &str) -> Result<String, CodecError> {
    decode_named(segment, "segment")
}

fn decode_named(segment: &str, name: &'static str) -> Result<String, CodecError> {
    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = LENIENT
        .decode(normalized.as_bytes())
        .map_err(|e| CodecError::Base64 {
            segment: name,
            reason: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|_| CodecError::Utf8 { segment: name })
}

/// Build the unsigned challenge `b64(host).blockHash.ttl.b64(json(extraInfo))`.
pub fn encode_unsigned(host: &str, block_hash: &str, ttl: u64, extra_info: &Value) -> String {
    let json = extra_info.to_string();
    format!(
        "{}{DELIMITER}{block_hash}{DELIMITER}{ttl}{DELIMITER}{}",
        encode_value(host),
        encode_value(&json)
    )
}

/// [`encode_unsigned`] over an [`UnsignedToken`].
pub fn encode_unsigned_token(token: &UnsignedToken) -> String {
    encode_unsigned(&token.host, &token.block_hash, token.ttl, &token.extra_info)
}

/// Build the access token `b64(address).b64(unsigned).signature`.
///
/// The signature is placed verbatim; nothing here checks it.
pub fn encode_access(address: &str, unsigned: &str, signature: &str) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{signature}",
        encode_value(address),
        encode_value(unsigned)
    )
}

/// The exact bytes a wallet signs: `${address}${unsigned}{}`.
pub fn signable_payload(address: &str, unsigned: &str) -> String {
    format!("{address}{unsigned}{SIGNING_SUFFIX}")
}

/// Split an access token into its claims. Purely structural: no
/// signature, host or expiry checks happen here.
pub fn decode_access(access_token: &str) -> Result<DecodedToken, CodecError> {
    let outer: Vec<&str> = access_token.split(DELIMITER).collect();
    if outer.len() != ACCESS_SEGMENTS {
        return Err(CodecError::SegmentCount {
            part: "access token",
            expected: ACCESS_SEGMENTS,
            found: outer.len(),
        });
    }

    let address = decode_named(outer[0], "address")?;
    let body = decode_named(outer[1], "body")?;
    let signature = outer[2].to_string();

    let inner: Vec<&str> = body.split(DELIMITER).collect();
    if inner.len() != BODY_SEGMENTS {
        return Err(CodecError::SegmentCount {
            part: "token body",
            expected: BODY_SEGMENTS,
            found: inner.len(),
        });
    }

    let host = decode_named(inner[0], "host")?;
    let block_hash = parse_block_hash(inner[1])?;
    let ttl = parse_ttl(inner[2])?;
    let extra_json = decode_named(inner[3], "extra info")?;
    let extra_info: Value =
        serde_json::from_str(&extra_json).map_err(|e| CodecError::Json(e.to_string()))?;

    Ok(DecodedToken {
        address,
        host,
        block_hash,
        ttl,
        extra_info,
        signature,
        body,
    })
}

fn parse_block_hash(raw: &str) -> Result<String, CodecError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidBlockHash(raw.to_string()));
    }
    Ok(raw.to_string())
}

// `str::parse::<u64>` would accept a leading '+'.
fn parse_ttl(raw: &str) -> Result<u64, CodecError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::InvalidTtl(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| CodecError::InvalidTtl(raw.to_string()))
}

//! Wallet addresses: bech32 (BIP-173) with human-readable part `erd`.
//!
//! Address format: `erd` + `1` + base32(public_key, 52 chars) + checksum (6 chars).
//! The payload is the raw 32-byte Ed25519 public key. Total length: 62 characters.

use nauth_types::PublicKey;

use crate::CryptoError;

/// Human-readable part of every wallet address.
pub const HRP: &str = "erd";

/// Bech32 data alphabet.
const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const CHARSET_REV: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[CHARSET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Generator coefficients of the bech32 BCH checksum.
const GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Number of checksum characters.
const CHECKSUM_LEN: usize = 6;

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ v as u32;
        for (i, g) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= g;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() * 2 + 1);
    out.extend(bytes.iter().map(|b| b >> 5));
    out.push(0);
    out.extend(bytes.iter().map(|b| b & 0x1f));
    out
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LEN]);
    let pm = polymod(values) ^ 1;
    let mut out = [0u8; CHECKSUM_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ((pm >> (5 * (5 - i))) & 0x1f) as u8;
    }
    out
}

/// Regroup bits between word sizes. `pad` is used when encoding (8 → 5);
/// decoding (5 → 8) rejects leftover non-zero bits.
fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max = (1u32 << to) - 1;
    let mut out = Vec::with_capacity(data.len() * from as usize / to as usize + 1);
    for &value in data {
        let v = value as u32;
        if v >> from != 0 {
            return None;
        }
        acc = (acc << from) | v;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & max) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & max) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max) != 0 {
        return None;
    }
    Some(out)
}

/// Encode a public key as an `erd1` address.
pub fn encode_address(public_key: &PublicKey) -> String {
    // 8 → 5 regrouping with padding cannot fail.
    let data = convert_bits(public_key.as_bytes(), 8, 5, true).unwrap_or_default();
    let checksum = create_checksum(HRP, &data);
    let mut out = String::with_capacity(HRP.len() + 1 + data.len() + CHECKSUM_LEN);
    out.push_str(HRP);
    out.push('1');
    for d in data.iter().chain(checksum.iter()) {
        out.push(CHARSET[*d as usize] as char);
    }
    out
}

/// Extract the public key from an `erd1` address, verifying its checksum.
pub fn decode_address(address: &str) -> Result<PublicKey, CryptoError> {
    let invalid = |reason: &str| CryptoError::InvalidAddress(format!("{address}: {reason}"));

    if address.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(invalid("uppercase characters are not accepted"));
    }
    let (hrp, data_part) = address
        .rsplit_once('1')
        .ok_or_else(|| invalid("missing separator"))?;
    if hrp != HRP {
        return Err(invalid("unexpected human-readable part"));
    }
    if data_part.len() < CHECKSUM_LEN {
        return Err(invalid("too short"));
    }

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        let v = CHARSET_REV.get(c as usize).copied().unwrap_or(0xFF);
        if v == 0xFF {
            return Err(invalid("invalid character"));
        }
        data.push(v);
    }

    let mut values = hrp_expand(hrp);
    values.extend_from_slice(&data);
    if polymod(values) != 1 {
        return Err(invalid("checksum mismatch"));
    }

    let payload = &data[..data.len() - CHECKSUM_LEN];
    let bytes = convert_bits(payload, 5, 8, false).ok_or_else(|| invalid("invalid padding"))?;
    let key: [u8; 32] = bytes
        .try_into()
        .map_err(|_| invalid("payload is not a 32-byte public key"))?;
    Ok(PublicKey(key))
}

/// Validate that an address is well-formed and its checksum is correct.
pub fn validate_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

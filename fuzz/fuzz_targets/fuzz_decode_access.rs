#![no_main]

use libfuzzer_sys::fuzz_target;
use nauth_protocol::{decode_access, encode_access};

// Decoding arbitrary input never panics, and anything that decodes can be
// re-assembled into a token carrying the same claims.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(decoded) = decode_access(input) else {
        return;
    };

    let rebuilt = encode_access(&decoded.address, &decoded.body, &decoded.signature);
    let again = decode_access(&rebuilt).expect("re-encoded token must decode");
    assert_eq!(again, decoded);
});

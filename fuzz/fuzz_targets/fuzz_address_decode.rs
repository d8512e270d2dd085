#![no_main]

use libfuzzer_sys::fuzz_target;
use nauth_crypto::{decode_address, encode_address};

// Address decoding never panics; valid addresses re-encode to themselves.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(public_key) = decode_address(input) {
        assert_eq!(encode_address(&public_key), input);
    }
});

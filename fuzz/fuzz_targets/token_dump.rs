#![no_main]

use dlang_syntax::token_dump;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(dump) = token_dump::dump_tokens(s) {
            assert!(dump.trim_end().ends_with("YYEOF"));
        }
    }
});

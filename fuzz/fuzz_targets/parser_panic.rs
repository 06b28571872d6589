#![no_main]
use libfuzzer_sys::fuzz_target;
use matype::Parser;

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps inputs that are almost text in play.
    let s = String::from_utf8_lossy(data);
    let _ = Parser::new().parse(&s);
});

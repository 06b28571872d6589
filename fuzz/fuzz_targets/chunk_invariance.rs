#![no_main]
use libfuzzer_sys::fuzz_target;
use matype::Parser;

fuzz_target!(|input: (u8, String)| {
    let (split, text) = input;
    let whole = Parser::new().parse(&text);

    let chars: Vec<char> = text.chars().collect();
    let size = usize::from(split).max(1);
    let mut parser = Parser::new();
    for piece in chars.chunks(size) {
        let piece: String = piece.iter().collect();
        if parser.update(&piece).is_err() {
            break;
        }
    }
    assert_eq!(parser.finish(), whole);
});

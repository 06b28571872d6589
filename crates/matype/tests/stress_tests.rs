use matype::{Parser, compile};

fn chunked(input: &str, size: usize) -> Result<String, matype::ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut parser = Parser::new();
    for piece in chars.chunks(size) {
        let piece: String = piece.iter().collect();
        if parser.update(&piece).is_err() {
            break;
        }
    }
    parser.finish()
}

#[test]
fn test_chunk_invariance_success() {
    let input = "Σ = [α, β | γ\n δ, ε | ζ] ~= 0;\nλ !>= μ -> ν";
    let whole = compile(input);
    assert!(whole.is_ok(), "{whole:?}");
    for size in 1..=input.chars().count() {
        assert_eq!(chunked(input, size), whole, "chunk size {size}");
    }
}

#[test]
fn test_chunk_invariance_failure_position() {
    let input = "x = 1;\ny = [1 | 2\n3, 4 | 5]";
    let whole = compile(input);
    assert!(whole.is_err());
    for size in 1..=input.chars().count() {
        assert_eq!(chunked(input, size), whole, "chunk size {size}");
    }
}

#[test]
fn test_large_matrix() {
    let size = 200;
    let mut input = String::from("[");
    for row in 0..size {
        let cells: Vec<String> = (0..size).map(|col| (row * size + col).to_string()).collect();
        input.push_str(&cells.join(", "));
        input.push('\n');
    }
    input.push(']');

    let latex = compile(&input).unwrap();
    assert_eq!(latex.matches("\\\\\n").count(), size - 1);
    assert_eq!(latex.matches(" & ").count(), size * (size - 1));
}

#[test]
fn test_long_operator_chain() {
    let input = "a + ".repeat(10_000) + "a";
    let latex = compile(&input).unwrap();
    assert_eq!(latex.len(), input.len());
}

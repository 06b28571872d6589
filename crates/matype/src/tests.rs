use crate::error::{ContextKind, StructuralError};
use crate::finalize::collapse_spaces;
use crate::token::{OPERATORS, ROW_BREAK};
use crate::{ParseError, Parser, Position, compile};

#[test]
fn test_compile_empty() {
    assert_eq!(compile("").unwrap(), "");
}

#[test]
fn test_plain_text_passes_through() {
    let inputs = [
        "x",
        "  f(x) \n",
        "sin(theta) / 2",
        "\tα β γ\t",
        "a\nb",
        "{x}_{i} .",
        "\\alpha",
    ];
    for input in inputs {
        assert_eq!(compile(input).unwrap(), input.trim(), "input {input:?}");
    }
}

#[test]
fn test_output_has_no_space_runs() {
    let inputs = ["a  +   b", "x   ;  y", "[1,   2]  =   c", "  p    q  ", "m\t+  n"];
    for input in inputs {
        let output = compile(input).unwrap();
        assert!(!output.contains("  "), "{input:?} gave {output:?}");
        assert_eq!(collapse_spaces(&output), output, "input {input:?}");
    }
}

#[test]
fn test_tab_before_operator_is_trimmed() {
    assert_eq!(compile("a\t+b").unwrap(), "a + b");
}

#[test]
fn test_blank_matrix_row_is_counted() {
    assert_eq!(
        compile("[1,2\n\n3,4]"),
        Err(ParseError::Structural {
            error: StructuralError::InconsistentRowSize,
            position: Position::new(3, 0),
        })
    );
}

#[test]
fn test_single_column_blank_row_rendered() {
    assert_eq!(
        compile("[a\n\nb]").unwrap(),
        "\\left[\n\\begin{array}{c}\na\\\\\n\\\\\nb\n\\end{array}\n\\right]"
    );
}

#[test]
fn test_addition() {
    assert_eq!(compile("a+b").unwrap(), "a + b");
}

#[test]
fn test_times() {
    assert_eq!(compile("2 * x").unwrap(), "2 \\times x");
}

#[test]
fn test_row_break_between_terms() {
    assert_eq!(compile("a;b").unwrap(), "a \\\\\nb");
}

#[test]
fn test_trailing_row_break_removed() {
    assert_eq!(compile("a;").unwrap(), "a");
}

#[test]
fn test_unknown_operator_passes_through() {
    assert_eq!(compile("x^^y").unwrap(), "x ^^ y");
}

#[test]
fn test_every_operator_renders() {
    for (key, latex) in OPERATORS {
        let output = compile(&format!("a{key}b")).unwrap();
        let expected = if *latex == ROW_BREAK {
            "a \\\\\nb".to_string()
        } else {
            format!("a {latex} b")
        };
        assert_eq!(output, expected, "operator {key:?}");
    }
}

#[test]
fn test_matrix() {
    assert_eq!(
        compile("[1,2;3,4]").unwrap(),
        "\\left[\n\\begin{array}{cc}\n1 & 2\\\\\n3 & 4\n\\end{array}\n\\right]"
    );
}

#[test]
fn test_matrix_after_operator() {
    let latex = compile("A = [x, y]").unwrap();
    assert!(latex.starts_with("A = \\left[\n"), "{latex}");
}

#[test]
fn test_consistent_bar() {
    let latex = compile("[1|2;3|4]").unwrap();
    assert!(latex.contains("\\begin{array}{c|c}"), "{latex}");
}

#[test]
fn test_bar_in_single_row_twice() {
    let err = compile("[1|2,3|4]").unwrap_err();
    assert_eq!(err.message(), "Inconsistent matrix bar index!");
}

#[test]
fn test_inconsistent_bar() {
    let err = compile("[1|2;3,4|5]").unwrap_err();
    assert_eq!(err.message(), "Inconsistent matrix bar index!");
    assert_eq!(err.to_string(), "Inconsistent matrix bar index! (1:9)");
}

#[test]
fn test_inconsistent_row_size() {
    let err = compile("[1,2;3]").unwrap_err();
    assert_eq!(err.message(), "Inconsistent row size!");
}

#[test]
fn test_unterminated_matrix() {
    let err = compile("[1,2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Reached end of input, but not root parsing context!"
    );
}

#[test]
fn test_multiline_matrix_position() {
    let input = "M = [1, 2\n     3, 4, 5\n]";
    assert_eq!(
        compile(input),
        Err(ParseError::Structural {
            error: StructuralError::InconsistentRowSize,
            position: Position::new(3, 0),
        })
    );
}

#[test]
fn test_first_error_wins() {
    let mut parser = Parser::new();
    assert!(parser.update("[1|2,3|4").is_err());
    let err = parser.update("]\n[").unwrap_err();
    assert_eq!(err.position(), Some(Position::new(1, 7)));
}

#[test]
fn test_operator_left_open_is_resolved() {
    let mut parser = Parser::new();
    parser.update("p ==>").unwrap();
    assert_eq!(parser.context().kind(), ContextKind::Operator);
    assert_eq!(parser.finish().unwrap(), "p \\implies");
}

#[test]
fn test_nested_bracket_is_not_a_matrix() {
    let latex = compile("[[1, 2]").unwrap();
    assert!(latex.contains("[1 & 2"), "{latex}");
}

#[test]
fn test_char_by_char_matches_whole() {
    let input = "y = [a | b\n c | d] + 1;";
    let mut parser = Parser::new();
    for c in input.chars() {
        parser.feed(c).unwrap();
    }
    assert_eq!(parser.finish(), compile(input));
}

use std::fs;

use lispy::{
    ast::{Application, Expr, NumberLeaf, OperatorLeaf, Program},
    error::{ErrorKind, ParseError},
    eval, evaluate_line, evaluate_script,
    interpreter::{parser::core::MAX_NESTING_DEPTH, value::core::Value},
    parse,
};
use pretty_assertions::assert_eq;

fn assert_output(src: &str, expected: &str) {
    assert_eq!(evaluate_line(src), expected, "evaluating {src:?}");
}

fn assert_syntax_error(src: &str) -> ParseError {
    match parse(src) {
        Ok(program) => panic!("{src:?} parsed but was expected to fail: {program:?}"),
        Err(e) => {
            assert_eq!(evaluate_line(src), e.to_string());
            e
        },
    }
}

fn number(text: &str) -> Expr {
    Expr::Number(NumberLeaf::new(text, 0..0))
}

#[test]
fn basic_arithmetic() {
    assert_output("+ 1 2", "3");
    assert_output("- 8 5", "3");
    assert_output("* 7 9", "63");
    assert_output("/ 10 2", "5");
}

#[test]
fn fold_is_left_to_right() {
    assert_output("- 10 3 2", "5");
    assert_output("/ 100 5 2", "10");
    assert_output("+ 1 2 3 4 5", "15");
}

#[test]
fn single_operand_is_returned_unchanged() {
    assert_output("- 5", "5");
    assert_output("/ 0", "0");
    assert_output("* (+ 3)", "3");
}

#[test]
fn nested_expressions_evaluate_first() {
    assert_output("* 2 (+ 1 2)", "6");
    assert_output("+ (* 2 (- 7 4)) (/ 9 3)", "9");
    assert_output("- (- (- 1))", "1");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("/ 7 2", "3");
    assert_output("/ -7 2", "-3");
    assert_output("/ 7 -2", "-3");
}

#[test]
fn division_by_zero_is_error() {
    assert_output("/ 4 0", "Error: Division by zero");
    assert_output("/ 0 0", "Error: Division by zero");
    assert_output("+ 1 (/ 1 0)", "Error: Division by zero");
}

#[test]
fn literal_overflow_is_invalid_number() {
    assert_output("+ 99999999999999999999", "Error: Invalid number");
    assert_output("+ 9223372036854775807", "9223372036854775807");
    assert_output("+ -9223372036854775808", "-9223372036854775808");
    assert_output("+ 9223372036854775808", "Error: Invalid number");
}

#[test]
fn arithmetic_overflow_wraps() {
    assert_output("+ 9223372036854775807 1", "-9223372036854775808");
    assert_output("- -9223372036854775808 1", "9223372036854775807");
    assert_output("* 4611686018427387904 2", "-9223372036854775808");
    assert_output("/ -9223372036854775808 -1", "-9223372036854775808");
}

#[test]
fn first_error_wins() {
    assert_output("+ 99999999999999999999 (/ 1 0)", "Error: Invalid number");
    assert_output("+ (/ 1 0) 99999999999999999999", "Error: Division by zero");
    assert_output("+ 1 99999999999999999999 (/ 1 0)", "Error: Invalid number");
}

#[test]
fn invalid_operator_in_hand_built_tree() {
    let program = Program { body: Application { operator: OperatorLeaf::new("%", 0..1),
                                                first:    Box::new(number("5")),
                                                rest:     vec![number("2")],
                                                span:     0..5, }, };
    let value = eval(&program);
    assert!(value.is_error());
    assert_eq!(value, Value::Error(ErrorKind::InvalidOperator));
}

#[test]
fn invalid_operator_loses_to_earlier_error() {
    let program = Program { body: Application { operator: OperatorLeaf::new("%", 0..1),
                                                first:    Box::new(number("99999999999999999999")),
                                                rest:     vec![number("1")],
                                                span:     0..0, }, };
    assert_eq!(eval(&program), Value::Error(ErrorKind::InvalidNumber));
}

#[test]
fn whitespace_is_ignored() {
    assert_output("   +   1\t2  ", "3");
    assert_output("*( + 1 2 )( - 4 1 )", "9");
    assert_output("+(+ 1 2)3", "6");
}

#[test]
fn minus_sign_binds_only_when_adjacent() {
    assert_output("+ -1 -2", "-3");
    assert_output("-5 3", "2");
    assert_output("- -5", "-5");
    assert_syntax_error("+ - 5");
}

#[test]
fn unknown_operator_is_syntax_error() {
    let e = assert_syntax_error("^ 1 2");
    assert_eq!(e, ParseError::InvalidCharacter { found:  "^".to_string(),
                                                 column: 1, });
}

#[test]
fn malformed_lines_are_syntax_errors() {
    assert_syntax_error("");
    assert_syntax_error("   ");
    assert_syntax_error("+");
    assert_syntax_error("1 2");
    assert_syntax_error("+ 1 2)");
    assert_syntax_error("+ (1 2)");
    assert_syntax_error("+ (+ 1 2");
    assert_syntax_error("+ ()");
    assert_syntax_error("+ 1.5");
    assert_syntax_error("+ 0x10");
    assert_syntax_error("(+ 1 2)");
}

#[test]
fn syntax_errors_point_at_the_failure() {
    assert_eq!(assert_syntax_error("+ 1 2)"),
               ParseError::UnexpectedToken { expected: "a number or '('",
                                             found:    ")".to_string(),
                                             column:   6, });
    assert_eq!(assert_syntax_error("+ (+ 1 2"),
               ParseError::UnexpectedEndOfInput { expected: "a number, '(' or ')'",
                                                  column:   9, });
    assert_eq!(assert_syntax_error("+"),
               ParseError::UnexpectedEndOfInput { expected: "a number or '('",
                                                  column:   2, });
    assert_eq!(assert_syntax_error("+ 1 2)").to_string(),
               "<stdin>:1:6: error: expected a number or '(', found )");
}

#[test]
fn nesting_limit() {
    let depth = MAX_NESTING_DEPTH;
    let ok = format!("+ {}1{}", "(+ ".repeat(depth), ")".repeat(depth));
    assert_output(&ok, "1");

    let deep = format!("+ {}1{}", "(+ ".repeat(depth + 1), ")".repeat(depth + 1));
    let e = assert_syntax_error(&deep);
    assert!(matches!(e, ParseError::NestingTooDeep { limit, .. } if limit == MAX_NESTING_DEPTH));
    assert_eq!(e.column(), 3 + 3 * depth);
}

#[test]
fn tree_shape() {
    let program = parse("* 2 (+ 1 -3)").unwrap();
    let body = &program.body;
    assert_eq!(body.operator.symbol, "*");
    assert_eq!(*body.first, Expr::Number(NumberLeaf::new("2", 2..3)));
    assert_eq!(body.rest.len(), 1);
    assert_eq!(body.rest[0].span(), 4..12);

    let Expr::Apply(inner) = &body.rest[0] else {
        panic!("expected a parenthesized form, found {:?}", body.rest[0]);
    };
    assert_eq!(inner.operator.symbol, "+");
    assert_eq!(inner.span, 4..12);
    assert_eq!(inner.rest, vec![Expr::Number(NumberLeaf::new("-3", 9..11))]);
}

#[test]
fn node_count() {
    assert_eq!(parse("+ 1 2").unwrap().node_count(), 6);
    assert_eq!(parse("* 2 (+ 1 2)").unwrap().node_count(), 11);
    assert_eq!(parse("- (- (- 1))").unwrap().node_count(), 13);
}

#[test]
fn evaluation_is_repeatable() {
    for line in ["+ 1 2", "/ 4 0", "^ 1 2", "* 2 (+ 1 2)"] {
        assert_eq!(evaluate_line(line), evaluate_line(line));
    }
}

#[test]
fn example_transcript() {
    let contents = fs::read_to_string("tests/example.lispy").expect("missing file");
    let mut count = 0;

    for line in contents.lines()
                        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
    {
        let (input, expected) = line.split_once(" => ")
                                    .unwrap_or_else(|| panic!("malformed line: {line:?}"));
        assert_output(input, expected.trim_end());
        count += 1;
    }

    assert!(count > 0, "No examples found in tests/example.lispy");
}

#[test]
fn script_prints_one_line_per_non_blank_line() {
    let script = "+ 1 2\n\n   \n- 10 3 2\n^ 1 2\n\t\n/ 4 0\n* 2 (+ 1 2)";
    let output: Vec<String> = evaluate_script(script).collect();

    assert_eq!(output,
               vec!["3".to_string(),
                    "5".to_string(),
                    "<stdin>:1:1: error: unexpected character '^'".to_string(),
                    "Error: Division by zero".to_string(),
                    "6".to_string()]);
}

#[test]
fn empty_script_prints_nothing() {
    assert_eq!(evaluate_script("").count(), 0);
    assert_eq!(evaluate_script("\n  \n\t\n").count(), 0);
}

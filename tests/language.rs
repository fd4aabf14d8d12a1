use reckon::{ParseError, evaluate, evaluate_with_limit};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() <= expected.abs().max(1.0) * 1e-12,
                             "{src} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ParseError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1+2", 3.0);
    assert_value("7*9", 63.0);
    assert_value("8-5", 3.0);
    assert_value("10/2", 5.0);
    assert_value("42", 42.0);
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3+4*5", 26.0);
    assert_value("20-12/4", 17.0);
}

#[test]
fn left_associativity() {
    assert_value("8-3-2", 3.0);
    assert_value("16/4/2", 2.0);
    assert_value("2*6/3*2", 8.0);
    assert_value("1-2+3", 2.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5", 4.0);
    assert_value("0.1*10", 1.0);
    assert_value("234.4234 + 6345.423 * 3264.2462", 20_713_257.338_542_6);
}

#[test]
fn nested_parentheses() {
    assert_value("((((1))))", 1.0);
    assert_value("(23423 * 423 + (423 - 234) / 654 + 4324) * 4234", 41_968_480_425.587_155_963);
    assert_value("(1+(2*(3+(4/(5-3)))))", 11.0);
}

#[test]
fn whitespace_and_stray_characters_are_ignored() {
    assert_value("  2 +\t3 \n", 5.0);
    assert_value("2 + x3", 5.0);
    assert_value("$ 4 * 2 =", 8.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("5/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("0-5/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
    assert!(evaluate("(0/0)+1").unwrap().is_nan());
}

#[test]
fn empty_input() {
    assert_eq!(assert_failure(""), ParseError::InvalidExpression);
    assert_eq!(assert_failure("hello"), ParseError::InvalidExpression);
}

#[test]
fn unmatched_parenthesis() {
    assert_eq!(assert_failure("(1+2"), ParseError::ExpectedClosingParen { offset: 0 });
    assert_eq!(assert_failure("2*(3+(4)"), ParseError::ExpectedClosingParen { offset: 2 });
}

#[test]
fn trailing_input() {
    assert_eq!(assert_failure("2+2)"),
               ParseError::TrailingInput { token:  ")".to_owned(),
                                           offset: 3, });
    assert_eq!(assert_failure("(1)(2)").kind(), "TrailingInput");
    assert_eq!(assert_failure("1.2.3").kind(), "TrailingInput");
}

#[test]
fn unexpected_tokens() {
    assert_eq!(assert_failure("-1"),
               ParseError::UnexpectedToken { token:  "-".to_owned(),
                                             offset: 0, });
    assert_eq!(assert_failure("2*/3"),
               ParseError::UnexpectedToken { token:  "/".to_owned(),
                                             offset: 2, });
    assert_eq!(assert_failure("()").kind(), "UnexpectedToken");
}

#[test]
fn unexpected_end_of_input() {
    assert_eq!(assert_failure("1+"), ParseError::UnexpectedEndOfInput { offset: 2 });
    assert_eq!(assert_failure("(3*"), ParseError::UnexpectedEndOfInput { offset: 3 });
}

#[test]
fn nesting_limit() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(assert_failure(&deep),
               ParseError::NestingTooDeep { limit:  256,
                                            offset: 256, });
    assert_eq!(evaluate_with_limit(&deep, 300), Ok(1.0));
    assert_eq!(evaluate_with_limit("(1)", 0),
               Err(ParseError::NestingTooDeep { limit:  0,
                                                offset: 0, }));
}

#[test]
fn repeated_evaluation_is_identical() {
    for src in ["2+3*4", "(1.5+2.5)/3", "5/0", "(1+2"] {
        assert_eq!(evaluate(src), evaluate(src));
    }
}

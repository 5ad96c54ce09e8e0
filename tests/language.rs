use std::fs;

use defmap_calc::{
    calc_expression,
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        context::Context,
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, evaluate_expression},
        stream::{LexerStream, TokenStream, VecStream},
        value::Value,
    },
    process_statement, run_block, run_script,
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_work() {
    let mut count = 0;

    let scripts = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts");

    for entry in
        WalkDir::new(scripts).into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_value(&content).unwrap_or_else(|| {
                                                   panic!("{path:?} has no '// expect:' header")
                                               });

        count += 1;
        let mut context = Context::new();
        match run_script(&mut context, &content) {
            Ok(Some(value)) => assert_same(value, expected, &content),
            Ok(None) => panic!("Script {path:?} produced no value"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn expected_value(content: &str) -> Option<f64> {
    content.lines()
           .find_map(|line| line.trim().strip_prefix("// expect:"))
           .and_then(|value| value.trim().parse().ok())
}

fn assert_same(actual: f64, expected: f64, src: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{src}: expected NaN, got {actual}");
    } else {
        assert_eq!(actual, expected, "{src}");
    }
}

fn assert_value(src: &str, expected: f64) {
    let mut context = Context::new();
    match calc_expression(&mut context, src) {
        Ok(value) => assert_same(value, expected, src),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> EvalError {
    let mut context = Context::new();
    match calc_expression(&mut context, src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_block(statements: &[&str], expected: f64) {
    let mut context = Context::new();
    match run_block(&mut context, statements) {
        Ok(Some(value)) => assert_same(value, expected, &statements.join("; ")),
        Ok(None) => panic!("Block {statements:?} produced no value"),
        Err(e) => panic!("Block {statements:?} failed: {e}"),
    }
}

fn block_failure(statements: &[&str]) -> EvalError {
    let mut context = Context::new();
    match run_block(&mut context, statements) {
        Ok(value) => panic!("Block {statements:?} succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn unary_operators() {
    assert_value("0", 0.0);
    assert_value("+0", 0.0);
    assert_value("-0", 0.0);
    assert_value("-1", -1.0);
    assert_value("--1", 1.0);
    assert_value("++1", 1.0);
    assert_value("+-1", -1.0);
    assert_value("1+-1", 0.0);
}

#[test]
fn precedence_and_grouping() {
    assert_value("1+1", 2.0);
    assert_value("3+4*5", 23.0);
    assert_value("3+(4*5)", 23.0);
    assert_value("(3+4)*5", 35.0);
    assert_value("-(3+4)*5", -35.0);
    assert_value("(3 + 4) * 5", 35.0);
    assert_value("(2+3) * (7-4) + 11", 26.0);
    assert_value("(2+3) * -(7-4) + 11", -4.0);
    assert_value("10 - 4 - 3", 3.0);
}

#[test]
fn exponentiation() {
    assert_value("2**2", 4.0);
    assert_value("-2**2", 4.0);
    assert_value("2**-2", 0.25);
    assert_value("3*3**3", 81.0);
    assert_value("2**2**2", 16.0);
    assert_value("2**3**2", 512.0);
}

#[test]
fn multiplicative_chains_group_to_the_right() {
    assert_value("8/4/2", 4.0);
    assert_value("2/4*2", 0.25);
    assert_value("12/3-1", 3.0);
    assert_value("2*3*4", 24.0);
}

#[test]
fn real_literals_and_ieee_results() {
    assert_value("1.5*2", 3.0);
    assert_value(".5", 0.5);
    assert_value("1e3", 1000.0);

    let mut context = Context::new();
    assert!(calc_expression(&mut context, "1/0").unwrap().is_infinite());
    assert!(calc_expression(&mut context, "0/0").unwrap().is_nan());
}

#[test]
fn syntax_errors() {
    for src in ["", "(", ")", "2+", "$", "2$", "-((2+3)", "-(2+3))", "2* *2", "+"] {
        assert!(matches!(assert_failure(src), EvalError::Parse(_)), "{src:?}");
    }
}

#[test]
fn syntax_errors_report_kind_and_position() {
    assert_eq!(assert_failure(""),
               EvalError::Parse(ParseError::UnexpectedEndOfInput { position: 0 }));
    assert_eq!(assert_failure("$"),
               EvalError::Parse(ParseError::Lex { text:     "$".to_string(),
                                                  position: 0, }));
    assert_eq!(assert_failure("2$"),
               EvalError::Parse(ParseError::Lex { text:     "$".to_string(),
                                                  position: 1, }));
    assert_eq!(assert_failure("-((2+3)"),
               EvalError::Parse(ParseError::ExpectedRightParen { position: 7 }));
    assert_eq!(assert_failure("-(2+3))"),
               EvalError::Parse(ParseError::TrailingInput { token:    "')'".to_string(),
                                                            position: 6, }));
    assert_eq!(assert_failure("2* *2"),
               EvalError::Parse(ParseError::UnexpectedToken { token:    "'*'".to_string(),
                                                              position: 3, }));
}

#[test]
fn oversized_literals_are_rejected() {
    assert_eq!(assert_failure("9007199254740993"),
               EvalError::Parse(ParseError::LiteralTooLarge { position: 0 }));
    assert!(matches!(assert_failure("99999999999999999999"),
                     EvalError::Parse(ParseError::Lex { .. })));
}

#[test]
fn scalar_assignments() {
    assert_block(&["a=1", "a"], 1.0);
    assert_block(&["a=3", "b=5", "a+b"], 8.0);
    assert_block(&["a=b=5", "a*b"], 25.0);
    assert_block(&["a=44"], 44.0);
    assert_block(&["(a)=177"], 177.0);
    assert_block(&["(a)=177", "a"], 177.0);
    assert_block(&["((a))=3", "a*a"], 9.0);
}

#[test]
fn unset_scalars_read_as_nan() {
    assert_value("x", f64::NAN);
    assert_value("x + 1", f64::NAN);
    assert_block(&["a = x", "a * 0"], f64::NAN);
}

#[test]
fn maps() {
    assert_block(&["@defmap zz", "zz[1]=50"], 50.0);
    assert_block(&["@defmap zxcv", "(zxcv[1])=255", "(zxcv[(3-2)]-2)"], 253.0);
    assert_block(&["@defmap yx",
                   "yx[1]=50",
                   "yx[2]=yx[3]=4",
                   "mm=8",
                   "yx[1]*mm + yx[2]/yx[3]"],
                 401.0);
    assert_block(&["@defmap t", "i=2", "t[i*2]=7", "t[4]"], 7.0);
    assert_block(&["@defmap t", "t[-0]=3", "t[0]"], 3.0);
}

#[test]
fn unset_map_entries_read_as_nan() {
    assert_block(&["@defmap zz", "zz[1]=50", "zz[2]"], f64::NAN);
    assert_block(&["@defmap zz", "zz"], f64::NAN);
}

#[test]
fn map_redeclaration_resets_the_map() {
    assert_block(&["@defmap m", "m[1]=5", "@defmap m", "m[1]"], f64::NAN);

    let mut context = Context::new();
    assert_eq!(run_block(&mut context, ["@defmap m", "@defmap m"]).unwrap(), None);
    assert!(context.map("m").is_some_and(|map| map.is_empty()));
}

#[test]
fn map_declaration_replaces_scalar() {
    let mut context = Context::new();
    run_block(&mut context, ["zz = 1", "@defmap zz", "zz[0] = 2"]).unwrap();

    assert!(context.is_map("zz"));
    assert_eq!(context.scalars().count(), 0);
    assert!(calc_expression(&mut context, "zz").unwrap().is_nan());
}

#[test]
fn invalid_statements() {
    assert!(matches!(block_failure(&["@hello"]),
                     EvalError::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(block_failure(&["@defmap 3"]),
                     EvalError::Parse(ParseError::ExpectedMapName { .. })));
    assert!(matches!(block_failure(&["@defmap"]),
                     EvalError::Parse(ParseError::ExpectedMapName { .. })));
    assert!(matches!(block_failure(&["@defmap a b"]),
                     EvalError::Parse(ParseError::TrailingInput { .. })));
    assert!(matches!(block_failure(&["1[2]"]),
                     EvalError::Parse(ParseError::IndexOnNonIdentifier { .. })));
    assert!(matches!(block_failure(&["(a+1)[2]"]),
                     EvalError::Parse(ParseError::IndexOnNonIdentifier { .. })));
    assert!(matches!(block_failure(&["@defmap zz", "zz[1"]),
                     EvalError::Parse(ParseError::ExpectedRightBracket { .. })));
}

#[test]
fn declarations_are_not_expressions() {
    let mut context = Context::new();
    assert!(matches!(calc_expression(&mut context, "@defmap zz"),
                     Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(!context.is_map("zz"));
}

#[test]
fn assignment_errors() {
    assert!(matches!(block_failure(&["(c=d)=3"]),
                     EvalError::Runtime(RuntimeError::NotWritable { .. })));
    assert!(matches!(block_failure(&["1=2"]),
                     EvalError::Runtime(RuntimeError::NotWritable { .. })));
    assert!(matches!(block_failure(&["-a=2"]),
                     EvalError::Runtime(RuntimeError::NotWritable { .. })));
    assert_eq!(block_failure(&["@defmap m", "m = 1"]),
               EvalError::Runtime(RuntimeError::AssignToMapName { name: "m".to_string() }));
    assert_eq!(block_failure(&["q[1] = 2"]),
               EvalError::Runtime(RuntimeError::MapNotFound { name: "q".to_string() }));
    assert_eq!(block_failure(&["q[1]"]),
               EvalError::Runtime(RuntimeError::MapNotFound { name: "q".to_string() }));
}

#[test]
fn failed_statements_keep_earlier_writes() {
    let mut context = Context::new();
    assert!(process_statement(&mut context, "(b=2)=3").is_err());
    assert_eq!(calc_expression(&mut context, "b").unwrap(), 2.0);
}

#[test]
fn statements_report_missing_values() {
    let mut context = Context::new();
    assert_eq!(process_statement(&mut context, "@defmap zz").unwrap(), None);
    assert_eq!(process_statement(&mut context, "zz[1] = 2 ** 3").unwrap(), Some(8.0));
}

#[test]
fn pre_tokenized_streams() {
    let mut context = Context::new();
    let mut stream = VecStream::from(vec![Token::Identifier("a".to_string()),
                                          Token::Equals,
                                          Token::Minus,
                                          Token::Integer(3)]);
    assert_eq!(evaluate_expression(&mut context, &mut stream).unwrap(), -3.0);
    assert_eq!(context.read_scalar("a"), -3.0);

    let mut trailing = VecStream::from(vec![Token::Integer(1), Token::Integer(2)]);
    assert_eq!(evaluate_expression(&mut context, &mut trailing),
               Err(EvalError::Parse(ParseError::TrailingInput { token:    "number 2".to_string(),
                                                                position: 1, })));
}

#[test]
fn advancing_past_the_end_is_harmless() {
    let mut lexed = LexerStream::new("1").unwrap();
    let mut tokens = VecStream::from(vec![Token::Integer(1)]);
    for _ in 0..5 {
        lexed.advance().unwrap();
        tokens.advance().unwrap();
    }
    assert!(lexed.is_at_end());
    assert_eq!(lexed.position(), 1);
    assert!(tokens.is_at_end());
    assert_eq!(tokens.position(), 1);
}

#[test]
fn valueless_statements_cannot_be_read_or_written() {
    let mut context = Context::new();
    assert!(matches!(Value::None.read(&context),
                     Err(RuntimeError::NotReadable { .. })));
    assert!(matches!(Value::None.write(1.0, &mut context),
                     Err(RuntimeError::NotWritable { .. })));
    assert!(matches!(Value::Scalar(2.0).write(1.0, &mut context),
                     Err(RuntimeError::NotWritable { .. })));
    assert_eq!(context, Context::new());
}

#[test]
fn nesting_up_to_the_limit_evaluates() {
    let depth = MAX_NESTING_DEPTH;
    assert_value(&format!("{}1{}", "(".repeat(depth), ")".repeat(depth)), 1.0);
    assert_value(&format!("{}1", "-".repeat(depth)), 1.0);
    assert_value(&format!("1{}", "*2".repeat(depth)),
                 (0..depth).fold(1.0, |acc, _| acc * 2.0));
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = MAX_NESTING_DEPTH;
    assert_eq!(assert_failure(&format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1))),
               EvalError::Parse(ParseError::NestingTooDeep { position: depth }));
    assert_eq!(assert_failure(&"(".repeat(100_000)),
               EvalError::Parse(ParseError::NestingTooDeep { position: depth }));
    assert_eq!(assert_failure(&format!("{}1", "-".repeat(100_000))),
               EvalError::Parse(ParseError::NestingTooDeep { position: depth }));

    let chains = [format!("1{}", "*1".repeat(100_000)),
                  format!("2{}", "**1".repeat(100_000)),
                  format!("{}1", "a=".repeat(100_000)),
                  format!("{}1{}", "m[".repeat(100_000), "]".repeat(100_000))];
    for src in &chains {
        assert!(matches!(block_failure(&["@defmap m", src]),
                         EvalError::Parse(ParseError::NestingTooDeep { .. })),
                "{}...", &src[..8]);
    }
}

#[test]
fn indexing_requires_an_identifier() {
    assert_eq!(block_failure(&["1[2]"]),
               EvalError::Parse(ParseError::IndexOnNonIdentifier { position: 1 }));
    assert_block(&["@defmap m", "(m)[2] = 3", "m[2]"], 3.0);
}

#[test]
fn scripts_skip_blank_lines_and_report_line_numbers() {
    let mut context = Context::new();
    let script = "// setup\n@defmap m\n\nm[1] = 4 // first entry\nm[1] * 2\n";
    assert_eq!(run_script(&mut context, script).unwrap(), Some(8.0));

    let mut context = Context::new();
    let err = run_script(&mut context, "a = 1\n\nb = (a\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(matches!(err.error, EvalError::Parse(ParseError::ExpectedRightParen { .. })));
    assert!(err.to_string().starts_with("Error on line 3:"));
    assert_eq!(context.read_scalar("a"), 1.0);
}

#[test]
fn context_display_lists_bindings() {
    let mut context = Context::new();
    run_block(&mut context, ["b = 2", "a = 1", "@defmap zz", "zz[2] = 5", "zz[1] = 4"]).unwrap();
    assert_eq!(context.to_string(), "a = 1\nb = 2\n@defmap zz\nzz[1] = 4\nzz[2] = 5\n");
}

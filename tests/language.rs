use std::fs;

use parva::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, value::Value},
};

fn run_with_output(source: &str) -> (Result<Option<Value>, Error>, String) {
    let mut out = Vec::new();
    let mut context = Context::new(&mut out);
    let result = parva::interpret(source, &mut context);
    let output = String::from_utf8(out).expect("program output should be valid UTF-8");
    (result, output)
}

fn run(source: &str) -> Result<String, Error> {
    let (result, output) = run_with_output(source);
    result.map(|_| output)
}

fn assert_output(source: &str, expected: &str) {
    match run(source) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output for:\n{source}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{source}"),
    }
}

fn assert_failure(source: &str) {
    if run(source).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_output("print 1 + 2 * 3;", "7\n");
    assert_output("print (1 + 2) * 3;", "9\n");
    assert_output("print 10 - 4 - 3;", "3\n");
    assert_output("print 7 % 3;", "1\n");
    assert_output("print 1 / 2;", "0.5\n");
}

#[test]
fn integral_numbers_print_without_decimal_point() {
    assert_output("print 4 / 2;", "2\n");
    assert_output("print 0.5 + 0.5;", "1\n");
    assert_output("print 2.5;", "2.5\n");
    assert_output("print 100;", "100\n");
}

#[test]
fn unary_minus_nests() {
    assert_output("print -5;", "-5\n");
    assert_output("print --5;", "5\n");
    assert_output("print -(2 + 3);", "-5\n");
    assert_output("print 1 - -1;", "2\n");
}

#[test]
fn text_concatenation_works_in_both_directions() {
    assert_output(r#"print "hi" + "!";"#, "hi!\n");
    assert_output(r#"print 1 + "x";"#, "1x\n");
    assert_output(r#"print "x" + 1;"#, "x1\n");
    assert_output("print 1 + 2;", "3\n");
    assert_output(r#"print "n = " + (1 + 2) * 3;"#, "n = 9\n");
}

#[test]
fn escaped_quote_in_text_literal() {
    assert_output(r#"print "a\"b";"#, "a\"b\n");
}

#[test]
fn comparisons_yield_one_or_zero() {
    assert_output("print 2 < 3;", "1\n");
    assert_output("print 2 > 3;", "0\n");
    assert_output("print 2 <= 2;", "1\n");
    assert_output("print 3 >= 4;", "0\n");
    assert_output("print 2 == 2;", "1\n");
    assert_output("print 2 != 2;", "0\n");
}

#[test]
fn comparison_chains_are_numeric_not_logical() {
    // (3 < 2) is 0, and (0 < 1) is 1.
    assert_output("print 3 < 2 < 1;", "1\n");
}

#[test]
fn variables_assign_and_overwrite() {
    assert_output("let x = 1; print x;", "1\n");
    assert_output("let x = 1; let x = x + 1; print x;", "2\n");
    assert_output(r#"let x = 10; let y = "hi"; print y + x;"#, "hi10\n");
}

#[test]
fn if_takes_the_matching_branch() {
    assert_output(r#"if (1) { print "t"; } else { print "f"; }"#, "t\n");
    assert_output(r#"if (0) { print "t"; } else { print "f"; }"#, "f\n");
    assert_output(r#"if (0) { print "t"; }"#, "");
    assert_output(r#"let x = 10; if (x > 5) { print "big"; } else { print "small"; }"#,
                  "big\n");
}

#[test]
fn else_branch_runs_all_statements_in_order() {
    assert_output(r#"if (0) { print "a"; print "b"; } else { print "c"; print "d"; }"#,
                  "c\nd\n");
}

#[test]
fn text_conditions_are_false() {
    assert_output(r#"if ("yes") { print "t"; } else { print "f"; }"#, "f\n");
    assert_output(r#"while ("yes") { print "never"; } print "done";"#, "done\n");
}

#[test]
fn while_loop_counts_down() {
    assert_output("let x = 3; while (x > 0) { print x; let x = x - 1; }",
                  "3\n2\n1\n");
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_output(r#"while (0) { print "never"; }"#, "");
}

#[test]
fn nested_control_flow() {
    assert_output("let i = 0;
                   while (i < 4) {
                       if (i % 2 == 0) {
                           print i;
                       }
                       let i = i + 1;
                   }",
                  "0\n2\n");
}

#[test]
fn newlines_separate_statements_but_do_not_terminate_them() {
    assert_output("let x = 1;\n\nprint x;\n", "1\n");

    // The semicolon is mandatory and must come before the line break.
    match run("print 1\n;") {
        Err(Error::Parse(ParseError::ExpectedToken { found, .. })) => {
            assert_eq!(found, "NewLine");
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn else_may_start_on_its_own_line() {
    assert_output("if (0) {\n    print \"t\";\n}\nelse {\n    print \"f\";\n}",
                  "f\n");
}

#[test]
fn empty_blocks_and_empty_programs_are_fine() {
    assert_output("if (1) { }", "");
    assert_output("", "");
    assert_output("\n\n", "");

    let (result, output) = run_with_output("# only a comment\n");
    assert_eq!(result.unwrap(), None);
    assert_eq!(output, "");
}

#[test]
fn comments_run_to_end_of_line() {
    assert_output("# heading\nlet x = 1; # trailing\nprint x;", "1\n");
}

#[test]
fn assignment_is_the_program_result() {
    let (result, output) = run_with_output("let x = 2 + 3;");
    assert_eq!(result.unwrap(), Some(Value::Number(5.0)));
    assert_eq!(output, "");

    // A print statement produces no result of its own.
    let (result, _) = run_with_output("print 1;");
    assert_eq!(result.unwrap(), None);
}

#[test]
fn division_by_zero_is_an_error() {
    match run("print 1 / 0;") {
        Err(Error::Runtime(RuntimeError::DivisionByZero { line })) => assert_eq!(line, 1),
        other => panic!("Expected division by zero, got: {other:?}"),
    }
    assert_failure("let x = 0; print 5 / x;");
}

#[test]
fn modulo_follows_host_remainder_semantics() {
    assert_output("print -7 % 3;", "-1\n");
    // A zero divisor is not an error for modulo.
    assert_output("print 5 % 0;", "NaN\n");
}

#[test]
fn undefined_variable_names_the_variable() {
    match run("print foo + 1;") {
        Err(Error::Runtime(RuntimeError::UndefinedVariable { name, line })) => {
            assert_eq!(name, "foo");
            assert_eq!(line, 1);
        },
        other => panic!("Expected an undefined-variable error, got: {other:?}"),
    }

    // The condition position is no exception.
    assert_failure("if (foo) { }");
    assert_failure("while (foo) { }");
}

#[test]
fn prints_before_a_failing_statement_survive() {
    let (result, output) = run_with_output("print 1; print missing + 2;");
    assert!(result.is_err());
    assert_eq!(output, "1\n");
}

#[test]
fn text_comparisons_are_invalid_operations() {
    match run(r#"print "a" == "a";"#) {
        Err(Error::Runtime(RuntimeError::InvalidOperation { .. })) => {},
        other => panic!("Expected an invalid-operation error, got: {other:?}"),
    }
    assert_failure(r#"print "a" < "b";"#);
    assert_failure(r#"print "a" - "b";"#);
    assert_failure(r#"print 1 * "x";"#);
}

#[test]
fn negating_text_is_an_error() {
    match run(r#"print -"x";"#) {
        Err(Error::Runtime(RuntimeError::InvalidUnaryOperation { .. })) => {},
        other => panic!("Expected an invalid-unary error, got: {other:?}"),
    }
}

#[test]
fn parse_errors_name_expected_and_actual() {
    match run("let x 5;") {
        Err(Error::Parse(ParseError::ExpectedToken { expected, found, line })) => {
            assert_eq!(expected, "Assign");
            assert!(found.starts_with("Number"));
            assert_eq!(line, 1);
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }

    // A missing semicolon at the very end runs out of input instead.
    match run("print 1") {
        Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. })) => {},
        other => panic!("Expected a parse error, got: {other:?}"),
    }

    assert_failure("let = 1;");
    assert_failure("let while = 1;");
    assert_failure("if 1 { }");
    assert_failure("while (1) print 1;");
}

#[test]
fn both_branches_are_parsed_even_when_never_taken() {
    assert_failure("if (1) { print 1; } else { print ; }");
    assert_failure("while (0) { let ; }");
}

#[test]
fn an_unclosed_block_cites_its_opening_line() {
    match run("while (1) {\nprint 1;") {
        Err(Error::Parse(ParseError::ExpectedToken { found, line, .. })) => {
            assert_eq!(found, "end of input");
            assert_eq!(line, 1);
        },
        other => panic!("Expected a parse error, got: {other:?}"),
    }
}

#[test]
fn unrecognized_characters_are_lex_errors() {
    match run("let x = 1;\nlet y = @;") {
        Err(Error::Lex(LexError::UnrecognizedCharacter { character, line })) => {
            assert_eq!(character, '@');
            assert_eq!(line, 2);
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }

    // Only the two-character `!=` exists; a lone `!` does not.
    assert_failure("print !1;");
    assert_output("print 1 != 2;", "1\n");
}

#[test]
fn malformed_numbers_are_lex_errors() {
    match run("let x = 1.2.3;") {
        Err(Error::Lex(LexError::MalformedNumber { literal, line })) => {
            assert_eq!(literal, "1.2.3");
            assert_eq!(line, 1);
        },
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn unterminated_text_is_a_lex_error() {
    match run("print \"abc") {
        Err(Error::Lex(LexError::UnterminatedText { line })) => assert_eq!(line, 1),
        other => panic!("Expected a lex error, got: {other:?}"),
    }
}

#[test]
fn variable_state_persists_across_interpret_calls() {
    let mut out = Vec::new();
    let mut context = Context::new(&mut out);

    parva::interpret("let a = 2;", &mut context).unwrap();
    parva::interpret("print a + 1;", &mut context).unwrap();

    assert_eq!(context.get_variable("a"), Some(&Value::Number(2.0)));
    assert_eq!(String::from_utf8(out).unwrap(), "3\n");
}

#[test]
fn the_same_source_can_run_twice_in_one_context() {
    let mut out = Vec::new();
    let mut context = Context::new(&mut out);

    parva::interpret("let x = 1; print x;", &mut context).unwrap();
    parva::interpret("let x = 1; print x;", &mut context).unwrap();

    assert_eq!(context.get_variable("x"), Some(&Value::Number(1.0)));
    assert_eq!(String::from_utf8(out).unwrap(), "1\n1\n");
}

#[test]
fn a_failed_run_leaves_the_context_usable() {
    let mut out = Vec::new();
    let mut context = Context::new(&mut out);

    parva::interpret("let a = 1;", &mut context).unwrap();
    assert!(parva::interpret("print a / 0;", &mut context).is_err());
    parva::interpret("print a;", &mut context).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.pva").expect("missing file");
    assert_output(&script,
                  "5 is odd\n4 is even\n3 is odd\n2 is even\n1 is odd\ndone\n");
}

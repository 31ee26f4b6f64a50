use matlang::{
    ast::{BinaryOperator, Expr, Literal, Otherwise, Program, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::token::TokenKind, parser::Parser, value::ValueType},
};

fn parse(text: &str) -> Program {
    Parser::from_text(text).and_then(|mut p| p.parse_program())
                           .unwrap_or_else(|e| panic!("Parsing {text:?} failed: {e}"))
}

fn parse_error(text: &str) -> ParseError {
    match Parser::from_text(text).and_then(|mut p| p.parse_program()) {
        Ok(program) => panic!("Parsing {text:?} succeeded: {program:?}"),
        Err(e) => e,
    }
}

fn expression(text: &str) -> Expr {
    Parser::from_text(text).and_then(|mut p| p.parse_expression())
                           .unwrap_or_else(|e| panic!("Parsing {text:?} failed: {e}"))
}

fn integer(expr: &Expr) -> i64 {
    match expr {
        Expr::Literal { value: Literal::Integer(n),
                        .. } => *n,
        other => panic!("Expected integer literal, found {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::Binary { left, op, right, .. } = expression("1 + 2 * 3") else {
        panic!("Expected binary expression");
    };

    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(integer(&left), 1);
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let Expr::Binary { left, right, .. } = expression("8 - 4 - 2") else {
        panic!("Expected binary expression");
    };

    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Sub, .. }));
    assert_eq!(integer(&right), 2);
}

#[test]
fn exponentiation_is_right_associative() {
    let Expr::Binary { left, op, right, .. } = expression("2 ^ 3 ^ 2") else {
        panic!("Expected binary expression");
    };

    assert_eq!(op, BinaryOperator::Pow);
    assert_eq!(integer(&left), 2);
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Pow, .. }));
}

#[test]
fn logical_precedence() {
    let Expr::Binary { left, op, right, .. } = expression("a < 1 or b and not c") else {
        panic!("Expected binary expression");
    };

    assert_eq!(op, BinaryOperator::Or);
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Less, .. }));
    let Expr::Binary { op, right, .. } = *right else {
        panic!("Expected 'and'");
    };
    assert_eq!(op, BinaryOperator::And);
    assert!(matches!(*right, Expr::Unary { op: UnaryOperator::Not, .. }));
}

#[test]
fn prefix_operators_nest() {
    let Expr::Unary { op, operand, .. } = expression("det inverse transpose m") else {
        panic!("Expected unary expression");
    };

    assert_eq!(op, UnaryOperator::Det);
    assert!(matches!(*operand, Expr::Unary { op: UnaryOperator::Inverse, .. }));
}

#[test]
fn matrix_literals() {
    let Expr::MatrixLiteral { rows, .. } = expression("[[1, 2], [3, 4], [5, 6]]") else {
        panic!("Expected matrix literal");
    };
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 2));

    let Expr::MatrixLiteral { rows, .. } = expression("[1, 2, 3]") else {
        panic!("Expected matrix literal");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 3);

    let Expr::MatrixLiteral { rows, .. } = expression("[]") else {
        panic!("Expected matrix literal");
    };
    assert!(rows.is_empty());
}

#[test]
fn calls_with_arguments() {
    let Expr::Call(call) = expression("f(1, g(), x + 1)") else {
        panic!("Expected call");
    };

    assert_eq!(call.name, "f");
    assert_eq!(call.arguments.len(), 3);
    assert!(matches!(&call.arguments[1], Expr::Call(inner) if inner.arguments.is_empty()));
}

#[test]
fn declarations_and_assignments() {
    let program = parse("matrix m[2, 3]\ndouble d = 1.5\nd = d * 2\n");

    let Statement::Expression { expr: Expr::Declaration { var_type, name, size, value, .. },
                                .. } = &program.statements[0]
    else {
        panic!("Expected declaration");
    };
    assert_eq!(*var_type, ValueType::Matrix);
    assert_eq!(name, "m");
    assert!(size.is_some());
    assert!(value.is_none());

    assert!(matches!(&program.statements[1],
                     Statement::Expression { expr: Expr::Declaration { var_type: ValueType::Double,
                                                                       value: Some(_),
                                                                       .. },
                                             .. }));
    assert!(matches!(&program.statements[2],
                     Statement::Expression { expr: Expr::Assignment { .. }, .. }));
}

#[test]
fn call_statements() {
    let program = parse("print(1)\n");

    assert!(matches!(&program.statements[0], Statement::Call(call) if call.name == "print"));
}

#[test]
fn if_with_chained_otherwise() {
    let program = parse("if a:\n    1\notherwise if b:\n    2\notherwise:\n    3\n");
    assert_eq!(program.statements.len(), 1);

    let Statement::If { otherwise: Some(Otherwise::If(chained)),
                        .. } = &program.statements[0]
    else {
        panic!("Expected chained if");
    };
    assert!(matches!(chained.as_ref(),
                     Statement::If { otherwise: Some(Otherwise::Block(body)), .. } if body.len() == 1));
}

#[test]
fn loops() {
    let program = parse("loop i = 0 to 10 step 2:\n    i\nas_long_as x:\n    x = 0\n");

    let Statement::Loop { counter, step, body, .. } = &program.statements[0] else {
        panic!("Expected loop");
    };
    assert_eq!(counter, "i");
    assert!(step.is_some());
    assert_eq!(body.len(), 1);
    assert!(matches!(&program.statements[1], Statement::AsLongAs { .. }));
}

#[test]
fn condition_with_cases_and_default() {
    let program = parse("condition x:\n    case 1:\n        10\n    case 2:\n        20\n    default:\n        0\ny\n");

    assert_eq!(program.statements.len(), 2);
    let Statement::Condition { cases, default, .. } = &program.statements[0] else {
        panic!("Expected condition");
    };
    assert_eq!(cases.len(), 2);
    assert_eq!(integer(&cases[1].value), 2);
    assert!(default.is_some());
}

#[test]
fn function_declarations() {
    let program = parse("function double scale(matrix m, double factor = 2.0):\n    return 1.0\nfunction log():\n    return\n");

    let Statement::Function(function) = &program.statements[0] else {
        panic!("Expected function");
    };
    assert_eq!(function.name, "scale");
    assert_eq!(function.return_type, Some(ValueType::Double));
    assert_eq!(function.arguments.len(), 2);
    assert!(function.arguments[0].default.is_none());
    assert!(function.arguments[1].default.is_some());

    let Statement::Function(function) = &program.statements[1] else {
        panic!("Expected function");
    };
    assert_eq!(function.return_type, None);
    assert!(matches!(function.body[0], Statement::Return { value: None, .. }));
}

#[test]
fn block_may_end_at_end_of_input() {
    let program = parse("if x:\n    y");

    let Statement::If { body, .. } = &program.statements[0] else {
        panic!("Expected if");
    };
    assert_eq!(body.len(), 1);
}

#[test]
fn nested_blocks_close_together() {
    let program = parse("function f():\n    if a:\n        loop i = 0 to 2:\n            i\nz\n");

    assert_eq!(program.statements.len(), 2);
}

#[test]
fn nodes_report_the_kind_of_their_token() {
    let program = parse("matrix m = [[1]]\nm = det m\nif m:\n    m\nloop i = 0 to 2:\n    i\nf(1)\n");
    let kinds: Vec<_> = program.statements.iter().map(Statement::token_kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::MatrixType,
                    TokenKind::Identifier,
                    TokenKind::If,
                    TokenKind::Loop,
                    TokenKind::Identifier]);

    assert_eq!(expression("2 * 3").token_kind(), TokenKind::Multiplicative);
    assert_eq!(expression("2 ^ 3").token_kind(), TokenKind::Exponent);
    assert_eq!(expression("1 < 2 and 1").token_kind(), TokenKind::Logical);
    assert_eq!(expression("not 1").token_kind(), TokenKind::Logical);
    assert_eq!(expression("transpose [1]").token_kind(), TokenKind::MatrixOperator);
    assert_eq!(expression("[1, 2]").token_kind(), TokenKind::LeftBracket);
    assert_eq!(expression("\"a\"").token_kind(), TokenKind::String);
    assert_eq!(expression("1.5").token_kind(), TokenKind::Double);
}

#[test]
fn unexpected_token_reports_kind_and_position() {
    match parse_error("integer x = \n") {
        ParseError::UnexpectedToken { found, position, .. } => {
            assert_eq!(found, TokenKind::NextLine);
            assert_eq!(position.line, 1);
        },
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn grammar_violations() {
    parse_error("if x\n    y\n");
    parse_error("if x:\ny\n");
    parse_error("loop i = 0 10:\n    i\n");
    parse_error("x + 1 = 2\n");
    parse_error("f(1, 2\n");
    parse_error("a @ b\n");
    parse_error("/ 2\n");
    parse_error("condition x:\n    1\n");
    parse_error("integer[2, 2] m\n");
}

#[test]
fn lexical_errors_surface_through_the_parser() {
    assert!(matches!(parse_error("text t = \"open\n"), ParseError::Lexical(_)));
}

#[test]
fn expression_input_must_end_after_the_expression() {
    assert!(Parser::from_text("1 + 2\n3").and_then(|mut p| p.parse_expression())
                                          .is_err());
}

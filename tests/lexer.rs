use matlang::{
    error::LexicalError,
    interpreter::{
        lexer::{
            Lexer, MAX_LITERAL_LENGTH,
            token::{Subtype, Token, TokenKind, TokenValue},
        },
        source::StringSource,
    },
};

fn tokens(text: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(StringSource::new(text));
    let mut tokens = Vec::new();
    loop {
        let token = lexer.get_token()
                         .unwrap_or_else(|e| panic!("Lexing {text:?} failed: {e}"));
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

fn kinds(text: &str) -> Vec<TokenKind> {
    tokens(text).into_iter().map(|t| t.kind).collect()
}

fn first_error(text: &str) -> LexicalError {
    let mut lexer = Lexer::new(StringSource::new(text));
    for _ in 0..1000 {
        match lexer.get_token() {
            Ok(token) if token.kind == TokenKind::EndOfFile => break,
            Ok(_) => {},
            Err(e) => return e,
        }
    }
    panic!("Lexing {text:?} succeeded but was expected to fail")
}

#[test]
fn nested_blocks_open_and_close_once_per_level() {
    use TokenKind::{CloseBlock, Colon, EndOfFile, Identifier, NextLine, OpenBlock};

    assert_eq!(kinds("a:\n  b:\n    c\nd\n"),
               vec![Identifier, Colon, NextLine, OpenBlock, Identifier, Colon, NextLine,
                    OpenBlock, Identifier, NextLine, CloseBlock, CloseBlock, Identifier,
                    NextLine, EndOfFile]);
}

#[test]
fn end_of_input_closes_all_open_blocks() {
    let mut lexer = Lexer::new(StringSource::new("a:\n\tb:\n\t\tc"));
    let mut opens = 0;
    let mut closes = 0;

    loop {
        let token = lexer.get_token().unwrap();
        match token.kind {
            TokenKind::OpenBlock => opens += 1,
            TokenKind::CloseBlock => closes += 1,
            TokenKind::EndOfFile => break,
            _ => {},
        }
    }

    assert_eq!(opens, 2);
    assert_eq!(closes, 2);
    assert_eq!(lexer.indent_depth(), 0);
}

#[test]
fn end_of_file_repeats() {
    let mut lexer = Lexer::new(StringSource::new("x"));
    let kinds: Vec<_> = (0..5).map(|_| lexer.get_token().unwrap().kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Identifier,
                    TokenKind::NextLine,
                    TokenKind::EndOfFile,
                    TokenKind::EndOfFile,
                    TokenKind::EndOfFile]);
}

#[test]
fn blank_and_comment_lines_produce_nothing() {
    use TokenKind::{EndOfFile, Identifier, NextLine};

    assert_eq!(kinds("x\n\n   # note\n// other note\n\ny // trailing\n"),
               vec![Identifier, NextLine, Identifier, NextLine, EndOfFile]);
}

#[test]
fn blank_lines_inside_blocks_keep_the_block_open() {
    use TokenKind::{CloseBlock, Colon, EndOfFile, Identifier, NextLine, OpenBlock};

    assert_eq!(kinds("a:\n    b\n\n    c\n"),
               vec![Identifier, Colon, NextLine, OpenBlock, Identifier, NextLine, Identifier,
                    NextLine, CloseBlock, EndOfFile]);
}

#[test]
fn mixing_tabs_and_spaces_fails() {
    assert!(matches!(first_error("a:\n  b\n\tc\n"),
                     LexicalError::InconsistentIndentation { .. }));
}

#[test]
fn dedent_to_unknown_level_fails() {
    let error = first_error("a:\n    b\n  c\n");

    match error {
        LexicalError::InconsistentIndentation { position } => assert_eq!(position.line, 3),
        other => panic!("Unexpected error {other:?}"),
    }
}

#[test]
fn lines_starting_with_a_slash_follow_indentation() {
    use TokenKind::{CloseBlock, Colon, EndOfFile, Identifier, Multiplicative, NextLine, OpenBlock};

    assert_eq!(kinds("a:\n    b\n/ c\n"),
               vec![Identifier, Colon, NextLine, OpenBlock, Identifier, NextLine, CloseBlock,
                    Multiplicative, Identifier, NextLine, EndOfFile]);
    assert_eq!(kinds("a:\n    / b\n"),
               vec![Identifier, Colon, NextLine, OpenBlock, Multiplicative, Identifier,
                    NextLine, CloseBlock, EndOfFile]);
    assert!(matches!(first_error("a:\n    b\n  / c\n"),
                     LexicalError::InconsistentIndentation { .. }));
}

#[test]
fn string_literals_resolve_escapes() {
    let tokens = tokens(r#""a\tb\\" 'it\'s' "\?\"""#);

    assert_eq!(tokens[0].value, TokenValue::Text("a\tb\\".to_string()));
    assert_eq!(tokens[1].value, TokenValue::Text("it's".to_string()));
    assert_eq!(tokens[2].value, TokenValue::Text("?\"".to_string()));
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::String));
}

#[test]
fn malformed_strings_fail() {
    assert!(matches!(first_error("\"open\n"),
                     LexicalError::MalformedStringLiteral { .. }));
    assert!(matches!(first_error("'open"), LexicalError::MalformedStringLiteral { .. }));
    assert!(matches!(first_error(r#""\q""#), LexicalError::MalformedStringLiteral { .. }));
}

#[test]
fn overlong_literals_fail() {
    let string = format!("\"{}\"", "a".repeat(MAX_LITERAL_LENGTH));
    assert!(matches!(first_error(&string), LexicalError::TooLongLiteral { .. }));

    let comment = format!("# {}", "a".repeat(MAX_LITERAL_LENGTH));
    assert!(matches!(first_error(&comment), LexicalError::TooLongLiteral { .. }));
}

#[test]
fn numbers() {
    let tokens = tokens("42 3.25 12. 0");

    assert_eq!(tokens[0].value, TokenValue::Integer(42));
    assert_eq!(tokens[1].value, TokenValue::Double(3.25));
    assert_eq!(tokens[2].value, TokenValue::Double(12.0));
    assert_eq!(tokens[3].value, TokenValue::Integer(0));
}

#[test]
fn integer_overflow_is_rejected_unless_fractional() {
    assert!(matches!(first_error("99999999999999999999"),
                     LexicalError::IntegerOverflow { .. }));

    let tokens = tokens("9223372036854775807 99999999999999999999.5");
    assert_eq!(tokens[0].value, TokenValue::Integer(i64::MAX));
    assert_eq!(tokens[1].kind, TokenKind::Double);
    assert_eq!(tokens[1].value, TokenValue::Double(1e20));
}

#[test]
fn operators_carry_subtypes() {
    let subtypes: Vec<_> = tokens("<= < >= > == != ! + - * / and or not")
        .into_iter()
        .filter_map(|t| t.subtype)
        .collect();

    assert_eq!(subtypes,
               vec![Subtype::LessEqual,
                    Subtype::Less,
                    Subtype::GreaterEqual,
                    Subtype::Greater,
                    Subtype::Equal,
                    Subtype::NotEqual,
                    Subtype::Not,
                    Subtype::Plus,
                    Subtype::Minus,
                    Subtype::Multiply,
                    Subtype::Divide,
                    Subtype::And,
                    Subtype::Or,
                    Subtype::Not]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::{
        AsLongAs, Condition, EndOfFile, Function, Identifier, IntegerType, MatrixOperator,
        MatrixType, NextLine, Return,
    };

    assert_eq!(kinds("integer matrix function return as_long_as condition det inverse integers x_1"),
               vec![IntegerType, MatrixType, Function, Return, AsLongAs, Condition,
                    MatrixOperator, MatrixOperator, Identifier, Identifier, NextLine, EndOfFile]);
}

#[test]
fn punctuation() {
    use TokenKind::{
        Assign, Colon, Comma, Dot, EndOfFile, Exponent, LeftBracket, LeftParen, NextLine,
        RightBracket, RightParen,
    };

    assert_eq!(kinds("( ) [ ] : . , ^ ="),
               vec![LeftParen, RightParen, LeftBracket, RightBracket, Colon, Dot, Comma,
                    Exponent, Assign, NextLine, EndOfFile]);
}

#[test]
fn unknown_characters_are_unrecognized() {
    let tokens = tokens("a @ b");

    assert_eq!(tokens[1].kind, TokenKind::Unrecognized);
    assert_eq!(tokens[1].value, TokenValue::Text("@".to_string()));
}

#[test]
fn tokens_record_line_and_column() {
    let tokens = tokens("a:\n  bc + 1\n");
    let bc = tokens.iter()
                   .find(|t| t.value == TokenValue::Text("bc".to_string()))
                   .unwrap();

    assert_eq!(bc.position.line, 2);
    assert_eq!(bc.position.column, 2);
    assert_eq!(bc.position.to_string(), "2:2");
}

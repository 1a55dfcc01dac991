use pasci::errors::{PasError, PasResult};
use pasci::lexer::scan;
use pasci::token::Token;

#[test]
fn test_number_literals() -> PasResult<()> {
    let source = "123 456 0 3.14";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::IntegerConst(123), 1),
            (Token::IntegerConst(456), 1),
            (Token::IntegerConst(0), 1),
            (Token::RealConst(3.14), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_trailing_dot_becomes_real() -> PasResult<()> {
    // The dot is consumed into the constant, so no Dot token follows.
    let source = "10.";
    let tokens = scan(source)?;
    assert_eq!(tokens, vec![(Token::RealConst(10.0), 1)]);
    Ok(())
}

#[test]
fn test_keywords_match_case_insensitively() -> PasResult<()> {
    let source = "PROGRAM program Begin beGIN END end div DIV var procedure integer real";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Program, 1),
            (Token::Program, 1),
            (Token::Begin, 1),
            (Token::Begin, 1),
            (Token::End, 1),
            (Token::End, 1),
            (Token::IntegerDiv, 1),
            (Token::IntegerDiv, 1),
            (Token::Var, 1),
            (Token::Procedure, 1),
            (Token::Integer, 1),
            (Token::Real, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_identifiers_keep_original_case() -> PasResult<()> {
    let source = "Number nUmBeR x2";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Ident("Number".to_string()), 1),
            (Token::Ident("nUmBeR".to_string()), 1),
            (Token::Ident("x2".to_string()), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_assign_versus_colon() -> PasResult<()> {
    let source = "x := 1; y : INTEGER";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Ident("x".to_string()), 1),
            (Token::Assign, 1),
            (Token::IntegerConst(1), 1),
            (Token::Semicolon, 1),
            (Token::Ident("y".to_string()), 1),
            (Token::Colon, 1),
            (Token::Integer, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_operators_and_punctuation() -> PasResult<()> {
    let source = "+ - * / ( ) , ; .";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Plus, 1),
            (Token::Minus, 1),
            (Token::Multiply, 1),
            (Token::FloatDiv, 1),
            (Token::LParen, 1),
            (Token::RParen, 1),
            (Token::Comma, 1),
            (Token::Semicolon, 1),
            (Token::Dot, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_comment_skipping() -> PasResult<()> {
    let source = "BEGIN {this is ignored} a := 1; END.";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Begin, 1),
            (Token::Ident("a".to_string()), 1),
            (Token::Assign, 1),
            (Token::IntegerConst(1), 1),
            (Token::Semicolon, 1),
            (Token::End, 1),
            (Token::Dot, 1),
        ]
    );
    Ok(())
}

#[test]
fn test_multi_line_comment_tracks_lines() -> PasResult<()> {
    let source = "
VAR x : INTEGER; { spans
two lines } BEGIN END.
";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (Token::Var, 2),
            (Token::Ident("x".to_string()), 2),
            (Token::Colon, 2),
            (Token::Integer, 2),
            (Token::Semicolon, 2),
            (Token::Begin, 3),
            (Token::End, 3),
            (Token::Dot, 3),
        ]
    );
    Ok(())
}

#[test]
fn test_unterminated_comment_swallows_rest_of_input() -> PasResult<()> {
    let source = "BEGIN { never closed END.";
    let tokens = scan(source)?;
    assert_eq!(tokens, vec![(Token::Begin, 1)]);
    Ok(())
}

#[test]
fn test_unknown_character() {
    let source = "x := 1 @ 2";
    let result = scan(source);
    if let Err(PasError::UnknownCharacter { ch, line }) = result {
        assert_eq!(ch, '@');
        assert_eq!(line, 1);
    } else {
        panic!("Expected an UnknownCharacter error, but got: {:?}", result);
    }
}

#[test]
fn test_tab_is_not_whitespace() {
    // Only space and newline are skipped.
    let source = "x\t:= 1";
    let result = scan(source);
    if let Err(PasError::UnknownCharacter { ch, line }) = result {
        assert_eq!(ch, '\t');
        assert_eq!(line, 1);
    } else {
        panic!("Expected an UnknownCharacter error, but got: {:?}", result);
    }
}

#[test]
fn test_scanning_is_deterministic() -> PasResult<()> {
    let source = "
PROGRAM Part;
VAR number : INTEGER;
BEGIN
    number := 2 + 3.5 * (1 - 4);
END.
";
    assert_eq!(scan(source)?, scan(source)?);
    Ok(())
}

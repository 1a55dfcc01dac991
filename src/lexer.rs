use crate::errors::{PasError, PasResult};
use crate::token::Token;
use crate::LineNumber;
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            state: LineNumber::default(),
        }
    }

    pub fn line(&self) -> usize {
        self.state.line
    }

    /// Produce the next token together with the line it starts on. Once the
    /// input is exhausted this keeps returning `Token::Eof`.
    pub fn next_token(&mut self) -> PasResult<(Token, usize)> {
        self.skip_whitespace_and_comments();
        let line = self.state.line;
        let token = match self.chars.peek() {
            None => Token::Eof,
            Some(&ch) if ch.is_ascii_alphabetic() => self.scan_identifier(),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(line)?,
            Some(&':') => self.scan_colon(),
            Some(&ch) => self.scan_single_char(ch, line)?,
        };
        Ok((token, line))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.chars.peek() {
                Some(&' ') => {
                    self.chars.next();
                }
                Some(&'\n') => {
                    self.state.line += 1;
                    self.chars.next();
                }
                Some(&'{') => self.scan_comment(),
                _ => break,
            }
        }
    }

    // A comment missing its closing brace swallows the rest of the input and
    // the stream ends in Eof.
    fn scan_comment(&mut self) {
        self.chars.next(); // Consume '{'
        for ch in self.chars.by_ref() {
            if ch == '\n' {
                self.state.line += 1;
            } else if ch == '}' {
                return;
            }
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() {
                identifier.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        self.keyword_or_identifier(identifier)
    }

    // Keywords match case-insensitively; anything else keeps its original
    // spelling as an identifier.
    fn keyword_or_identifier(&self, identifier: String) -> Token {
        match identifier.to_uppercase().as_str() {
            "PROGRAM" => Token::Program,
            "VAR" => Token::Var,
            "PROCEDURE" => Token::Procedure,
            "DIV" => Token::IntegerDiv,
            "INTEGER" => Token::Integer,
            "REAL" => Token::Real,
            "BEGIN" => Token::Begin,
            "END" => Token::End,
            _ => Token::Ident(identifier),
        }
    }

    fn scan_number(&mut self, line: usize) -> PasResult<Token> {
        let mut literal = String::new();
        self.scan_digits(&mut literal);
        if self.chars.peek() == Some(&'.') {
            literal.push('.');
            self.chars.next();
            self.scan_digits(&mut literal);
            literal
                .parse::<f64>()
                .map(Token::RealConst)
                .map_err(|_| PasError::InvalidNumber { literal, line })
        } else {
            literal
                .parse::<i64>()
                .map(Token::IntegerConst)
                .map_err(|_| PasError::InvalidNumber { literal, line })
        }
    }

    fn scan_digits(&mut self, literal: &mut String) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn scan_colon(&mut self) -> Token {
        self.chars.next(); // Consume ':'
        if self.chars.peek() == Some(&'=') {
            self.chars.next(); // Consume '='
            Token::Assign
        } else {
            Token::Colon
        }
    }

    fn scan_single_char(&mut self, ch: char, line: usize) -> PasResult<Token> {
        self.chars.next(); // Consume the character
        let token = match ch {
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::FloatDiv,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '.' => Token::Dot,
            _ => return Err(PasError::UnknownCharacter { ch, line }),
        };
        Ok(token)
    }
}

/// Scan the whole source up front. The terminating `Eof` is not included.
pub fn scan(source: &str) -> PasResult<Vec<(Token, usize)>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let (token, line) = lexer.next_token()?;
        if token == Token::Eof {
            return Ok(tokens);
        }
        tokens.push((token, line));
    }
}

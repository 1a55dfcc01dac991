#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    IntegerConst(i64),
    RealConst(f64),
    Program,
    Var,
    Procedure,
    Integer,
    Real,
    Begin,
    End,
    Assign,
    Semicolon,
    Colon,
    Comma,
    Plus,
    Minus,
    Multiply,
    IntegerDiv,
    FloatDiv,
    LParen,
    RParen,
    Dot,
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

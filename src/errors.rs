use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PasError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical analysis errors
    UnknownCharacter {
        ch: char,
        line: usize,
    },
    InvalidNumber {
        literal: String,
        line: usize,
    },

    // Parsing errors
    SyntaxError {
        expected: String,
        found: String,
        line: usize,
    },
    NestingTooDeep {
        line: usize,
    },

    // Semantic analysis errors
    DuplicateDeclaration {
        name: String,
        line: usize,
    },
    UndeclaredVariable {
        name: String,
        line: usize,
    },

    // Evaluation errors
    UnboundVariable {
        name: String,
        line: usize,
    },
    DivisionByZero {
        line: usize,
    },

    // Visitor dispatch errors
    UnsupportedNode {
        node: String,
    },
}

impl PasError {
    /// Create a syntax error from the expected/found token pair
    pub fn syntax_error(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        PasError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    /// Create a dispatch error carrying the unhandled node's variant name
    pub fn unsupported_node(node: impl Into<String>) -> Self {
        PasError::UnsupportedNode { node: node.into() }
    }
}

impl fmt::Display for PasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            PasError::IoError(err) => write!(f, "I/O error: {}", err),

            PasError::UnknownCharacter { ch, line } => {
                write!(f, "Unknown character '{}' at line {}", ch, line)
            }
            PasError::InvalidNumber { literal, line } => {
                write!(f, "Invalid number '{}' at line {}", literal, line)
            }

            PasError::SyntaxError {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Syntax error at line {}: expected '{}', found '{}'",
                    line, expected, found
                )
            }
            PasError::NestingTooDeep { line } => {
                write!(f, "Nesting too deep at line {}", line)
            }

            PasError::DuplicateDeclaration { name, line } => {
                write!(f, "Variable '{}' already declared at line {}", name, line)
            }
            PasError::UndeclaredVariable { name, line } => {
                write!(f, "Undeclared variable '{}' at line {}", name, line)
            }

            PasError::UnboundVariable { name, line } => {
                write!(f, "Variable '{}' has no value at line {}", name, line)
            }
            PasError::DivisionByZero { line } => {
                write!(f, "Division by zero at line {}", line)
            }

            PasError::UnsupportedNode { node } => {
                write!(f, "No handler for AST node '{}'", node)
            }
        }
    }
}

impl std::error::Error for PasError {}

impl From<io::Error> for PasError {
    fn from(err: io::Error) -> Self {
        PasError::IoError(err)
    }
}

// Type alias for Result with PasError
pub type PasResult<T> = Result<T, PasError>;

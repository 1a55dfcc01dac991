use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod semantic;
pub mod token;
pub mod value;
pub mod visitors;

pub const VERSION: &str = "0.1.0";

/// 1-based line counter threaded through the lexer.
pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::ast::Program;
use crate::errors::{PasError, PasResult};
use crate::interpreter::{GlobalStore, Interpreter};
use crate::semantic::{SemanticAnalyzer, SymbolTable};
use crate::token::Token;

pub fn read(filename: &Path) -> PasResult<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) => {
            if !ext.eq("pas") {
                return Err(PasError::FileReadError(
                    "File must have a .pas extension".to_string(),
                ));
            }
        }
        None => {
            return Err(PasError::FileReadError(
                "File must have a .pas extension".to_string(),
            ));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Scan the source into its full token stream.
pub fn tokenize(source: &str) -> PasResult<Vec<(Token, usize)>> {
    lexer::scan(source)
}

/// Parse the source into the AST root.
pub fn parse(source: &str) -> PasResult<Program> {
    let lexer = lexer::Lexer::new(source);
    parser::Parser::new(lexer)?.parse()
}

/// Build and validate the symbol table for a parsed program.
pub fn analyze(program: &Program) -> PasResult<SymbolTable> {
    SemanticAnalyzer::new().analyze(program)
}

/// Execute a parsed program, producing the final variable store.
pub fn run(program: &Program) -> PasResult<GlobalStore> {
    Interpreter::new().run(program)
}

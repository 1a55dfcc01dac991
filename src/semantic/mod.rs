pub mod analyzer;
pub mod symboltable;

pub use analyzer::SemanticAnalyzer;
pub use symboltable::{Symbol, SymbolKind, SymbolTable};

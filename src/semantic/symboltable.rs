use crate::ast::TypeName;
use crate::errors::{PasError, PasResult};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    /// One of the builtin type names the table is seeded with.
    BuiltinType,
    /// A declared variable, carrying its declared type.
    Variable { type_name: TypeName },
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub line_number: usize,
}

impl Symbol {
    pub fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::BuiltinType,
            line_number: 0,
        }
    }

    pub fn variable(name: &str, type_name: TypeName, line_number: usize) -> Self {
        Self {
            name: name.to_string(),
            kind: SymbolKind::Variable { type_name },
            line_number,
        }
    }
}

/// One flat table for the whole program. Procedure declarations exist in the
/// grammar but never open a scope, so there is no scope chain to model.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// A fresh table already containing the INTEGER and REAL builtins.
    pub fn new() -> Self {
        let mut symbols = HashMap::new();
        symbols.insert("INTEGER".to_string(), Symbol::builtin("INTEGER"));
        symbols.insert("REAL".to_string(), Symbol::builtin("REAL"));
        Self { symbols }
    }

    /// Insert a symbol, rejecting redeclarations. The builtins are seeded at
    /// construction and therefore can never be replaced either.
    pub fn insert(&mut self, symbol: Symbol) -> PasResult<()> {
        if self.symbols.contains_key(&symbol.name) {
            return Err(PasError::DuplicateDeclaration {
                name: symbol.name,
                line: symbol.line_number,
            });
        }
        self.symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Names are case-sensitive as written in the source.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }

    pub fn print_symbols(&self) {
        let mut names: Vec<&String> = self.symbols.keys().collect();
        names.sort();
        println!("{:-<46}", "");
        println!("| {:<20} | {:<19} |", "Name", "Type");
        println!("{:-<46}", "");
        for name in names {
            let symbol = &self.symbols[name];
            let kind = match &symbol.kind {
                SymbolKind::BuiltinType => "builtin".to_string(),
                SymbolKind::Variable { type_name } => type_name.to_string(),
            };
            println!("| {:<20} | {:<19} |", name, kind);
        }
        println!("{:-<46}", "");
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

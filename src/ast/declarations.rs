use crate::ast::{Block, Node, Var};
use crate::errors::PasResult;
use crate::visitors::AstVisitor;
use std::fmt;

/// The two builtin type names. Symbol table entries refer back to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Integer,
    Real,
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Integer => write!(f, "INTEGER"),
            TypeName::Real => write!(f, "REAL"),
        }
    }
}

#[derive(Clone)]
pub struct TypeSpec {
    pub name: TypeName,
}

impl TypeSpec {
    pub fn new(name: TypeName) -> Self {
        Self { name }
    }
}

impl Node for TypeSpec {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_type_spec(self)
    }

    fn print(&self) {
        print!("{}", self.name);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// One declaration per variable name; a source line declaring several names
/// with one type is flattened into one of these per name.
pub struct VarDecl {
    pub var: Var,
    pub type_spec: TypeSpec,
}

impl VarDecl {
    pub fn new(var: Var, type_spec: TypeSpec) -> Self {
        Self { var, type_spec }
    }
}

impl Node for VarDecl {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_var_decl(self)
    }

    fn print(&self) {
        println!("VAR {} : {};", self.var.name, self.type_spec.name);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// Parsed and retained, but its body is skipped by both later passes.
pub struct ProcedureDecl {
    pub name: String,
    pub block: Block,
}

impl ProcedureDecl {
    pub fn new(name: String, block: Block) -> Self {
        Self { name, block }
    }
}

impl Node for ProcedureDecl {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_procedure_decl(self)
    }

    fn print(&self) {
        println!("PROCEDURE {};", self.name);
        self.block.print();
        println!(";");
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

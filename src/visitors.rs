use crate::ast::{
    Assign, BinOp, Block, Compound, NoOp, Number, ProcedureDecl, Program, TypeSpec, UnaryOp, Var,
    VarDecl,
};
use crate::errors::{PasError, PasResult};
use crate::value::Value;

/// Double dispatch over AST nodes: `Node::accept` calls back into the method
/// matching the node's variant. Every method has a default body that fails
/// with the variant's name, so a pass must override the complete set of
/// handlers for the nodes it can encounter.
pub trait AstVisitor {
    fn visit_program(&mut self, _program: &Program) -> PasResult<()> {
        Err(PasError::unsupported_node("Program"))
    }

    fn visit_block(&mut self, _block: &Block) -> PasResult<()> {
        Err(PasError::unsupported_node("Block"))
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) -> PasResult<()> {
        Err(PasError::unsupported_node("VarDecl"))
    }

    fn visit_type_spec(&mut self, _spec: &TypeSpec) -> PasResult<()> {
        Err(PasError::unsupported_node("TypeSpec"))
    }

    fn visit_procedure_decl(&mut self, _decl: &ProcedureDecl) -> PasResult<()> {
        Err(PasError::unsupported_node("ProcedureDecl"))
    }

    fn visit_compound(&mut self, _compound: &Compound) -> PasResult<()> {
        Err(PasError::unsupported_node("Compound"))
    }

    fn visit_assign(&mut self, _stmt: &Assign) -> PasResult<()> {
        Err(PasError::unsupported_node("Assign"))
    }

    fn visit_no_op(&mut self, _stmt: &NoOp) -> PasResult<()> {
        Err(PasError::unsupported_node("NoOp"))
    }

    fn visit_var(&mut self, _var: &Var) -> PasResult<Value> {
        Err(PasError::unsupported_node("Var"))
    }

    fn visit_number(&mut self, _number: &Number) -> PasResult<Value> {
        Err(PasError::unsupported_node("Number"))
    }

    fn visit_binary_op(&mut self, _op: &BinOp) -> PasResult<Value> {
        Err(PasError::unsupported_node("BinOp"))
    }

    fn visit_unary_op(&mut self, _op: &UnaryOp) -> PasResult<Value> {
        Err(PasError::unsupported_node("UnaryOp"))
    }
}

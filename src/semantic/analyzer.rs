use crate::ast::{
    Assign, BinOp, Block, Compound, ExpressionNode, NoOp, Node, Number, ProcedureDecl, Program,
    TypeSpec, UnaryOp, Var, VarDecl,
};
use crate::errors::{PasError, PasResult};
use crate::semantic::symboltable::{Symbol, SymbolTable};
use crate::value::Value;
use crate::visitors::AstVisitor;

/// Walks the tree once, populating a fresh symbol table from declarations and
/// checking every variable reference against it. The tree is read-only; the
/// table is the only thing this pass mutates.
pub struct SemanticAnalyzer {
    table: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    pub fn analyze(mut self, program: &Program) -> PasResult<SymbolTable> {
        self.visit_program(program)?;
        Ok(self.table)
    }

    fn check_reference(&self, var: &Var) -> PasResult<()> {
        if !self.table.contains(&var.name) {
            return Err(PasError::UndeclaredVariable {
                name: var.name.clone(),
                line: var.line,
            });
        }
        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for SemanticAnalyzer {
    fn visit_program(&mut self, program: &Program) -> PasResult<()> {
        self.visit_block(&program.block)
    }

    fn visit_block(&mut self, block: &Block) -> PasResult<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }
        self.visit_compound(&block.compound)
    }

    fn visit_var_decl(&mut self, decl: &VarDecl) -> PasResult<()> {
        // The declared type is one of the builtins the table is seeded with.
        debug_assert!(self.table.contains(&decl.type_spec.name.to_string()));
        self.table.insert(Symbol::variable(
            &decl.var.name,
            decl.type_spec.name,
            decl.var.line,
        ))
    }

    fn visit_type_spec(&mut self, _spec: &TypeSpec) -> PasResult<()> {
        Ok(())
    }

    // Procedures are registered in the tree but never entered, so their
    // bodies are not validated against the flat table.
    fn visit_procedure_decl(&mut self, _decl: &ProcedureDecl) -> PasResult<()> {
        Ok(())
    }

    fn visit_compound(&mut self, compound: &Compound) -> PasResult<()> {
        for child in &compound.children {
            child.accept(self)?;
        }
        Ok(())
    }

    fn visit_assign(&mut self, stmt: &Assign) -> PasResult<()> {
        // The assignment target must already be declared; there is no
        // assignment-defines-variable behavior.
        self.visit_var(&stmt.left)?;
        ExpressionNode::accept(stmt.right.as_ref(), self)?;
        Ok(())
    }

    fn visit_no_op(&mut self, _stmt: &NoOp) -> PasResult<()> {
        Ok(())
    }

    // This pass only validates names; the value channel of the expression
    // handlers is unused and a placeholder is returned.
    fn visit_var(&mut self, var: &Var) -> PasResult<Value> {
        self.check_reference(var)?;
        Ok(Value::Int(0))
    }

    fn visit_number(&mut self, number: &Number) -> PasResult<Value> {
        Ok(number.value)
    }

    fn visit_binary_op(&mut self, op: &BinOp) -> PasResult<Value> {
        ExpressionNode::accept(op.left.as_ref(), self)?;
        ExpressionNode::accept(op.right.as_ref(), self)?;
        Ok(Value::Int(0))
    }

    fn visit_unary_op(&mut self, op: &UnaryOp) -> PasResult<Value> {
        ExpressionNode::accept(op.expr.as_ref(), self)?;
        Ok(Value::Int(0))
    }
}

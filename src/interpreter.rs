use crate::ast::{
    Assign, BinOp, BinaryOperator, Block, Compound, ExpressionNode, NoOp, Node, Number,
    ProcedureDecl, Program, TypeSpec, UnaryOp, UnaryOperator, Var, VarDecl,
};
use crate::errors::{PasError, PasResult};
use crate::value::Value;
use crate::visitors::AstVisitor;
use std::collections::HashMap;

/// The final mapping of variable names to computed values.
pub type GlobalStore = HashMap<String, Value>;

/// Tree-walking evaluator. Walks the same read-only tree the analyzer walks;
/// the global store is the only thing this pass mutates, and only through
/// assignment statements.
pub struct Interpreter {
    globals: GlobalStore,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            globals: HashMap::new(),
        }
    }

    pub fn run(mut self, program: &Program) -> PasResult<GlobalStore> {
        self.visit_program(program)?;
        Ok(self.globals)
    }

    fn eval(&mut self, expr: &dyn ExpressionNode) -> PasResult<Value> {
        ExpressionNode::accept(expr, self)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl AstVisitor for Interpreter {
    fn visit_program(&mut self, program: &Program) -> PasResult<()> {
        self.visit_block(&program.block)
    }

    fn visit_block(&mut self, block: &Block) -> PasResult<()> {
        for declaration in &block.declarations {
            declaration.accept(self)?;
        }
        self.visit_compound(&block.compound)
    }

    fn visit_var_decl(&mut self, _decl: &VarDecl) -> PasResult<()> {
        Ok(())
    }

    fn visit_type_spec(&mut self, _spec: &TypeSpec) -> PasResult<()> {
        Ok(())
    }

    // Procedure bodies are never scheduled for execution.
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
        let value = self.eval(stmt.right.as_ref())?;
        self.globals.insert(stmt.left.name.clone(), value);
        Ok(())
    }

    fn visit_no_op(&mut self, _stmt: &NoOp) -> PasResult<()> {
        Ok(())
    }

    // Presence is an explicit key check, so a stored zero reads back as zero
    // instead of masquerading as unset.
    fn visit_var(&mut self, var: &Var) -> PasResult<Value> {
        self.globals
            .get(&var.name)
            .copied()
            .ok_or_else(|| PasError::UnboundVariable {
                name: var.name.clone(),
                line: var.line,
            })
    }

    fn visit_number(&mut self, number: &Number) -> PasResult<Value> {
        Ok(number.value)
    }

    fn visit_binary_op(&mut self, op: &BinOp) -> PasResult<Value> {
        let left = self.eval(op.left.as_ref())?;
        let right = self.eval(op.right.as_ref())?;
        match op.op {
            BinaryOperator::Add => Ok(left.add(right)),
            BinaryOperator::Subtract => Ok(left.sub(right)),
            BinaryOperator::Multiply => Ok(left.mul(right)),
            BinaryOperator::IntegerDiv => left
                .checked_int_div(right)
                .ok_or(PasError::DivisionByZero { line: op.line }),
            BinaryOperator::FloatDiv => Ok(left.real_div(right)),
        }
    }

    fn visit_unary_op(&mut self, op: &UnaryOp) -> PasResult<Value> {
        let value = self.eval(op.expr.as_ref())?;
        match op.op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Minus => Ok(value.neg()),
        }
    }
}

use crate::ast::{ExpressionNode, Node};
use crate::errors::PasResult;
use crate::value::Value;
use crate::visitors::AstVisitor;

pub struct Var {
    pub name: String,
    pub line: usize,
}

impl Var {
    pub fn new(name: String, line: usize) -> Self {
        Self { name, line }
    }
}

impl Node for Var {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        ExpressionNode::accept(self, visitor).map(|_| ())
    }

    fn print(&self) {
        print!("{}", self.name);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for Var {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<Value> {
        visitor.visit_var(self)
    }
}

pub struct Number {
    pub value: Value,
}

impl Number {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl Node for Number {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        ExpressionNode::accept(self, visitor).map(|_| ())
    }

    fn print(&self) {
        print!("{}", self.value);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for Number {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<Value> {
        visitor.visit_number(self)
    }
}

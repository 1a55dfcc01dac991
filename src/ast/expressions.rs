use crate::ast::{ExpressionNode, Node};
use crate::errors::PasResult;
use crate::value::Value;
use crate::visitors::AstVisitor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    IntegerDiv,
    FloatDiv,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::IntegerDiv => write!(f, "DIV"),
            BinaryOperator::FloatDiv => write!(f, "/"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Minus => write!(f, "-"),
        }
    }
}

pub struct BinOp {
    pub left: Box<dyn ExpressionNode>,
    pub op: BinaryOperator,
    pub right: Box<dyn ExpressionNode>,
    pub line: usize,
}

impl BinOp {
    pub fn new(
        left: Box<dyn ExpressionNode>,
        op: BinaryOperator,
        right: Box<dyn ExpressionNode>,
        line: usize,
    ) -> Self {
        Self {
            left,
            op,
            right,
            line,
        }
    }
}

impl Node for BinOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        ExpressionNode::accept(self, visitor).map(|_| ())
    }

    fn print(&self) {
        print!("(");
        self.left.print();
        print!(" {} ", self.op);
        self.right.print();
        print!(")");
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for BinOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<Value> {
        visitor.visit_binary_op(self)
    }
}

pub struct UnaryOp {
    pub op: UnaryOperator,
    pub expr: Box<dyn ExpressionNode>,
}

impl UnaryOp {
    pub fn new(op: UnaryOperator, expr: Box<dyn ExpressionNode>) -> Self {
        Self { op, expr }
    }
}

impl Node for UnaryOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        ExpressionNode::accept(self, visitor).map(|_| ())
    }

    fn print(&self) {
        print!("{}", self.op);
        self.expr.print();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl ExpressionNode for UnaryOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<Value> {
        visitor.visit_unary_op(self)
    }
}

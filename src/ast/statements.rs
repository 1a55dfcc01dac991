use crate::ast::{ExpressionNode, Node, Var};
use crate::errors::PasResult;
use crate::visitors::AstVisitor;

pub struct Compound {
    pub children: Vec<Box<dyn Node>>,
}

impl Compound {
    pub fn new(children: Vec<Box<dyn Node>>) -> Self {
        Self { children }
    }
}

impl Node for Compound {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_compound(self)
    }

    fn print(&self) {
        println!("BEGIN");
        for child in &self.children {
            child.print();
            println!(";");
        }
        print!("END");
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

pub struct Assign {
    pub left: Var,
    pub right: Box<dyn ExpressionNode>,
}

impl Assign {
    pub fn new(left: Var, right: Box<dyn ExpressionNode>) -> Self {
        Self { left, right }
    }
}

impl Node for Assign {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_assign(self)
    }

    fn print(&self) {
        print!("{} := ", self.left.name);
        self.right.print();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

/// An empty statement, e.g. between a trailing semicolon and END.
pub struct NoOp;

impl Node for NoOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_no_op(self)
    }

    fn print(&self) {}

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

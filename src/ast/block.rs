use crate::ast::{Compound, Node};
use crate::errors::PasResult;
use crate::visitors::AstVisitor;

pub struct Block {
    pub declarations: Vec<Box<dyn Node>>,
    pub compound: Compound,
}

impl Block {
    pub fn new(declarations: Vec<Box<dyn Node>>, compound: Compound) -> Self {
        Self {
            declarations,
            compound,
        }
    }
}

impl Node for Block {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_block(self)
    }

    fn print(&self) {
        for declaration in &self.declarations {
            declaration.print();
        }
        self.compound.print();
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

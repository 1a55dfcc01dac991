use crate::ast::{Block, Node};
use crate::errors::PasResult;
use crate::visitors::AstVisitor;

pub struct Program {
    pub name: String,
    pub block: Block,
}

impl Program {
    pub fn new(name: String, block: Block) -> Self {
        Self { name, block }
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()> {
        visitor.visit_program(self)
    }

    fn print(&self) {
        println!("PROGRAM {};", self.name);
        self.block.print();
        println!(".");
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

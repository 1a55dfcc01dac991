/*
*                 pasci -- Pascal subset interpreter.
*
* program          = "PROGRAM" variable ";" block "." ;
* block            = declarations compound_statement ;
* declarations     = [ "VAR" ( var_declaration ";" )+ ]
*                    { "PROCEDURE" ident ";" block ";" } ;
* var_declaration  = ident { "," ident } ":" type_spec ;
* type_spec        = "INTEGER" | "REAL" ;
* compound         = "BEGIN" statement_list "END" ;
* statement_list   = statement { ";" statement } ;
* statement        = compound | assignment | empty ;
* assignment       = variable ":=" expression ;
* expression       = term { ( "+" | "-" ) term } ;
* term             = factor { ( "*" | "DIV" | "/" ) factor } ;
* factor           = ( "+" | "-" ) factor | integer_const | real_const
*                  | "(" expression ")" | variable ;
* variable         = ident ;
*/

use crate::errors::PasResult;
use crate::value::Value;
use crate::visitors::AstVisitor;
use std::any::Any;

pub trait Node {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<()>;
    fn print(&self);
    fn as_any(&self) -> &dyn Any;
}

pub trait ExpressionNode: Node {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> PasResult<Value>;
}

use crate::ast::{
    Assign, BinOp, BinaryOperator, Block, Compound, ExpressionNode, NoOp, Node, Number,
    ProcedureDecl, Program, TypeName, TypeSpec, UnaryOp, UnaryOperator, Var, VarDecl,
};
use crate::errors::{PasError, PasResult};
use crate::lexer::Lexer;
use crate::token::Token;
use crate::value::Value;

/// Upper bound on the recursive productions. Source nesting deeper than this
/// fails with `NestingTooDeep` instead of exhausting the native call stack;
/// AST depth mirrors source nesting, so the tree passes inherit the bound.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    line_number: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> PasResult<Self> {
        let (token, line) = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token: token,
            line_number: line,
            depth: 0,
        })
    }

    fn next(&mut self) -> PasResult<()> {
        let (token, line) = self.lexer.next_token()?;
        self.current_token = token;
        self.line_number = line;
        Ok(())
    }

    /// Consume the current token if its kind matches, disregarding any
    /// carried data, else fail.
    fn eat(&mut self, expected: Token) -> PasResult<()> {
        if std::mem::discriminant(&expected) != std::mem::discriminant(&self.current_token) {
            return Err(PasError::syntax_error(
                expected.to_string(),
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        self.next()
    }

    fn get_identifier(&self, token: &Token) -> PasResult<String> {
        match token {
            Token::Ident(name) => Ok(name.clone()),
            _ => Err(PasError::syntax_error(
                "identifier",
                token.to_string(),
                self.line_number,
            )),
        }
    }

    fn enter(&mut self) -> PasResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(PasError::NestingTooDeep {
                line: self.line_number,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// program : PROGRAM variable SEMI block DOT
    fn program(&mut self) -> PasResult<Program> {
        self.eat(Token::Program)?;
        let name = self.variable()?.name;
        self.eat(Token::Semicolon)?;
        let block = self.block()?;
        let program = Program::new(name, block);
        self.eat(Token::Dot)?;
        Ok(program)
    }

    /// block : declarations compound_statement
    fn block(&mut self) -> PasResult<Block> {
        self.enter()?;
        let declarations = self.declarations()?;
        let compound = self.compound_statement()?;
        self.leave();
        Ok(Block::new(declarations, compound))
    }

    /// declarations : (VAR (var_declaration SEMI)+)?
    ///                (PROCEDURE ID SEMI block SEMI)*
    fn declarations(&mut self) -> PasResult<Vec<Box<dyn Node>>> {
        let mut declarations: Vec<Box<dyn Node>> = Vec::new();
        if self.current_token == Token::Var {
            self.eat(Token::Var)?;
            while matches!(self.current_token, Token::Ident(_)) {
                self.var_declaration(&mut declarations)?;
                self.eat(Token::Semicolon)?;
            }
        }
        while self.current_token == Token::Procedure {
            self.eat(Token::Procedure)?;
            let name = self.get_identifier(&self.current_token)?;
            self.next()?;
            self.eat(Token::Semicolon)?;
            let block = self.block()?;
            self.eat(Token::Semicolon)?;
            declarations.push(Box::new(ProcedureDecl::new(name, block)));
        }
        Ok(declarations)
    }

    /// var_declaration : ID (COMMA ID)* COLON type_spec
    ///
    /// Each declared name gets its own `VarDecl` sharing the type.
    fn var_declaration(&mut self, declarations: &mut Vec<Box<dyn Node>>) -> PasResult<()> {
        let mut vars = vec![self.variable()?];
        while self.current_token == Token::Comma {
            self.eat(Token::Comma)?;
            vars.push(self.variable()?);
        }
        self.eat(Token::Colon)?;
        let type_spec = self.type_spec()?;
        for var in vars {
            declarations.push(Box::new(VarDecl::new(var, type_spec.clone())));
        }
        Ok(())
    }

    /// type_spec : INTEGER | REAL
    fn type_spec(&mut self) -> PasResult<TypeSpec> {
        let name = match self.current_token {
            Token::Integer => TypeName::Integer,
            Token::Real => TypeName::Real,
            _ => {
                return Err(PasError::syntax_error(
                    "INTEGER or REAL",
                    self.current_token.to_string(),
                    self.line_number,
                ))
            }
        };
        self.next()?;
        Ok(TypeSpec::new(name))
    }

    /// compound_statement : BEGIN statement_list END
    fn compound_statement(&mut self) -> PasResult<Compound> {
        self.enter()?;
        self.eat(Token::Begin)?;
        let children = self.statement_list()?;
        self.eat(Token::End)?;
        self.leave();
        Ok(Compound::new(children))
    }

    /// statement_list : statement (SEMI statement)*
    fn statement_list(&mut self) -> PasResult<Vec<Box<dyn Node>>> {
        let mut statements = vec![self.statement()?];
        while self.current_token == Token::Semicolon {
            self.eat(Token::Semicolon)?;
            statements.push(self.statement()?);
        }
        // Two statements without a separating semicolon would otherwise slip
        // through as a statement followed by a dangling identifier.
        if matches!(self.current_token, Token::Ident(_)) {
            return Err(PasError::syntax_error(
                "Semicolon",
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        Ok(statements)
    }

    /// statement : compound_statement | assignment_statement | empty
    fn statement(&mut self) -> PasResult<Box<dyn Node>> {
        match self.current_token {
            Token::Begin => Ok(Box::new(self.compound_statement()?)),
            Token::Ident(_) => Ok(Box::new(self.assignment_statement()?)),
            _ => Ok(Box::new(NoOp)),
        }
    }

    /// assignment_statement : variable ASSIGN expr
    fn assignment_statement(&mut self) -> PasResult<Assign> {
        let left = self.variable()?;
        self.eat(Token::Assign)?;
        let right = self.expr()?;
        Ok(Assign::new(left, right))
    }

    /// expr : term ((PLUS | MINUS) term)*
    ///
    /// Left-folding: each repetition wraps the node built so far as the left
    /// child, which is what makes `10 - 2 - 3` parse as `(10 - 2) - 3`.
    fn expr(&mut self) -> PasResult<Box<dyn ExpressionNode>> {
        let mut node = self.term()?;
        while matches!(self.current_token, Token::Plus | Token::Minus) {
            let line = self.line_number;
            let op = match self.current_token {
                Token::Plus => BinaryOperator::Add,
                _ => BinaryOperator::Subtract,
            };
            self.next()?;
            let right = self.term()?;
            node = Box::new(BinOp::new(node, op, right, line));
        }
        Ok(node)
    }

    /// term : factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*
    fn term(&mut self) -> PasResult<Box<dyn ExpressionNode>> {
        let mut node = self.factor()?;
        while matches!(
            self.current_token,
            Token::Multiply | Token::IntegerDiv | Token::FloatDiv
        ) {
            let line = self.line_number;
            let op = match self.current_token {
                Token::Multiply => BinaryOperator::Multiply,
                Token::IntegerDiv => BinaryOperator::IntegerDiv,
                _ => BinaryOperator::FloatDiv,
            };
            self.next()?;
            let right = self.factor()?;
            node = Box::new(BinOp::new(node, op, right, line));
        }
        Ok(node)
    }

    /// factor : (PLUS | MINUS) factor | INTEGER_CONST | REAL_CONST
    ///        | LPAREN expr RPAREN | variable
    fn factor(&mut self) -> PasResult<Box<dyn ExpressionNode>> {
        self.enter()?;
        let node: Box<dyn ExpressionNode> = match &self.current_token {
            Token::Plus => {
                self.next()?;
                Box::new(UnaryOp::new(UnaryOperator::Plus, self.factor()?))
            }
            Token::Minus => {
                self.next()?;
                Box::new(UnaryOp::new(UnaryOperator::Minus, self.factor()?))
            }
            Token::IntegerConst(value) => {
                let value = Value::Int(*value);
                self.next()?;
                Box::new(Number::new(value))
            }
            Token::RealConst(value) => {
                let value = Value::Real(*value);
                self.next()?;
                Box::new(Number::new(value))
            }
            Token::LParen => {
                self.next()?;
                let node = self.expr()?;
                self.eat(Token::RParen)?;
                node
            }
            _ => Box::new(self.variable()?),
        };
        self.leave();
        Ok(node)
    }

    /// variable : ID
    fn variable(&mut self) -> PasResult<Var> {
        let name = self.get_identifier(&self.current_token)?;
        let line = self.line_number;
        self.next()?;
        Ok(Var::new(name, line))
    }

    /// Parse the whole token stream into a `Program`. Anything left over
    /// after the program production is a syntax error.
    pub fn parse(mut self) -> PasResult<Program> {
        let program = self.program()?;
        if self.current_token != Token::Eof {
            return Err(PasError::syntax_error(
                "end of input",
                self.current_token.to_string(),
                self.line_number,
            ));
        }
        Ok(program)
    }
}

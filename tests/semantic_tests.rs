use pasci::ast::TypeName;
use pasci::errors::{PasError, PasResult};
use pasci::semantic::{Symbol, SymbolKind, SymbolTable};
use pasci::{analyze, parse};

#[test]
fn test_builtins_are_seeded() {
    let table = SymbolTable::new();
    assert_eq!(table.len(), 2);
    assert!(matches!(
        table.get("INTEGER").unwrap().kind,
        SymbolKind::BuiltinType
    ));
    assert!(matches!(
        table.get("REAL").unwrap().kind,
        SymbolKind::BuiltinType
    ));
}

#[test]
fn test_insert_and_get_symbol() -> PasResult<()> {
    let mut table = SymbolTable::new();
    table.insert(Symbol::variable("x", TypeName::Integer, 3))?;

    let symbol = table.get("x").expect("Expected symbol for 'x'");
    assert_eq!(symbol.name, "x");
    assert_eq!(symbol.line_number, 3);
    assert!(matches!(
        symbol.kind,
        SymbolKind::Variable {
            type_name: TypeName::Integer
        }
    ));
    Ok(())
}

#[test]
fn test_insert_rejects_redeclaration() -> PasResult<()> {
    let mut table = SymbolTable::new();
    table.insert(Symbol::variable("x", TypeName::Integer, 1))?;
    let result = table.insert(Symbol::variable("x", TypeName::Real, 2));
    if let Err(PasError::DuplicateDeclaration { name, line }) = result {
        assert_eq!(name, "x");
        assert_eq!(line, 2);
        Ok(())
    } else {
        panic!(
            "Expected a DuplicateDeclaration error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_builtins_cannot_be_replaced() {
    let mut table = SymbolTable::new();
    let result = table.insert(Symbol::variable("INTEGER", TypeName::Real, 1));
    assert!(matches!(
        result,
        Err(PasError::DuplicateDeclaration { .. })
    ));
}

#[test]
fn test_analysis_populates_the_table() -> PasResult<()> {
    let source = "
PROGRAM Part;
VAR number : INTEGER;
BEGIN
    number := 2;
END.
";
    let program = parse(source)?;
    let table = analyze(&program)?;

    // Builtins plus one declared variable.
    assert_eq!(table.len(), 3);
    let symbol = table.get("number").expect("Expected symbol for 'number'");
    assert!(matches!(
        symbol.kind,
        SymbolKind::Variable {
            type_name: TypeName::Integer
        }
    ));
    Ok(())
}

#[test]
fn test_duplicate_declaration_fails() -> PasResult<()> {
    let source = "
PROGRAM Dup;
VAR x : INTEGER;
    x : REAL;
BEGIN
END.
";
    let program = parse(source)?;
    let result = analyze(&program);
    if let Err(PasError::DuplicateDeclaration { name, line }) = result {
        assert_eq!(name, "x");
        assert_eq!(line, 4);
        Ok(())
    } else {
        panic!(
            "Expected a DuplicateDeclaration error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_undeclared_reference_in_expression() -> PasResult<()> {
    let source = "
PROGRAM Undecl;
VAR a : INTEGER;
BEGIN
    a := b + 1;
END.
";
    let program = parse(source)?;
    let result = analyze(&program);
    if let Err(PasError::UndeclaredVariable { name, line }) = result {
        assert_eq!(name, "b");
        assert_eq!(line, 5);
        Ok(())
    } else {
        panic!(
            "Expected an UndeclaredVariable error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_undeclared_assignment_target() -> PasResult<()> {
    // The target is validated like any other reference; a first assignment
    // does not define the variable.
    let source = "
PROGRAM Undecl;
BEGIN
    x := 1;
END.
";
    let program = parse(source)?;
    let result = analyze(&program);
    if let Err(PasError::UndeclaredVariable { name, .. }) = result {
        assert_eq!(name, "x");
        Ok(())
    } else {
        panic!(
            "Expected an UndeclaredVariable error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_names_are_case_sensitive() -> PasResult<()> {
    let source = "
PROGRAM Case;
VAR number : INTEGER;
BEGIN
    Number := 1;
END.
";
    let program = parse(source)?;
    let result = analyze(&program);
    if let Err(PasError::UndeclaredVariable { name, .. }) = result {
        assert_eq!(name, "Number");
        Ok(())
    } else {
        panic!(
            "Expected an UndeclaredVariable error, but got: {:?}",
            result
        );
    }
}

#[test]
fn test_procedure_bodies_are_not_validated() -> PasResult<()> {
    // The flat table never enters procedure bodies, so an undeclared name
    // inside one goes unchecked and no symbol is recorded for the procedure.
    let source = "
PROGRAM Main;
VAR x : INTEGER;
PROCEDURE Alpha;
BEGIN
    y := 1;
END;
BEGIN
    x := 1;
END.
";
    let program = parse(source)?;
    let table = analyze(&program)?;
    assert_eq!(table.len(), 3);
    assert!(!table.contains("Alpha"));
    assert!(!table.contains("y"));
    Ok(())
}

mod common;

use common::*;
use ferrule::ast::{
    BinOpKind, DataType, Declaration, DeclarationList, Expr, Field, Param, Span, Stmt, StmtKind,
};
use ferrule::errors::{CompilerError, ErrorCategory};
use ferrule::semantic::{check_program, validate_returns};
use ferrule::typeinfer::ReturnTypes;

fn check(decls: Vec<Declaration>) -> Result<(), CompilerError> {
    check_program(&DeclarationList::from(decls)).map(|_| ())
}

#[test]
fn well_typed_program_passes() {
    let ctx = check_program(&sample_program()).unwrap();
    assert_eq!(ctx.function_count(), 2);
    assert_eq!(ctx.lookup_var("limit", None).unwrap(), DataType::Int);
}

#[test]
fn inconsistent_returns_are_rejected() {
    let err = check(vec![function(
        "pick",
        vec![],
        DataType::Int,
        vec![],
        vec![if_else(
            Expr::bool(true),
            vec![ret(Expr::int(1))],
            vec![ret(Expr::bool(false))],
        )],
    )])
    .unwrap_err();

    assert_eq!(err.category, ErrorCategory::ReturnError);
    assert!(err.message.contains("inconsistent return types {int, boolean}"));
    assert_eq!(err.function_name.as_deref(), Some("pick"));
}

#[test]
fn missing_return_is_rejected() {
    let err = check(vec![function("answer", vec![], DataType::Int, vec![], vec![])]).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ReturnError);
    assert!(err.message.contains("no return"));
}

#[test]
fn mismatched_return_is_rejected() {
    let err = check(vec![function(
        "flag",
        vec![],
        DataType::Bool,
        vec![],
        vec![ret(Expr::int(1))],
    )])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "ReturnError: Return type mismatch in 'flag': expected boolean, got int"
    );
}

#[test]
fn void_functions_may_omit_or_use_bare_return() {
    check(vec![
        function("noop", vec![], DataType::Void, vec![], vec![]),
        function("early", vec![], DataType::Void, vec![], vec![Stmt::ret(None)]),
    ])
    .unwrap();
}

#[test]
fn int_return_widens_to_double() {
    check(vec![function(
        "half",
        vec![Param::new("n", DataType::Int)],
        DataType::Float,
        vec![],
        vec![ret(Expr::var("n"))],
    )])
    .unwrap();
}

#[test]
fn assignment_type_mismatch() {
    let err = check(vec![function(
        "main",
        vec![],
        DataType::Void,
        vec![Field::new("x", DataType::Int)],
        vec![assign("x", Expr::bool(true)).at(Span::new(3, 5))],
    )])
    .unwrap_err();
    assert_eq!(err.category, ErrorCategory::TypeError);
    assert_eq!(err.line, Some(3));
    assert_eq!(err.function_name.as_deref(), Some("main"));
}

#[test]
fn condition_must_be_boolean() {
    let err = check(vec![function(
        "main",
        vec![],
        DataType::Void,
        vec![],
        vec![if_then(Expr::int(1), vec![], vec![])],
    )])
    .unwrap_err();
    assert!(err.message.contains("if condition must be boolean"));
}

#[test]
fn functions_may_call_later_declarations() {
    check(vec![
        function(
            "main",
            vec![],
            DataType::Void,
            vec![],
            vec![StmtKind::Expr(Expr::call("helper", vec![Expr::int(2)])).into()],
        ),
        function(
            "helper",
            vec![Param::new("k", DataType::Int)],
            DataType::Int,
            vec![],
            vec![ret(Expr::binop(BinOpKind::Mul, Expr::var("k"), Expr::int(2)))],
        ),
    ])
    .unwrap();
}

#[test]
fn duplicate_function_is_a_name_error() {
    let err = check(vec![
        function("f", vec![], DataType::Void, vec![], vec![]),
        function("f", vec![], DataType::Void, vec![], vec![]),
    ])
    .unwrap_err();
    assert_eq!(err.category, ErrorCategory::NameError);
}

#[test]
fn global_initialiser_must_match() {
    let err = check(vec![Declaration::Field(
        Field::new("name", DataType::Str).with_init(Expr::int(3)),
    )])
    .unwrap_err();
    assert_eq!(err.category, ErrorCategory::TypeError);
    assert!(err.message.contains("'name'"));
}

#[test]
fn block_locals_do_not_leak() {
    let err = check(vec![function(
        "main",
        vec![],
        DataType::Void,
        vec![],
        vec![
            if_then(
                Expr::bool(true),
                vec![Field::new("t", DataType::Int)],
                vec![assign("t", Expr::int(1))],
            ),
            assign("t", Expr::int(2)),
        ],
    )])
    .unwrap_err();
    assert_eq!(err.category, ErrorCategory::NameError);
    assert!(err.message.contains("Undefined variable: t"));
}

#[test]
fn validate_returns_accepts_single_matching_type() {
    let returns: ReturnTypes = [DataType::Str].into_iter().collect();
    validate_returns("name", &DataType::Str, &returns, None).unwrap();
    assert!(validate_returns("name", &DataType::Int, &returns, None).is_err());
}

fn assert_void_variable(err: CompilerError, name: &str) {
    assert_eq!(err.category, ErrorCategory::TypeError);
    assert!(
        err.message.contains(&format!("Variable '{}' cannot have type void", name)),
        "unexpected message: {}",
        err.message
    );
}

#[test]
fn void_global_is_rejected() {
    let err = check(vec![Declaration::Field(
        Field::new("v", DataType::Void).at(Span::new(1, 1)),
    )])
    .unwrap_err();
    assert_eq!(err.line, Some(1));
    assert_void_variable(err, "v");
}

#[test]
fn void_local_is_rejected() {
    let err = check(vec![function(
        "main",
        vec![],
        DataType::Void,
        vec![Field::new("v", DataType::Void)],
        vec![],
    )])
    .unwrap_err();
    assert_eq!(err.function_name.as_deref(), Some("main"));
    assert_void_variable(err, "v");
}

#[test]
fn void_block_field_is_rejected() {
    let err = check(vec![function(
        "main",
        vec![],
        DataType::Void,
        vec![],
        vec![if_then(
            Expr::bool(true),
            vec![Field::new("inner", DataType::Void)],
            vec![],
        )],
    )])
    .unwrap_err();
    assert_void_variable(err, "inner");
}

#[test]
fn void_parameter_is_rejected() {
    let err = check(vec![function(
        "take",
        vec![Param::new("p", DataType::Void)],
        DataType::Void,
        vec![],
        vec![],
    )])
    .unwrap_err();
    assert_eq!(err.function_name.as_deref(), Some("take"));
    assert_void_variable(err, "p");
}

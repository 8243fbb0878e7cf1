#![allow(dead_code)]

use ferrule::ast::{
    BinOpKind, DataType, Declaration, DeclarationList, ElseClause, Expr, Field, FieldList, Param,
    StatementList, Stmt, StmtKind,
};

pub fn assign(target: &str, value: Expr) -> Stmt {
    StmtKind::Assign {
        target: target.to_string(),
        value,
    }
    .into()
}

pub fn ret(value: Expr) -> Stmt {
    Stmt::ret(Some(value))
}

pub fn if_else(cond: Expr, body: Vec<Stmt>, else_body: Vec<Stmt>) -> Stmt {
    StmtKind::If {
        cond,
        fields: FieldList::new(),
        body: StatementList::from(body),
        else_clause: ElseClause::new(FieldList::new(), StatementList::from(else_body)),
    }
    .into()
}

pub fn if_then(cond: Expr, fields: Vec<Field>, body: Vec<Stmt>) -> Stmt {
    StmtKind::If {
        cond,
        fields: FieldList::from(fields),
        body: StatementList::from(body),
        else_clause: ElseClause::Absent,
    }
    .into()
}

pub fn function(
    name: &str,
    params: Vec<Param>,
    return_type: DataType,
    fields: Vec<Field>,
    body: Vec<Stmt>,
) -> Declaration {
    Declaration::Function {
        name: name.to_string(),
        params,
        return_type,
        fields: FieldList::from(fields),
        body: StatementList::from(body),
        span: Default::default(),
    }
}

/// int max(int a, int b) { int m; if (a > b) { m = a; } else { m = b; } return m; }
pub fn max_function() -> Declaration {
    function(
        "max",
        vec![Param::new("a", DataType::Int), Param::new("b", DataType::Int)],
        DataType::Int,
        vec![Field::new("m", DataType::Int)],
        vec![
            if_else(
                Expr::binop(BinOpKind::Gt, Expr::var("a"), Expr::var("b")),
                vec![assign("m", Expr::var("a"))],
                vec![assign("m", Expr::var("b"))],
            ),
            ret(Expr::var("m")),
        ],
    )
}

pub const MAX_FUNCTION_TEXT: &str = "int max(int a, int b) {\n\
\tint m;\n\
\tif (a > b) {\n\
\t\tm = a;\n\
\t} else {\n\
\t\tm = b;\n\
\t}\n\
\treturn m;\n\
}";

/// int limit = 10; followed by max and a void main that prints through it.
pub fn sample_program() -> DeclarationList {
    DeclarationList::from(vec![
        Declaration::Field(Field::new("limit", DataType::Int).with_init(Expr::int(10))),
        max_function(),
        function(
            "main",
            vec![],
            DataType::Void,
            vec![],
            vec![StmtKind::Print(
                vec![
                    Expr::call("max", vec![Expr::var("limit"), Expr::int(3)]),
                    Expr::str("done"),
                ]
                .into(),
            )
            .into()],
        ),
    ])
}

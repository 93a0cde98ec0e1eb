//! Build SQL statement text from structured calls.
//!
//! ```
//! use sqlego::{explicit, gte, lt, select};
//!
//! let sql = select("Users", ["id"])
//!     .where_([gte("id", "1"), explicit([gte("id", "10"), lt("id", "20")]).or(lt("id", "5"))])
//!     .compile();
//! assert_eq!("SELECT id FROM Users WHERE id>=1 AND  ( id>=10 AND id<20 )  OR id<5;", sql);
//! ```
//!
//! Operands and values are never quoted or escaped; pass `'Bruce'` to get a
//! quoted literal.

mod array;
mod col;
mod error;
mod expr;
mod ident;
mod operator;
mod row;
mod statement;
mod writer;

pub use array::Array;
pub use col::Columns;
pub use col::IntoIdents;
pub use col::Values;
pub use error::Error;
pub use error::Result;
pub use expr::IntoPredicates;
pub use expr::Predicate;
pub use expr::between;
pub use expr::cond::Combinator;
pub use expr::cond::Predicates;
pub use expr::explicit;
pub use ident::Ident;
pub use ident::IntoIdent;
pub use operator::Comparator;
pub use operator::{eq, gt, gte, lt, lte, neq};
pub use row::Row;
pub use statement::Statement;
pub use statement::StatementKind;

pub fn select<T, C>(table: T, columns: C) -> Statement
where
    T: IntoIdent,
    C: IntoIdents,
{
    Statement::select(table, columns)
}

pub fn insert<T, C, V>(table: T, columns: C, values: V) -> Result<Statement>
where
    T: IntoIdent,
    C: IntoIdents,
    V: IntoIdents,
{
    Statement::insert(table, columns, values)
}

pub fn update<T, C, V>(table: T, columns: C, values: V) -> Result<Statement>
where
    T: IntoIdent,
    C: IntoIdents,
    V: IntoIdents,
{
    Statement::update(table, columns, values)
}

pub fn delete<T: IntoIdent>(table: T) -> Statement {
    Statement::delete(table)
}

pub fn insert_row<T: IntoIdent>(table: T, row: Row) -> Statement {
    Statement::insert_row(table, row)
}

pub fn update_row<T: IntoIdent>(table: T, row: Row) -> Statement {
    Statement::update_row(table, row)
}

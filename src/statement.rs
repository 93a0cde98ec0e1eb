use std::fmt::{self, Write};

use crate::{
    col::{Columns, IntoIdents, Values},
    error::{Error, Result},
    expr::{IntoPredicates, cond::Predicates},
    ident::{Ident, IntoIdent},
    row::Row,
    writer::{self, FormatContext, FormatWriter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// One SELECT, INSERT, UPDATE or DELETE statement.
///
/// Built by one of the constructors, then filtered with [`Statement::where_`]
/// and rendered with [`Statement::compile`]. Every operand, column and value
/// is written exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    kind: StatementKind,
    table: Ident,
    columns: Columns,
    values: Values,
    maybe_where: Option<Predicates>,
}

impl Statement {
    fn new(kind: StatementKind, table: Ident, columns: Columns, values: Values) -> Self {
        Self {
            kind,
            table,
            columns,
            values,
            maybe_where: None,
        }
    }

    fn paired(
        kind: StatementKind,
        table: Ident,
        columns: Columns,
        values: Values,
    ) -> Result<Self> {
        if columns.len() != values.len() {
            tracing::debug!(
                ?kind,
                %table,
                columns = columns.len(),
                values = values.len(),
                "rejecting statement with unpaired columns"
            );
            return Err(Error::LengthMismatch {
                columns: columns.len(),
                values: values.len(),
            });
        }
        Ok(Self::new(kind, table, columns, values))
    }

    pub fn select<T, C>(table: T, columns: C) -> Self
    where
        T: IntoIdent,
        C: IntoIdents,
    {
        Self::new(
            StatementKind::Select,
            table.into_ident(),
            columns.into_idents(),
            Values::None,
        )
    }

    /// Fails with [`Error::LengthMismatch`] unless every column has a value.
    pub fn insert<T, C, V>(table: T, columns: C, values: V) -> Result<Self>
    where
        T: IntoIdent,
        C: IntoIdents,
        V: IntoIdents,
    {
        Self::paired(
            StatementKind::Insert,
            table.into_ident(),
            columns.into_idents(),
            values.into_idents(),
        )
    }

    /// Fails with [`Error::LengthMismatch`] unless every column has a value.
    pub fn update<T, C, V>(table: T, columns: C, values: V) -> Result<Self>
    where
        T: IntoIdent,
        C: IntoIdents,
        V: IntoIdents,
    {
        Self::paired(
            StatementKind::Update,
            table.into_ident(),
            columns.into_idents(),
            values.into_idents(),
        )
    }

    /// A row always pairs every column with a value, so this cannot fail.
    pub fn insert_row<T: IntoIdent>(table: T, row: Row) -> Self {
        let (columns, values) = row.into_parts();
        Self::new(StatementKind::Insert, table.into_ident(), columns, values)
    }

    pub fn update_row<T: IntoIdent>(table: T, row: Row) -> Self {
        let (columns, values) = row.into_parts();
        Self::new(StatementKind::Update, table.into_ident(), columns, values)
    }

    pub fn delete<T: IntoIdent>(table: T) -> Self {
        Self::new(
            StatementKind::Delete,
            table.into_ident(),
            Columns::None,
            Values::None,
        )
    }

    /// Appends predicates to the WHERE clause, AND-joined with whatever is
    /// already there. The clause is created on the first call.
    pub fn where_<P: IntoPredicates>(&mut self, preds: P) -> &mut Self {
        let ws = self.maybe_where.get_or_insert_default();
        ws.append(preds.into_predicates());
        self
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    pub fn table(&self) -> &Ident {
        &self.table
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn has_where(&self) -> bool {
        self.maybe_where.is_some()
    }

    /// Renders the statement, terminated by `;`. Does not modify `self`.
    pub fn compile(&self) -> String {
        let sql = writer::to_string(self, 64);
        tracing::trace!(kind = ?self.kind, len = sql.len(), "compiled statement");
        sql
    }
}

impl FormatWriter for Statement {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self.kind {
            StatementKind::Select => {
                context.writer.write_str("SELECT ")?;
                self.columns.format_writer(context)?;
                context.writer.write_str(" FROM ")?;
                self.table.format_writer(context)?;
            }
            StatementKind::Insert => {
                context.writer.write_str("INSERT INTO ")?;
                self.table.format_writer(context)?;
                context.writer.write_str(" (")?;
                self.columns.format_writer(context)?;
                context.writer.write_str(") VALUES (")?;
                self.values.format_writer(context)?;
                context.writer.write_char(')')?;
            }
            StatementKind::Update => {
                context.writer.write_str("UPDATE ")?;
                self.table.format_writer(context)?;
                context.writer.write_str(" SET ")?;
                let pairs = self.columns.iter().zip(&self.values);
                for (index, (column, value)) in pairs.enumerate() {
                    if index > 0 {
                        context.writer.write_char(',')?;
                    }
                    column.format_writer(context)?;
                    context.writer.write_char('=')?;
                    value.format_writer(context)?;
                }
            }
            StatementKind::Delete => {
                context.writer.write_str("DELETE FROM ")?;
                self.table.format_writer(context)?;
            }
        }

        if let Some(ref w) = self.maybe_where {
            // a clause that renders to nothing drops the keyword too
            if !w.is_blank() {
                context.writer.write_str(" WHERE ")?;
                w.format_writer(context)?;
            }
        }

        context.writer.write_char(';')
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_writer(&mut FormatContext::new(f))
    }
}

use indexmap::IndexMap;

use crate::{
    col::{Columns, Values},
    ident::{Ident, IntoIdent},
};

/// Column to value pairs for `insert_row` and `update_row`.
///
/// Columns keep the order they were first set in. Setting a column again
/// replaces its value in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    values: IndexMap<Ident, Ident>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    pub fn field<K, V>(&mut self, column: K, value: V) -> &mut Self
    where
        K: IntoIdent,
        V: IntoIdent,
    {
        self.values.insert(column.into_ident(), value.into_ident());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Columns, Values) {
        let (columns, values): (Vec<Ident>, Vec<Ident>) = self.values.into_iter().unzip();
        (columns.into(), values.into())
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: IntoIdent,
    V: IntoIdent,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.field(column, value);
        }
        row
    }
}

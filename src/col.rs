use std::fmt;

use crate::{
    array::Array,
    ident::{Ident, IntoIdent},
    writer::{FormatContext, FormatWriter},
};

pub type Columns = Array<Ident>;
pub type Values = Array<Ident>;

impl FormatWriter for Array<Ident> {
    fn format_writer<W: fmt::Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        context.write_list(self)
    }
}

/// Conversion into an ordered list of column names or value literals.
pub trait IntoIdents {
    fn into_idents(self) -> Array<Ident>;
}

impl<T> IntoIdents for T
where
    T: IntoIdent,
{
    fn into_idents(self) -> Array<Ident> {
        Array::One(self.into_ident())
    }
}

impl IntoIdents for () {
    fn into_idents(self) -> Array<Ident> {
        Array::None
    }
}

impl<T, const N: usize> IntoIdents for [T; N]
where
    T: IntoIdent,
{
    fn into_idents(self) -> Array<Ident> {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T> IntoIdents for Vec<T>
where
    T: IntoIdent,
{
    fn into_idents(self) -> Array<Ident> {
        self.into_iter().map(IntoIdent::into_ident).collect()
    }
}

impl<T> IntoIdents for &[T]
where
    T: IntoIdent + Clone,
{
    fn into_idents(self) -> Array<Ident> {
        self.iter().cloned().map(IntoIdent::into_ident).collect()
    }
}

impl IntoIdents for Array<Ident> {
    fn into_idents(self) -> Array<Ident> {
        self
    }
}

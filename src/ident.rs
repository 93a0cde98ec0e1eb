use std::{borrow::Cow, fmt, sync::Arc};

use smol_str::SmolStr;

use crate::writer::{self, FormatWriter};

/// An opaque piece of statement text: a table, a column, a literal or an
/// operand. It is written verbatim, never quoted or escaped.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ident(SmolStr);

pub trait IntoIdent {
    fn into_ident(self) -> Ident;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> Ident {
        self
    }
}

impl IntoIdent for &Ident {
    #[inline]
    fn into_ident(self) -> Ident {
        self.clone()
    }
}

impl IntoIdent for char {
    fn into_ident(self) -> Ident {
        Ident::new(smol_str::format_smolstr!("{}", self))
    }
}

impl IntoIdent for &str {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for &String {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for String {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Box<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for Arc<str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl<'a> IntoIdent for Cow<'a, str> {
    #[inline]
    fn into_ident(self) -> Ident {
        Ident::new(self)
    }
}

impl IntoIdent for SmolStr {
    #[inline(always)]
    fn into_ident(self) -> Ident {
        Ident(self)
    }
}

impl Ident {
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Into<SmolStr>,
    {
        Self(value.into())
    }

    #[inline]
    pub fn new_static(value: &'static str) -> Self {
        Self(SmolStr::new_static(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FormatWriter for Ident {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_format_ident_verbatim() {
        let ident = Ident::new_static("Users");
        assert_eq!("Users", format_writer(ident));
    }

    #[test]
    fn test_format_ident_no_quoting() {
        let ident = Ident::new("'Bruce'");
        assert_eq!("'Bruce'", format_writer(ident));
        let ident = Ident::new("some \"table\".x");
        assert_eq!("some \"table\".x", format_writer(ident));
    }

    #[test]
    fn test_into_ident() {
        assert_eq!(Ident::new("a"), 'a'.into_ident());
        assert_eq!(Ident::new("ab"), String::from("ab").into_ident());
        assert_eq!(Ident::new("ab"), Cow::Borrowed("ab").into_ident());
        assert_eq!(Ident::new("ab"), Arc::<str>::from("ab").into_ident());
        assert!("".into_ident().is_empty());
    }
}

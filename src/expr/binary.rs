use crate::{ident::Ident, operator::Comparator, writer::FormatWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryComparison {
    pub(crate) lhs: Ident,
    pub(crate) comparator: Comparator,
    pub(crate) rhs: Ident,
}

impl BinaryComparison {
    pub(crate) fn is_blank(&self) -> bool {
        self.lhs.is_empty()
    }
}

impl FormatWriter for BinaryComparison {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        self.lhs.format_writer(context)?;
        self.comparator.format_writer(context)?;
        self.rhs.format_writer(context)
    }
}

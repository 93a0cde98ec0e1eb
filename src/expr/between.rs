use std::fmt::Write;

use crate::{
    ident::Ident,
    writer::{FormatContext, FormatWriter},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetweenComparison {
    pub(crate) lhs: Ident,
    pub(crate) low: Ident,
    pub(crate) high: Ident,
}

impl BetweenComparison {
    pub(crate) fn is_blank(&self) -> bool {
        self.lhs.is_empty()
    }
}

impl FormatWriter for BetweenComparison {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        if self.is_blank() {
            return Ok(());
        }
        self.lhs.format_writer(context)?;
        context.writer.write_str(" BETWEEN ")?;
        self.low.format_writer(context)?;
        context.writer.write_str(" AND ")?;
        self.high.format_writer(context)
    }
}

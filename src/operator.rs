use sqlego_derive::Comparators;

use crate::writer::FormatWriter;

/// Two-operand comparison operators. `BETWEEN` takes two bounds and has its
/// own leaf type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Comparators)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparator {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Neq => "<>",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
        }
    }
}

impl FormatWriter for Comparator {
    fn format_writer<W: std::fmt::Write>(
        &self,
        context: &mut crate::writer::FormatContext<'_, W>,
    ) -> std::fmt::Result {
        context.writer.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::format_writer;

    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!("=", format_writer(Comparator::Eq));
        assert_eq!("<>", format_writer(Comparator::Neq));
        assert_eq!(">", format_writer(Comparator::Gt));
        assert_eq!(">=", format_writer(Comparator::Gte));
        assert_eq!("<", format_writer(Comparator::Lt));
        assert_eq!("<=", format_writer(Comparator::Lte));
    }

    #[test]
    fn test_generated_constructors() {
        assert_eq!("id=1", format_writer(eq("id", "1")));
        assert_eq!("id<>1", format_writer(neq("id", "1")));
        assert_eq!("id>1", format_writer(gt("id", "1")));
        assert_eq!("id>=1", format_writer(gte("id", "1")));
        assert_eq!("id<1", format_writer(lt("id", "1")));
        assert_eq!("id<=1", format_writer(lte("id", "1")));
    }
}

use std::fmt::Write;

use crate::{
    array::Array,
    writer::{FormatContext, FormatWriter},
};

use super::Predicate;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

impl FormatWriter for Combinator {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        match self {
            Combinator::And => context.writer.write_str("AND"),
            Combinator::Or => context.writer.write_str("OR"),
        }
    }
}

/// Ordered predicate list. On its own it renders AND-joined, which is how a
/// WHERE clause and an explicit group combine their members.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Predicates(pub(crate) Array<Predicate>);

impl Predicates {
    pub fn append(&mut self, other: Predicates) {
        self.0.append(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every member renders to nothing.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Predicate::is_blank)
    }

    pub(crate) fn format_joined<W: Write>(
        &self,
        combinator: Combinator,
        context: &mut FormatContext<'_, W>,
    ) -> std::fmt::Result {
        let mut written = false;
        for predicate in self.0.iter().filter(|p| !p.is_blank()) {
            if written {
                let joiner = predicate.leading_combinator().unwrap_or(combinator);
                context.writer.write_char(' ')?;
                joiner.format_writer(context)?;
                context.writer.write_char(' ')?;
            }
            predicate.format_writer(context)?;
            written = true;
        }
        Ok(())
    }
}

impl FormatWriter for Predicates {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        self.format_joined(Combinator::And, context)
    }
}

/// A group attached with `.and()` / `.or()`. It renders after the predicate
/// that owns it, prefixed by its own operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junction {
    pub(crate) combinator: Combinator,
    pub(crate) members: Predicates,
}

impl Junction {
    pub(crate) fn is_blank(&self) -> bool {
        self.members.is_blank()
    }
}

impl FormatWriter for Junction {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> std::fmt::Result {
        self.members.format_joined(self.combinator, context)
    }
}

#[cfg(test)]
mod tests {
    use crate::{IntoPredicates, eq, gt, lt, tests::format_writer};

    use super::*;

    #[test]
    fn test_predicates_and_joined() {
        let preds = [eq("a", "1"), gt("b", "2"), lt("c", "3")].into_predicates();
        assert_eq!("a=1 AND b>2 AND c<3", format_writer(preds));
    }

    #[test]
    fn test_predicates_skip_blank_members() {
        let preds = [eq("", "1"), gt("b", "2"), eq("", "x"), lt("c", "3")].into_predicates();
        assert_eq!("b>2 AND c<3", format_writer(preds));
    }

    #[test]
    fn test_blank_receiver_or_overrides_and() {
        let preds = [gt("a", "1"), eq("", "x").or(lt("b", "2"))].into_predicates();
        assert_eq!("a>1 OR b<2", format_writer(preds));
    }

    #[test]
    fn test_junction_uses_own_combinator() {
        let junction = Junction {
            combinator: Combinator::Or,
            members: [eq("a", "1"), eq("b", "2")].into_predicates(),
        };
        assert_eq!("a=1 OR b=2", format_writer(junction));
    }

    #[test]
    fn test_empty_predicates_are_blank() {
        let preds = Predicates::default();
        assert!(preds.is_blank());
        assert_eq!("", format_writer(preds));
    }
}

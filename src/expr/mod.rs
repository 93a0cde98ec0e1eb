//! The predicate tree and its renderer.
//!
//! A [`Predicate`] is a head node (one comparison or an explicit group) plus
//! the junctions chained onto it with [`Predicate::and`] and
//! [`Predicate::or`]. Junctions render after the head at the same level, so
//! `gte("id", "10").or(lt("id", "5"))` is `id>=10 OR id<5`. Nothing is ever
//! re-parenthesized; only [`explicit`] writes parentheses.

use std::{fmt, fmt::Write};

use crate::{
    array::Array,
    ident::IntoIdent,
    operator::Comparator,
    writer::{FormatContext, FormatWriter},
};

pub mod between;
pub mod binary;
pub mod cond;

use between::BetweenComparison;
use binary::BinaryComparison;
use cond::{Combinator, Junction, Predicates};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Comparison {
    Binary(BinaryComparison),
    Between(BetweenComparison),
}

impl Comparison {
    fn is_blank(&self) -> bool {
        match self {
            Comparison::Binary(binary) => binary.is_blank(),
            Comparison::Between(between) => between.is_blank(),
        }
    }
}

impl FormatWriter for Comparison {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Comparison::Binary(binary) => binary.format_writer(context),
            Comparison::Between(between) => between.format_writer(context),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Comparison(Comparison),
    Explicit(Box<Predicates>),
}

impl Node {
    fn is_blank(&self) -> bool {
        match self {
            Node::Comparison(comparison) => comparison.is_blank(),
            Node::Explicit(members) => members.is_blank(),
        }
    }
}

impl FormatWriter for Node {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        match self {
            Node::Comparison(comparison) => comparison.format_writer(context),
            Node::Explicit(members) => {
                if members.is_blank() {
                    return Ok(());
                }
                context.writer.write_str(" ( ")?;
                members.format_writer(context)?;
                context.writer.write_str(" ) ")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    head: Node,
    junctions: Vec<Junction>,
}

impl Predicate {
    fn from_node(head: Node) -> Self {
        Self {
            head,
            junctions: Vec::new(),
        }
    }

    pub fn compare<L, R>(left: L, comparator: Comparator, right: R) -> Self
    where
        L: IntoIdent,
        R: IntoIdent,
    {
        Self::from_node(Node::Comparison(Comparison::Binary(BinaryComparison {
            lhs: left.into_ident(),
            comparator,
            rhs: right.into_ident(),
        })))
    }

    pub fn between<C, L, H>(column: C, low: L, high: H) -> Self
    where
        C: IntoIdent,
        L: IntoIdent,
        H: IntoIdent,
    {
        Self::from_node(Node::Comparison(Comparison::Between(BetweenComparison {
            lhs: column.into_ident(),
            low: low.into_ident(),
            high: high.into_ident(),
        })))
    }

    pub fn explicit<P: IntoPredicates>(preds: P) -> Self {
        Self::from_node(Node::Explicit(Box::new(preds.into_predicates())))
    }

    /// Chains an AND group after this predicate, at the same level.
    pub fn and<P: IntoPredicates>(self, preds: P) -> Self {
        self.junction(Combinator::And, preds)
    }

    /// Chains an OR group after this predicate, at the same level. Members of
    /// the group are OR-joined too.
    pub fn or<P: IntoPredicates>(self, preds: P) -> Self {
        self.junction(Combinator::Or, preds)
    }

    fn junction<P: IntoPredicates>(mut self, combinator: Combinator, preds: P) -> Self {
        self.junctions.push(Junction {
            combinator,
            members: preds.into_predicates(),
        });
        self
    }

    /// The operator of the first junction that renders, when the head itself
    /// renders nothing. A list joining this predicate writes it in place of
    /// its own combinator, so the junction keeps its operator.
    pub(crate) fn leading_combinator(&self) -> Option<Combinator> {
        if !self.head.is_blank() {
            return None;
        }
        self.junctions
            .iter()
            .find(|j| !j.is_blank())
            .map(|j| j.combinator)
    }

    /// True when this predicate, with everything chained onto it, renders to
    /// nothing.
    pub fn is_blank(&self) -> bool {
        self.head.is_blank() && self.junctions.iter().all(Junction::is_blank)
    }
}

impl FormatWriter for Predicate {
    fn format_writer<W: Write>(&self, context: &mut FormatContext<'_, W>) -> fmt::Result {
        let mut written = !self.head.is_blank();
        self.head.format_writer(context)?;
        for junction in self.junctions.iter().filter(|j| !j.is_blank()) {
            if written {
                context.writer.write_char(' ')?;
                junction.combinator.format_writer(context)?;
                context.writer.write_char(' ')?;
            }
            junction.format_writer(context)?;
            written = true;
        }
        Ok(())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_writer(&mut FormatContext::new(f))
    }
}

pub fn between<C, L, H>(column: C, low: L, high: H) -> Predicate
where
    C: IntoIdent,
    L: IntoIdent,
    H: IntoIdent,
{
    Predicate::between(column, low, high)
}

/// Groups `preds` in parentheses, AND-joined: ` ( a AND b ) `.
pub fn explicit<P: IntoPredicates>(preds: P) -> Predicate {
    Predicate::explicit(preds)
}

pub trait IntoPredicates {
    fn into_predicates(self) -> Predicates;
}

impl IntoPredicates for Predicate {
    fn into_predicates(self) -> Predicates {
        Predicates(Array::One(self))
    }
}

impl IntoPredicates for Predicates {
    fn into_predicates(self) -> Predicates {
        self
    }
}

impl IntoPredicates for () {
    fn into_predicates(self) -> Predicates {
        Predicates::default()
    }
}

impl<const N: usize> IntoPredicates for [Predicate; N] {
    fn into_predicates(self) -> Predicates {
        Predicates(self.into_iter().collect())
    }
}

impl IntoPredicates for Vec<Predicate> {
    fn into_predicates(self) -> Predicates {
        Predicates(Array::from(self))
    }
}

impl IntoPredicates for Option<Predicate> {
    fn into_predicates(self) -> Predicates {
        match self {
            Some(predicate) => predicate.into_predicates(),
            None => Predicates::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{eq, gt, gte, lt, lte, neq, tests::format_writer};

    use super::*;

    #[test]
    fn test_or_sibling() {
        let pred = gte("id", "10").or(lt("id", "5"));
        assert_eq!("id>=10 OR id<5", format_writer(pred));
    }

    #[test]
    fn test_and_sibling() {
        let pred = gte("id", "10").and(lt("id", "20"));
        assert_eq!("id>=10 AND id<20", format_writer(pred));
    }

    #[test]
    fn test_or_members_or_joined() {
        let pred = eq("a", "1").or([eq("b", "2"), eq("c", "3")]);
        assert_eq!("a=1 OR b=2 OR c=3", format_writer(pred));
    }

    #[test]
    fn test_and_members_and_joined() {
        let pred = eq("a", "1").and([eq("b", "2"), eq("c", "3")]);
        assert_eq!("a=1 AND b=2 AND c=3", format_writer(pred));
    }

    #[test]
    fn test_chain_keeps_order() {
        let pred = eq("a", "1").or(eq("b", "2")).and(neq("c", "3"));
        assert_eq!("a=1 OR b=2 AND c<>3", format_writer(pred));
    }

    #[test]
    fn test_nested_junction_flattens() {
        let pred = eq("a", "1").or(eq("b", "2").and(eq("c", "3")));
        assert_eq!("a=1 OR b=2 AND c=3", format_writer(pred));
    }

    #[test]
    fn test_explicit_wraps_with_spaces() {
        let pred = explicit([gte("id", "10"), lt("id", "20")]);
        assert_eq!(" ( id>=10 AND id<20 ) ", format_writer(pred));
    }

    #[test]
    fn test_explicit_then_or() {
        let pred = explicit([gte("id", "10"), lte("id", "20")]).or(lt("id", "5"));
        assert_eq!(" ( id>=10 AND id<=20 )  OR id<5", format_writer(pred));
    }

    #[test]
    fn test_explicit_inside_or() {
        let pred = gt("a", "1").or(explicit([eq("b", "2"), eq("c", "3")]));
        assert_eq!("a>1 OR  ( b=2 AND c=3 ) ", format_writer(pred));
    }

    #[test]
    fn test_nested_explicit() {
        let pred = explicit([eq("a", "1"), explicit([eq("b", "2")]).or(eq("c", "3"))]);
        assert_eq!(" ( a=1 AND  ( b=2 )  OR c=3 ) ", format_writer(pred));
    }

    #[test]
    fn test_empty_explicit_is_blank() {
        let pred = explicit(());
        assert!(pred.is_blank());
        assert_eq!("", format_writer(pred));
        let pred = explicit([eq("", "1")]);
        assert!(pred.is_blank());
    }

    #[test]
    fn test_empty_junction_is_skipped() {
        let pred = eq("a", "1").or(()).and(eq("b", "2"));
        assert_eq!("a=1 AND b=2", format_writer(pred));
    }

    #[test]
    fn test_leading_combinator() {
        assert_eq!(None, eq("a", "1").or(lt("b", "2")).leading_combinator());
        assert_eq!(
            Some(Combinator::Or),
            eq("", "1").or(lt("b", "2")).leading_combinator()
        );
        assert_eq!(
            Some(Combinator::And),
            explicit(()).or(()).and(lt("b", "2")).leading_combinator()
        );
        assert_eq!(None, eq("", "1").or(()).leading_combinator());
    }

    #[test]
    fn test_blank_receiver_keeps_or_inside_explicit() {
        let pred = explicit([gte("a", "1"), eq("", "x").or(lt("b", "2"))]);
        assert_eq!(" ( a>=1 OR b<2 ) ", format_writer(pred));
        let pred = explicit([gte("a", "1"), explicit(()).or([lt("b", "2"), gt("c", "3")])]);
        assert_eq!(" ( a>=1 OR b<2 OR c>3 ) ", format_writer(pred));
    }

    #[test]
    fn test_blank_receiver_keeps_or_in_junction() {
        let pred = gte("a", "1").and([eq("b", "2"), eq("", "x").or(lt("c", "3"))]);
        assert_eq!("a>=1 AND b=2 OR c<3", format_writer(pred));
    }

    #[test]
    fn test_blank_head_drops_leading_operator() {
        let pred = eq("", "1").or(lt("id", "5"));
        assert!(!pred.is_blank());
        assert_eq!("id<5", format_writer(pred));
    }

    #[test]
    fn test_display_matches_writer() {
        let pred = between("id", "1", "2").or(eq("id", "7"));
        assert_eq!("id BETWEEN 1 AND 2 OR id=7", pred.to_string());
    }

    #[test]
    fn test_into_predicates_shapes() {
        assert_eq!(1, eq("a", "1").into_predicates().len());
        assert_eq!(2, [eq("a", "1"), eq("b", "2")].into_predicates().len());
        assert_eq!(2, vec![eq("a", "1"), eq("b", "2")].into_predicates().len());
        assert!(().into_predicates().is_empty());
        assert!(None::<Predicate>.into_predicates().is_empty());
        assert_eq!(1, Some(eq("a", "1")).into_predicates().len());
    }
}

use std::fmt;
use std::sync::Arc;

use atoll_container::Datum;

use crate::error::QueryResult;
use crate::evaluator::Candidate;

pub mod combine;
pub mod compare;

pub use combine::{Combine, CombineOp};
pub use compare::{Compare, CompareOp};

/// What a comparison leaf tests: a dataset element, an attribute's value or
/// name, or a link name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TargetKind {
    DataElement,
    AttributeValue,
    AttributeName,
    LinkName,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::DataElement => "data element",
            TargetKind::AttributeValue => "attribute value",
            TargetKind::AttributeName => "attribute name",
            TargetKind::LinkName => "link name",
        };
        f.write_str(name)
    }
}

/// An immutable boolean expression tree.
///
/// Nodes are shared structurally: cloning a predicate or combining it into a
/// larger tree reuses the existing nodes, so a predicate can appear in any
/// number of trees and outlive the snapshots it was evaluated against.
#[derive(Debug, Clone)]
pub enum Predicate {
    Compare(Arc<Compare>),
    Combine(Arc<Combine>),
}

impl Predicate {
    /// Build a comparison leaf. The operand is type-checked against the
    /// target kind immediately: name and link targets take string operands,
    /// element targets take numeric operands.
    pub fn compare(
        target: TargetKind,
        op: CompareOp,
        operand: impl Into<Datum>,
    ) -> QueryResult<Predicate> {
        Ok(Predicate::Compare(Arc::new(Compare::new(
            target,
            op,
            operand.into(),
        )?)))
    }

    /// Combine two predicates under AND/OR. Both inputs stay usable in other
    /// trees.
    pub fn combine(op: CombineOp, left: Predicate, right: Predicate) -> Predicate {
        Predicate::Combine(Arc::new(Combine { op, left, right }))
    }

    /// Evaluate the tree bottom-up against one candidate, left to right,
    /// with AND/OR short-circuiting.
    pub(crate) fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match self {
            Predicate::Compare(leaf) => leaf.matches(candidate),
            Predicate::Combine(node) => node.matches(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use atoll_container::Datum;

    use super::*;
    use crate::error::QueryError;

    #[test]
    fn link_name_predicates_require_string_operands() {
        let err = Predicate::compare(TargetKind::LinkName, CompareOp::Eq, 5i32).unwrap_err();
        assert!(matches!(
            err,
            QueryError::TypeMismatch {
                target: TargetKind::LinkName,
                ..
            }
        ));
        assert!(Predicate::compare(TargetKind::LinkName, CompareOp::Eq, "pressure").is_ok());
    }

    #[test]
    fn data_element_predicates_require_numeric_operands() {
        let err =
            Predicate::compare(TargetKind::DataElement, CompareOp::Gt, "21.7").unwrap_err();
        assert!(matches!(err, QueryError::TypeMismatch { .. }));
        assert!(Predicate::compare(TargetKind::DataElement, CompareOp::Gt, 21.7f64).is_ok());
    }

    #[test]
    fn attribute_value_predicates_accept_both_operand_families() {
        assert!(Predicate::compare(TargetKind::AttributeValue, CompareOp::Eq, "x").is_ok());
        assert!(Predicate::compare(TargetKind::AttributeValue, CompareOp::Eq, 4i64).is_ok());
    }

    #[test]
    fn combining_shares_nodes_instead_of_copying() {
        let leaf = Predicate::compare(TargetKind::DataElement, CompareOp::Gt, 1i32).unwrap();
        let tree_a = Predicate::combine(CombineOp::And, leaf.clone(), leaf.clone());
        let tree_b = Predicate::combine(CombineOp::Or, leaf.clone(), leaf.clone());

        let as_arc = |p: &Predicate| match p {
            Predicate::Compare(leaf) => leaf.clone(),
            _ => panic!("expected leaf"),
        };
        let (left_a, left_b) = match (&tree_a, &tree_b) {
            (Predicate::Combine(a), Predicate::Combine(b)) => {
                (as_arc(&a.left), as_arc(&b.left))
            }
            _ => panic!("expected compound nodes"),
        };
        assert!(Arc::ptr_eq(&left_a, &left_b));
        assert!(Arc::ptr_eq(&left_a, &as_arc(&leaf)));
    }

    #[test]
    fn leaves_match_their_own_candidate_kind_only() {
        let leaf = Predicate::compare(TargetKind::LinkName, CompareOp::Eq, "pressure").unwrap();
        assert!(leaf.matches(&Candidate::Link { name: "pressure" }));
        assert!(!leaf.matches(&Candidate::Element {
            value: &Datum::Int32(5)
        }));
    }
}

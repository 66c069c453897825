use std::cmp::Ordering;

use atoll_container::Datum;

use crate::error::{QueryError, QueryResult};
use crate::evaluator::Candidate;
use crate::predicate::TargetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl CompareOp {
    /// Decide the operator against an optional ordering. `None` means the
    /// two values are incomparable (e.g. a string attribute against a
    /// numeric operand): nothing is equal to, less than, or greater than
    /// such a value, but `Ne` holds for all types.
    fn decide(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (CompareOp::Ne, None) => true,
            (_, None) => false,
            (CompareOp::Eq, Some(ord)) => ord == Ordering::Equal,
            (CompareOp::Ne, Some(ord)) => ord != Ordering::Equal,
            (CompareOp::Lt, Some(ord)) => ord == Ordering::Less,
            (CompareOp::Gt, Some(ord)) => ord == Ordering::Greater,
            (CompareOp::Le, Some(ord)) => ord != Ordering::Greater,
            (CompareOp::Ge, Some(ord)) => ord != Ordering::Less,
        }
    }
}

/// Comparison leaf: tests one candidate value against a literal operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub target: TargetKind,
    pub op: CompareOp,
    pub operand: Datum,
}

impl Compare {
    pub(crate) fn new(target: TargetKind, op: CompareOp, operand: Datum) -> QueryResult<Compare> {
        let valid = match target {
            TargetKind::AttributeName | TargetKind::LinkName => !operand.is_numeric(),
            TargetKind::DataElement => operand.is_numeric(),
            TargetKind::AttributeValue => true,
        };
        if !valid {
            return Err(QueryError::TypeMismatch { target, operand });
        }
        Ok(Compare {
            target,
            op,
            operand,
        })
    }

    /// A leaf only ever matches candidates of its own target kind; attribute
    /// candidates expose both their name and their value.
    pub(crate) fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match (self.target, candidate) {
            (TargetKind::DataElement, Candidate::Element { value }) => {
                self.op.decide(value.compare(&self.operand))
            }
            (TargetKind::AttributeValue, Candidate::Attribute { value, .. }) => {
                self.op.decide(value.compare(&self.operand))
            }
            (TargetKind::AttributeName, Candidate::Attribute { name, .. }) => self
                .op
                .decide(Datum::from(*name).compare(&self.operand)),
            (TargetKind::LinkName, Candidate::Link { name }) => self
                .op
                .decide(Datum::from(*name).compare(&self.operand)),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(value: &Datum) -> Candidate<'_> {
        Candidate::Element { value }
    }

    #[test]
    fn operators_follow_total_order() {
        let le = Compare::new(TargetKind::DataElement, CompareOp::Le, Datum::Int32(5)).unwrap();
        assert!(le.matches(&element(&Datum::Int32(5))));
        assert!(le.matches(&element(&Datum::Int32(4))));
        assert!(!le.matches(&element(&Datum::Int32(6))));

        let ge = Compare::new(TargetKind::DataElement, CompareOp::Ge, Datum::Float64(2.5))
            .unwrap();
        assert!(ge.matches(&element(&Datum::Float64(2.5))));
        assert!(!ge.matches(&element(&Datum::Float64(2.4))));
    }

    #[test]
    fn ne_holds_for_incomparable_values() {
        let ne = Compare::new(TargetKind::AttributeValue, CompareOp::Ne, Datum::Int32(7))
            .unwrap();
        let value = Datum::Str("seven".to_string());
        assert!(ne.matches(&Candidate::Attribute {
            name: "label",
            value: &value,
        }));

        let eq = Compare::new(TargetKind::AttributeValue, CompareOp::Eq, Datum::Int32(7))
            .unwrap();
        assert!(!eq.matches(&Candidate::Attribute {
            name: "label",
            value: &value,
        }));
    }

    #[test]
    fn attribute_name_leaves_test_the_name() {
        let leaf = Compare::new(
            TargetKind::AttributeName,
            CompareOp::Eq,
            Datum::from("SensorID"),
        )
        .unwrap();
        let value = Datum::from("1234-567-89");
        assert!(leaf.matches(&Candidate::Attribute {
            name: "SensorID",
            value: &value,
        }));
        assert!(!leaf.matches(&Candidate::Attribute {
            name: "Units",
            value: &value,
        }));
    }
}

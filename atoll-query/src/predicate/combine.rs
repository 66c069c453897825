use crate::evaluator::Candidate;
use crate::predicate::Predicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CombineOp {
    And,
    Or,
}

/// AND/OR node over two sub-trees. Never mutated after construction; the
/// operands are shared, not copied.
#[derive(Debug, Clone)]
pub struct Combine {
    pub op: CombineOp,
    pub left: Predicate,
    pub right: Predicate,
}

impl Combine {
    /// Left operand first; AND short-circuits on false, OR on true.
    pub(crate) fn matches(&self, candidate: &Candidate<'_>) -> bool {
        match self.op {
            CombineOp::And => self.left.matches(candidate) && self.right.matches(candidate),
            CombineOp::Or => self.left.matches(candidate) || self.right.matches(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use atoll_container::Datum;

    use super::*;
    use crate::predicate::{CompareOp, TargetKind};

    fn gt(v: f64) -> Predicate {
        Predicate::compare(TargetKind::DataElement, CompareOp::Gt, v).unwrap()
    }

    fn lt(v: f64) -> Predicate {
        Predicate::compare(TargetKind::DataElement, CompareOp::Lt, v).unwrap()
    }

    #[test]
    fn and_or_follow_boolean_semantics() {
        let band = Predicate::combine(CombineOp::And, gt(21.7), lt(26.9));
        let either = Predicate::combine(CombineOp::Or, lt(21.0), gt(29.0));

        let inside = Datum::Float64(23.4);
        let outside = Datum::Float64(28.0);
        assert!(band.matches(&Candidate::Element { value: &inside }));
        assert!(!band.matches(&Candidate::Element { value: &outside }));
        assert!(!either.matches(&Candidate::Element { value: &inside }));
        assert!(either.matches(&Candidate::Element {
            value: &Datum::Float64(29.5)
        }));
    }
}

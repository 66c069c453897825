use std::collections::BTreeSet;

use atoll_container::{
    traverse::visit_objects, AttributeReference, ContainerId, Dataset, Datum, Object,
    ObjectReference, RegionReference, Snapshot,
};
use tracing::debug;

use crate::error::QueryResult;
use crate::predicate::Predicate;
use crate::view::ViewResult;

/// One value under test during evaluation. Attribute candidates expose both
/// their name and their value, so name and value leaves apply to the same
/// pass.
#[derive(Debug)]
pub enum Candidate<'a> {
    Element { value: &'a Datum },
    Attribute { name: &'a str, value: &'a Datum },
    Link { name: &'a str },
}

/// Evaluation scope of one `apply` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryScope {
    /// One dataset: its elements and its attributes.
    Dataset(String),
    /// Every object in the container: link names, attributes, and dataset
    /// elements.
    WholeContainer,
}

/// Applies predicate trees to container snapshots.
///
/// Evaluation is single-threaded per call and walks the scope exactly once;
/// there is no retry or cancellation inside — callers bound work by scoping
/// to a dataset, and reacquire snapshots themselves after a failure.
pub struct QueryEvaluator;

impl QueryEvaluator {
    /// Evaluate `predicate` against one snapshot.
    ///
    /// Fails with `SnapshotUnavailable` (no partial view) if the snapshot's
    /// version token is stale. Element matches coalesce into one region
    /// reference per dataset; attribute and link matches produce one
    /// reference each.
    pub fn apply(
        predicate: &Predicate,
        snapshot: &Snapshot,
        scope: &QueryScope,
    ) -> QueryResult<ViewResult> {
        let state = snapshot.state()?;
        let container = snapshot.container_id();
        let mut view = ViewResult::default();

        match scope {
            QueryScope::Dataset(path) => {
                let dataset = state.dataset_at(path)?;
                evaluate_dataset(&mut view, container, path, dataset.as_ref(), predicate);
                evaluate_attributes(&mut view, container, path, dataset.attributes.iter(), predicate);
            }
            QueryScope::WholeContainer => {
                visit_objects(&state.root, &mut |path, object| {
                    let link_name = path.rsplit('/').next().unwrap_or(path);
                    if predicate.matches(&Candidate::Link { name: link_name }) {
                        view.insert_object(ObjectReference {
                            container: container.clone(),
                            path: path.to_string(),
                        });
                    }
                    evaluate_attributes(
                        &mut view,
                        container,
                        path,
                        object.attributes().iter(),
                        predicate,
                    );
                    if let Object::Dataset(dataset) = object {
                        evaluate_dataset(&mut view, container, path, dataset.as_ref(), predicate);
                    }
                });
            }
        }

        debug!(
            container = %container,
            version = snapshot.version(),
            objects = view.objects().len(),
            attributes = view.attributes().len(),
            regions = view.regions().len(),
            "query evaluated"
        );
        Ok(view)
    }

    /// Evaluate `predicate` independently against several snapshots and
    /// union the results. Owning-container identity keeps references from
    /// different containers distinct.
    pub fn apply_multi(predicate: &Predicate, snapshots: &[Snapshot]) -> QueryResult<ViewResult> {
        let mut merged = ViewResult::default();
        for snapshot in snapshots {
            let view = Self::apply(predicate, snapshot, &QueryScope::WholeContainer)?;
            merged.merge(view);
        }
        Ok(merged)
    }
}

/// Test every element of a dataset; matching coordinates coalesce into a
/// single region reference.
fn evaluate_dataset(
    view: &mut ViewResult,
    container: &ContainerId,
    path: &str,
    dataset: &Dataset,
    predicate: &Predicate,
) {
    let mut selection = BTreeSet::new();
    for (coords, value) in dataset.elements() {
        if predicate.matches(&Candidate::Element { value: &value }) {
            selection.insert(coords);
        }
    }
    if !selection.is_empty() {
        view.insert_region(RegionReference {
            container: container.clone(),
            path: path.to_string(),
            selection,
        });
    }
}

fn evaluate_attributes<'a>(
    view: &mut ViewResult,
    container: &ContainerId,
    path: &str,
    attributes: impl Iterator<Item = (&'a String, &'a atoll_container::Attribute)>,
    predicate: &Predicate,
) {
    for (name, attribute) in attributes {
        let candidate = Candidate::Attribute {
            name,
            value: &attribute.value,
        };
        if predicate.matches(&candidate) {
            view.insert_attribute(AttributeReference {
                container: container.clone(),
                path: path.to_string(),
                attribute: name.clone(),
            });
        }
    }
}

use atoll_container::{Resolved, Snapshot};
use atoll_query::{ViewFlags, ViewResult};
use tracing::warn;

/// Render a query view as printable lines: which reference kinds are
/// present, per-kind counts, and for region references the satisfying
/// element values resolved against the owning container's snapshot.
pub fn view_report_lines(view: &ViewResult, snapshots: &[Snapshot]) -> Vec<String> {
    let mut lines = Vec::new();

    let flags = view.flags();
    if flags.contains(ViewFlags::OBJECTS) {
        lines.push("View has object references".to_string());
    }
    if flags.contains(ViewFlags::REGIONS) {
        lines.push("View has region references".to_string());
    }
    if flags.contains(ViewFlags::ATTRIBUTES) {
        lines.push("View has attribute references".to_string());
    }
    if flags.is_empty() {
        lines.push("View is empty".to_string());
        return lines;
    }

    if !view.objects().is_empty() {
        lines.push(format!("Found {} object references", view.objects().len()));
        for reference in view.objects().iter() {
            lines.push(format!(
                "obj name: \"{}\"; obj file: \"{}\"",
                reference.path, reference.container.name
            ));
        }
    }

    if !view.attributes().is_empty() {
        lines.push(format!(
            "Found {} attribute references",
            view.attributes().len()
        ));
        for reference in view.attributes().iter() {
            lines.push(format!(
                "attr name: \"{}\"; obj name: \"{}\"; attr file: \"{}\"",
                reference.attribute, reference.path, reference.container.name
            ));
        }
    }

    if !view.regions().is_empty() {
        lines.push(format!("Found {} region references", view.regions().len()));
        for reference in view.regions().iter() {
            lines.push(format!(
                "obj name: \"{}\"; obj file: \"{}\"",
                reference.path, reference.container.name
            ));
            let snapshot = snapshots
                .iter()
                .find(|s| s.container_id() == &reference.container);
            match snapshot {
                Some(snapshot) => {
                    let resolved = snapshot
                        .container()
                        .resolve(&reference.clone().into(), snapshot);
                    match resolved {
                        Ok(Resolved::Region { values }) => {
                            lines.push(format!(
                                "Values of \"{}\" that satisfy the query: {}",
                                reference.path,
                                values.len()
                            ));
                            let rendered: Vec<String> =
                                values.iter().map(|v| v.to_string()).collect();
                            lines.push(rendered.join(" "));
                        }
                        Ok(other) => {
                            warn!(path = %reference.path, "unexpected resolution: {:?}", other);
                        }
                        Err(err) => {
                            lines.push(format!(
                                "Caught error resolving {}: {}",
                                reference.path, err
                            ));
                        }
                    }
                }
                None => {
                    lines.push(format!(
                        "No snapshot available for file \"{}\"",
                        reference.container.name
                    ));
                }
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use atoll_container::Container;
    use atoll_query::{CompareOp, Predicate, QueryEvaluator, QueryScope, TargetKind};

    use super::*;

    #[test]
    fn region_lines_include_satisfying_values() {
        let container = Container::create("view.h5");
        let mut tx = container.begin_transaction(2).unwrap();
        tx.create_dataset("/pressure", vec![20i32, 25, 25, 28], vec![4], None)
            .unwrap();
        tx.commit().unwrap();
        let snapshot = container.acquire_snapshot(2).unwrap();

        let query = Predicate::compare(TargetKind::DataElement, CompareOp::Eq, 25i32).unwrap();
        let view =
            QueryEvaluator::apply(&query, &snapshot, &QueryScope::WholeContainer).unwrap();

        let lines = view_report_lines(&view, std::slice::from_ref(&snapshot));
        assert_eq!(lines[0], "View has region references");
        assert!(lines
            .contains(&"Values of \"/pressure\" that satisfy the query: 2".to_string()));
        assert!(lines.contains(&"25 25".to_string()));
    }

    #[test]
    fn empty_views_say_so() {
        let view = ViewResult::default();
        let lines = view_report_lines(&view, &[]);
        assert_eq!(lines, vec!["View is empty".to_string()]);
    }
}

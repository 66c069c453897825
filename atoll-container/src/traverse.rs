//! Depth-first traversal of a container tree.

use crate::container::{Group, Object};

/// Visit every object below `root` in insertion order, depth first, with its
/// absolute path. The root group itself is not visited.
pub fn visit_objects<'a>(root: &'a Group, f: &mut impl FnMut(&str, &'a Object)) {
    visit_inner(root, "", f);
}

fn visit_inner<'a>(group: &'a Group, prefix: &str, f: &mut impl FnMut(&str, &'a Object)) {
    for (name, object) in &group.members {
        let path = format!("{}/{}", prefix, name);
        f(&path, object);
        if let Object::Group(child) = object {
            visit_inner(child, &path, f);
        }
    }
}

/// Collect `(path, dataset)` pairs for every dataset below `root`.
pub fn datasets(
    root: &Group,
) -> Vec<(String, std::sync::Arc<crate::container::Dataset>)> {
    let mut out = Vec::new();
    visit_objects(root, &mut |path, object| {
        if let Object::Dataset(dataset) = object {
            out.push((path.to_string(), dataset.clone()));
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;

    #[test]
    fn traversal_is_depth_first_in_insertion_order() {
        let container = Container::create("t");
        let mut tx = container.begin_transaction(2).unwrap();
        tx.create_dataset("/a", vec![1i32], vec![1], None).unwrap();
        tx.create_group("/g");
        tx.create_dataset("/g/b", vec![2i32], vec![1], None).unwrap();
        tx.create_dataset("/z", vec![3i32], vec![1], None).unwrap();
        tx.commit().unwrap();

        let snapshot = container.acquire_snapshot(2).unwrap();
        let state = snapshot.state().unwrap();
        let mut paths = Vec::new();
        visit_objects(&state.root, &mut |path, _| paths.push(path.to_string()));
        assert_eq!(paths, vec!["/a", "/g", "/g/b", "/z"]);

        let dataset_paths: Vec<String> =
            datasets(&state.root).into_iter().map(|(p, _)| p).collect();
        assert_eq!(dataset_paths, vec!["/a", "/g/b", "/z"]);
    }
}

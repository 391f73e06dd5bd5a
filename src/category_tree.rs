//! Category Tree Utilities
//!
//! Shapes the flat category list returned by the backend into a
//! parent/child tree and back.

use std::collections::{HashMap, HashSet};

use crate::models::Category;

/// What to do with a category whose `parent_id` matches no known id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Leave it out of the tree entirely
    #[default]
    Drop,
    /// Show it at root level
    PromoteToRoot,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryTreeError {
    #[error("category {id} references unknown parent {parent_id}")]
    UnknownParent { id: u32, parent_id: u32 },
    #[error("category {id} is part of a parent cycle")]
    Cycle { id: u32 },
    #[error("duplicate category id {id}")]
    DuplicateId { id: u32 },
}

/// Build the tree, silently dropping orphans
pub fn build_category_tree(flat: &[Category]) -> Vec<Category> {
    build_category_tree_with(flat, OrphanPolicy::Drop)
}

/// Build the tree from a flat list. Sibling order follows input order.
///
/// Categories caught in a parent cycle can't be reached from any root and
/// never appear in the output.
pub fn build_category_tree_with(flat: &[Category], policy: OrphanPolicy) -> Vec<Category> {
    let known: HashSet<u32> = flat.iter().map(|c| c.id).collect();

    let mut roots = Vec::new();
    let mut children_map: HashMap<u32, Vec<&Category>> = HashMap::new();
    for category in flat {
        match category.parent_id {
            None => roots.push(category),
            Some(parent_id) if known.contains(&parent_id) => {
                children_map.entry(parent_id).or_default().push(category);
            }
            Some(_) => {
                if policy == OrphanPolicy::PromoteToRoot {
                    roots.push(category);
                }
            }
        }
    }

    fn attach(
        category: &Category,
        children_map: &HashMap<u32, Vec<&Category>>,
        visited: &mut HashSet<u32>,
    ) -> Option<Category> {
        if !visited.insert(category.id) {
            return None;
        }
        let mut node = detached(category);
        if let Some(children) = children_map.get(&category.id) {
            for child in children {
                if let Some(child_node) = attach(child, children_map, visited) {
                    node.subcategories.push(child_node);
                }
            }
        }
        Some(node)
    }

    let mut visited = HashSet::new();
    roots
        .into_iter()
        .filter_map(|root| attach(root, &children_map, &mut visited))
        .collect()
}

/// Pre-order flatten. Every node is emitted as it sits in the tree,
/// children included; an id already emitted is skipped.
pub fn flatten_category_tree(tree: &[Category]) -> Vec<Category> {
    fn collect(nodes: &[Category], visited: &mut HashSet<u32>, result: &mut Vec<Category>) {
        for node in nodes {
            if !visited.insert(node.id) {
                continue;
            }
            result.push(node.clone());
            collect(&node.subcategories, visited, result);
        }
    }

    let mut result = Vec::new();
    collect(tree, &mut HashSet::new(), &mut result);
    result
}

/// Pre-order flatten with depth, skipping the children of collapsed ids.
/// Returns (Category, depth) pairs in display order; rows are detached
/// copies with an empty `subcategories` list.
pub fn flatten_with_depth(tree: &[Category], collapsed: &HashSet<u32>) -> Vec<(Category, usize)> {
    fn collect(
        nodes: &[Category],
        depth: usize,
        collapsed: &HashSet<u32>,
        visited: &mut HashSet<u32>,
        result: &mut Vec<(Category, usize)>,
    ) {
        for node in nodes {
            if !visited.insert(node.id) {
                continue;
            }
            result.push((detached(node), depth));
            if !collapsed.contains(&node.id) {
                collect(&node.subcategories, depth + 1, collapsed, visited, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(tree, 0, collapsed, &mut HashSet::new(), &mut result);
    result
}

/// Sort siblings at every level by `sort_order`, then name
pub fn sort_category_tree(tree: &mut [Category]) {
    tree.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
    for node in tree.iter_mut() {
        sort_category_tree(&mut node.subcategories);
    }
}

/// Every structural problem in a flat list
pub fn category_issues(flat: &[Category]) -> Vec<CategoryTreeError> {
    let mut issues = Vec::new();
    let mut parents: HashMap<u32, Option<u32>> = HashMap::new();
    for category in flat {
        if parents.insert(category.id, category.parent_id).is_some() {
            issues.push(CategoryTreeError::DuplicateId { id: category.id });
        }
    }

    for category in flat {
        let Some(parent_id) = category.parent_id else { continue };
        if !parents.contains_key(&parent_id) {
            issues.push(CategoryTreeError::UnknownParent { id: category.id, parent_id });
        }
    }

    let mut reported = HashSet::new();
    for category in flat {
        if !reported.insert(category.id) {
            continue;
        }
        let mut seen = HashSet::from([category.id]);
        let mut current = category.parent_id;
        while let Some(id) = current {
            if id == category.id {
                issues.push(CategoryTreeError::Cycle { id: category.id });
                break;
            }
            if !seen.insert(id) {
                break;
            }
            current = parents.get(&id).copied().flatten();
        }
    }
    issues
}

/// First structural problem, if any
pub fn validate_categories(flat: &[Category]) -> Result<(), CategoryTreeError> {
    match category_issues(flat).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}

/// Ids of `id` and everything below it
pub fn descendant_ids(flat: &[Category], id: u32) -> HashSet<u32> {
    let mut result = HashSet::from([id]);
    let mut frontier = vec![id];
    while let Some(current) = frontier.pop() {
        for child in flat.iter().filter(|c| c.parent_id == Some(current)) {
            if result.insert(child.id) {
                frontier.push(child.id);
            }
        }
    }
    result
}

/// Root-to-leaf chain ending at `id`; empty when `id` is unknown
pub fn ancestry(flat: &[Category], id: u32) -> Vec<Category> {
    let by_id: HashMap<u32, &Category> = flat.iter().map(|c| (c.id, c)).collect();
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(id);
    while let Some(cid) = current {
        let Some(category) = by_id.get(&cid) else { break };
        if !seen.insert(cid) {
            break;
        }
        chain.push(detached(category));
        current = category.parent_id;
    }
    chain.reverse();
    chain
}

fn detached(category: &Category) -> Category {
    Category {
        id: category.id,
        name: category.name.clone(),
        slug: category.slug.clone(),
        parent_id: category.parent_id,
        status: category.status,
        sort_order: category.sort_order,
        subcategories: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: u32, parent_id: Option<u32>) -> Category {
        Category::new(id, &format!("Category {}", id), parent_id)
    }

    fn ids(cats: &[Category]) -> Vec<u32> {
        cats.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_build_and_flatten() {
        let flat = vec![
            cat(1, None),    // Root 1
            cat(3, Some(1)), // Child of 1
            cat(2, None),    // Root 2
            cat(5, Some(3)), // Grandchild of 1
            cat(4, Some(1)), // Child of 1
        ];

        let tree = build_category_tree(&flat);
        assert_eq!(ids(&tree), vec![1, 2]);
        assert_eq!(ids(&tree[0].subcategories), vec![3, 4]);
        assert_eq!(ids(&tree[0].subcategories[0].subcategories), vec![5]);

        let flattened = flatten_category_tree(&tree);
        assert_eq!(ids(&flattened), vec![1, 3, 5, 4, 2]);
        assert_eq!(flattened[0], tree[0]);
        assert_eq!(ids(&flattened[1].subcategories), vec![5]);
        assert!(flattened[2].subcategories.is_empty());

        let rows = flatten_with_depth(&tree, &HashSet::new());
        assert!(rows.iter().all(|(c, _)| c.subcategories.is_empty()));
    }

    #[test]
    fn test_flatten_is_permutation_with_parents_first() {
        let flat = vec![cat(10, Some(20)), cat(20, None), cat(30, Some(10)), cat(40, Some(20))];
        let flattened = flatten_category_tree(&build_category_tree(&flat));

        let mut got = ids(&flattened);
        got.sort();
        assert_eq!(got, vec![10, 20, 30, 40]);

        let position = |id: u32| flattened.iter().position(|c| c.id == id).unwrap();
        for c in &flat {
            if let Some(parent) = c.parent_id {
                assert!(position(parent) < position(c.id));
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(build_category_tree(&[]).is_empty());
        assert!(flatten_category_tree(&[]).is_empty());
    }

    #[test]
    fn test_orphan_is_dropped_by_default() {
        let flat = vec![cat(1, None), cat(2, Some(1)), cat(3, Some(99))];
        let tree = build_category_tree(&flat);
        assert_eq!(ids(&tree), vec![1]);
        assert_eq!(ids(&flatten_category_tree(&tree)), vec![1, 2]);
    }

    #[test]
    fn test_orphan_promoted_to_root() {
        let flat = vec![cat(1, None), cat(3, Some(99)), cat(4, Some(3))];
        let tree = build_category_tree_with(&flat, OrphanPolicy::PromoteToRoot);
        assert_eq!(ids(&tree), vec![1, 3]);
        assert_eq!(ids(&tree[1].subcategories), vec![4]);
    }

    #[test]
    fn test_cycle_terminates_and_is_reported() {
        let flat = vec![cat(1, None), cat(2, Some(3)), cat(3, Some(2)), cat(4, Some(4))];
        let tree = build_category_tree(&flat);
        assert_eq!(ids(&flatten_category_tree(&tree)), vec![1]);

        let issues = category_issues(&flat);
        assert!(issues.contains(&CategoryTreeError::Cycle { id: 2 }));
        assert!(issues.contains(&CategoryTreeError::Cycle { id: 3 }));
        assert!(issues.contains(&CategoryTreeError::Cycle { id: 4 }));
        assert!(!issues.contains(&CategoryTreeError::Cycle { id: 1 }));
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate_categories(&[cat(1, None), cat(2, Some(1))]), Ok(()));
        assert_eq!(
            validate_categories(&[cat(1, None), cat(2, Some(7))]),
            Err(CategoryTreeError::UnknownParent { id: 2, parent_id: 7 })
        );
        assert_eq!(
            validate_categories(&[cat(1, None), cat(1, None)]),
            Err(CategoryTreeError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn test_flatten_with_depth_skips_collapsed() {
        let flat = vec![cat(1, None), cat(2, Some(1)), cat(3, Some(2)), cat(4, None)];
        let tree = build_category_tree(&flat);

        let all = flatten_with_depth(&tree, &HashSet::new());
        let depths: Vec<(u32, usize)> = all.iter().map(|(c, d)| (c.id, *d)).collect();
        assert_eq!(depths, vec![(1, 0), (2, 1), (3, 2), (4, 0)]);

        let folded = flatten_with_depth(&tree, &HashSet::from([2]));
        assert_eq!(folded.iter().map(|(c, _)| c.id).collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_sort_by_sort_order_then_name() {
        let mut a = cat(1, None);
        a.sort_order = 2;
        let mut b = cat(2, None);
        b.sort_order = 1;
        let mut c = cat(3, Some(1));
        c.name = "Zeta".into();
        let mut d = cat(4, Some(1));
        d.name = "Alpha".into();

        let mut tree = build_category_tree(&[a, b, c, d]);
        sort_category_tree(&mut tree);
        assert_eq!(ids(&tree), vec![2, 1]);
        assert_eq!(ids(&tree[1].subcategories), vec![4, 3]);
    }

    #[test]
    fn test_descendants_and_ancestry() {
        let flat = vec![cat(1, None), cat(2, Some(1)), cat(3, Some(2)), cat(4, None)];
        assert_eq!(descendant_ids(&flat, 1), HashSet::from([1, 2, 3]));
        assert_eq!(ids(&ancestry(&flat, 3)), vec![1, 2, 3]);
        assert!(ancestry(&flat, 42).is_empty());
    }
}

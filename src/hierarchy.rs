//! Tree construction from flat, path-tagged leaf tasks.
//!
//! The source document yields a flat ordered list of leaves, each tagged
//! with the section titles above it. This module materializes the implied
//! tree: one synthetic group task per distinct path prefix, a synthetic root
//! above everything, and sequential ids in first-discovery order. While
//! linking, each leaf's cost is accumulated into the per-owner cost map of
//! every ancestor group, root included.

use std::collections::HashMap;

use crate::models::{SectionPath, Task, TaskKind};

/// Builds the project tree from leaves in document order.
///
/// The root gets id 0 and no parent; every other task gets the next
/// sequential id as it is first discovered, so output position equals id.
/// Re-running on the same ordered input yields identical ids and links.
pub fn build_tree(project_name: &str, leaves: Vec<Task>) -> Vec<Task> {
    let mut tasks: Vec<Task> = Vec::with_capacity(leaves.len() + 1);
    let mut root = Task::group(project_name, SectionPath::root());
    root.id = 0;
    root.parent_id = None;
    tasks.push(root);

    // path prefix → id (== index) of its group task
    let mut groups: HashMap<SectionPath, usize> = HashMap::new();
    groups.insert(SectionPath::root(), 0);

    let mut next_id = 0usize;
    for mut leaf in leaves {
        let path = leaf.path.clone();

        for depth in 1..=path.len() {
            let prefix = path.prefix(depth);
            if groups.contains_key(&prefix) {
                continue;
            }
            next_id += 1;
            let parent = groups[&path.prefix(depth - 1)];
            let name = prefix.last().unwrap_or_default().to_string();
            let mut group = Task::group(name, prefix.clone());
            group.id = next_id;
            group.parent_id = Some(parent);
            groups.insert(prefix, next_id);
            tasks.push(group);
        }

        next_id += 1;
        leaf.id = next_id;
        leaf.parent_id = Some(groups[&path]);

        let owner = leaf.owner().unwrap_or_default().to_string();
        let cost = leaf.cost();
        let finished = leaf.finished_cost();
        tasks.push(leaf);

        // Roll the leaf's cost into every ancestor, root included.
        for depth in 0..=path.len() {
            let idx = groups[&path.prefix(depth)];
            if let TaskKind::Group(group) = &mut tasks[idx].kind {
                group.add_owner_cost(&owner, cost, finished);
            }
        }
    }

    tasks
}

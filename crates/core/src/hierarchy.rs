// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parent/child structure of work items.
//!
//! Work items are held in an [`ItemArena`] keyed by id; each node stores its
//! parent as an optional id. Ancestor walks are iterative lookups against
//! the arena with a visited set, so a cycle already present in stored data
//! cannot hang the validator.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::work_item::WorkItem;

/// Default nesting limit: a subtask cannot have subtasks.
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// The structural fields of a work item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    pub id: i64,
    pub project_id: i64,
    pub key: String,
    pub parent_id: Option<i64>,
}

impl From<&WorkItem> for ItemNode {
    fn from(item: &WorkItem) -> Self {
        ItemNode {
            id: item.id,
            project_id: item.project_id,
            key: item.key.clone(),
            parent_id: item.parent_id,
        }
    }
}

/// Work items indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ItemArena {
    nodes: HashMap<i64, ItemNode>,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an arena from loaded work items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a WorkItem>) -> Self {
        let mut arena = Self::new();
        for item in items {
            arena.insert(ItemNode::from(item));
        }
        arena
    }

    pub fn insert(&mut self, node: ItemNode) {
        self.nodes.insert(node.id, node);
    }

    pub fn get(&self, id: i64) -> Option<&ItemNode> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn label(&self, id: i64) -> String {
        self.get(id)
            .map(|n| n.key.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    /// Returns the ids of `id`'s ancestors, nearest first.
    ///
    /// Fails with [`Error::CircularHierarchy`] if the stored chain loops.
    /// A parent id that is not in the arena ends the chain.
    pub fn ancestors(&self, id: i64) -> Result<Vec<i64>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::from([id]);
        let mut current = self.get(id).and_then(|n| n.parent_id);

        while let Some(ancestor) = current {
            if !visited.insert(ancestor) {
                return Err(Error::CircularHierarchy {
                    item: self.label(ancestor),
                    parent: self.label(id),
                });
            }
            let Some(node) = self.get(ancestor) else {
                break;
            };
            chain.push(ancestor);
            current = node.parent_id;
        }

        Ok(chain)
    }

    /// Number of ancestors above `id` (0 for a top-level item).
    pub fn depth(&self, id: i64) -> Result<usize> {
        Ok(self.ancestors(id)?.len())
    }

    /// Ids of items whose parent is `id`, sorted.
    pub fn children(&self, id: i64) -> Vec<i64> {
        let mut children: Vec<i64> = self
            .nodes
            .values()
            .filter(|n| n.parent_id == Some(id))
            .map(|n| n.id)
            .collect();
        children.sort_unstable();
        children
    }

    /// Height of the subtree rooted at `id` (0 for a leaf).
    pub fn subtree_height(&self, id: i64) -> usize {
        let mut height = 0;
        let mut frontier = vec![id];
        let mut visited = HashSet::from([id]);

        loop {
            let next: Vec<i64> = frontier
                .iter()
                .flat_map(|&n| self.children(n))
                .filter(|c| visited.insert(*c))
                .collect();
            if next.is_empty() {
                return height;
            }
            height += 1;
            frontier = next;
        }
    }
}

/// Enforces parent existence, depth limits and acyclicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyValidator {
    max_depth: usize,
}

impl Default for HierarchyValidator {
    fn default() -> Self {
        HierarchyValidator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HierarchyValidator {
    pub fn new(max_depth: usize) -> Self {
        HierarchyValidator { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Checks that `proposed_parent` is a legal parent for `candidate`.
    ///
    /// `candidate` is `None` for an item that does not exist yet. Checks run
    /// in order: parent existence and project, depth limit (including the
    /// candidate's own subtree when it is re-parented), then the cycle walk.
    pub fn validate_parent(
        &self,
        candidate: Option<i64>,
        project_id: i64,
        proposed_parent: Option<i64>,
        arena: &ItemArena,
    ) -> Result<()> {
        let Some(parent_id) = proposed_parent else {
            return Ok(());
        };

        let parent = arena.get(parent_id).ok_or_else(|| {
            Error::InvalidHierarchy(format!("parent work item #{parent_id} does not exist"))
        })?;
        if parent.project_id != project_id {
            return Err(Error::InvalidHierarchy(format!(
                "parent {} belongs to another project",
                parent.key
            )));
        }

        let parent_depth = arena.depth(parent_id)?;
        let candidate_height = candidate.map_or(0, |id| arena.subtree_height(id));
        if Some(parent_id) != candidate && parent_depth + 1 + candidate_height > self.max_depth {
            let reason = if parent_depth >= self.max_depth {
                format!(
                    "{} is already nested {} level(s) deep (max {})",
                    parent.key, parent_depth, self.max_depth
                )
            } else {
                format!(
                    "moving an item with children under {} would exceed max depth {}",
                    parent.key, self.max_depth
                )
            };
            return Err(Error::InvalidHierarchy(reason));
        }

        if let Some(candidate) = candidate {
            if candidate == parent_id || arena.ancestors(parent_id)?.contains(&candidate) {
                return Err(Error::CircularHierarchy {
                    item: arena.label(candidate),
                    parent: parent.key.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;

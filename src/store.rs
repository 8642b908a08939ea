//! Arena storage for all thoughts created during one search.
//!
//! The store exclusively owns every node; parent/child links are ids, not
//! references, so the tree carries no ownership cycles. One store serves
//! exactly one logical search: [`crate::controller::SearchController::solve`]
//! allocates a fresh store per call, which resets the id counter and rules
//! out id collisions on reuse.

use crate::error::SearchError;
use crate::thought::{Thought, ThoughtId};

/// Indexed arena of [`Thought`] nodes.
///
/// Ids are assigned monotonically from 0 and double as indices into the
/// backing vector. Nodes are never deleted; the store is retained for the
/// lifetime of one search to support path reconstruction and rendering.
#[derive(Debug, Clone, Default)]
pub struct ThoughtStore {
    nodes: Vec<Thought>,
    next_id: ThoughtId,
}

impl ThoughtStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id and register a new thought.
    ///
    /// Appends the new id to the parent's `children_ids`. Fails only if
    /// `parent_id` names a node that does not exist in this store.
    pub fn create(
        &mut self,
        content: impl Into<String>,
        depth: usize,
        parent_id: Option<ThoughtId>,
    ) -> Result<ThoughtId, SearchError> {
        if let Some(parent_id) = parent_id {
            // Validate before allocating so a failed create leaves the store untouched.
            if parent_id >= self.nodes.len() {
                return Err(SearchError::UnknownThought(parent_id));
            }
        }

        let id = self.next_id;
        self.nodes.push(Thought::new(id, content.into(), depth, parent_id));
        self.next_id += 1;

        if let Some(parent_id) = parent_id {
            self.nodes[parent_id].children_ids.push(id);
        }
        Ok(id)
    }

    pub fn get(&self, id: ThoughtId) -> Result<&Thought, SearchError> {
        self.nodes.get(id).ok_or(SearchError::UnknownThought(id))
    }

    pub(crate) fn get_mut(&mut self, id: ThoughtId) -> Result<&mut Thought, SearchError> {
        self.nodes.get_mut(id).ok_or(SearchError::UnknownThought(id))
    }

    /// Root-first path from the root to `id`, walking `parent_id` links.
    pub fn path_to(&self, id: ThoughtId) -> Result<Vec<Thought>, SearchError> {
        let mut path = Vec::new();
        let mut current = self.get(id)?;
        loop {
            path.push(current.clone());
            match current.parent_id {
                Some(parent_id) => current = self.get(parent_id)?,
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }

    /// The root thought, if any node has been created yet.
    pub fn root(&self) -> Option<&Thought> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest depth reached by any node (0 for an empty store).
    pub fn max_depth_reached(&self) -> usize {
        self.nodes.iter().map(|t| t.depth).max().unwrap_or(0)
    }

    pub fn thoughts(&self) -> impl Iterator<Item = &Thought> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_monotonic_ids_from_zero() {
        let mut store = ThoughtStore::new();
        let root = store.create("root", 0, None).expect("root");
        let a = store.create("a", 1, Some(root)).expect("a");
        let b = store.create("b", 1, Some(root)).expect("b");
        assert_eq!((root, a, b), (0, 1, 2));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn create_links_child_into_parent_in_generation_order() {
        let mut store = ThoughtStore::new();
        let root = store.create("root", 0, None).expect("root");
        let a = store.create("a", 1, Some(root)).expect("a");
        let b = store.create("b", 1, Some(root)).expect("b");
        let root = store.get(root).expect("get root");
        assert_eq!(root.children_ids, vec![a, b]);
        assert_eq!(store.get(a).expect("get a").parent_id, Some(0));
    }

    #[test]
    fn create_with_unknown_parent_fails_and_leaves_store_untouched() {
        let mut store = ThoughtStore::new();
        store.create("root", 0, None).expect("root");
        let err = store.create("orphan", 1, Some(42)).expect_err("unknown parent");
        assert!(matches!(err, SearchError::UnknownThought(42)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_unknown_id_errors() {
        let store = ThoughtStore::new();
        assert!(matches!(store.get(0), Err(SearchError::UnknownThought(0))));
    }

    #[test]
    fn path_to_returns_root_first_order() {
        let mut store = ThoughtStore::new();
        let root = store.create("root", 0, None).expect("root");
        let mid = store.create("mid", 1, Some(root)).expect("mid");
        store.create("sibling", 1, Some(root)).expect("sibling");
        let leaf = store.create("leaf", 2, Some(mid)).expect("leaf");

        let path = store.path_to(leaf).expect("path");
        let ids: Vec<_> = path.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![root, mid, leaf]);
        assert_eq!(path[0].depth, 0);
        assert!(path.windows(2).all(|p| p[1].depth == p[0].depth + 1));
    }

    #[test]
    fn fresh_store_restarts_ids_at_zero() {
        let mut store = ThoughtStore::new();
        store.create("root", 0, None).expect("root");
        store.create("a", 1, Some(0)).expect("a");

        let mut fresh = ThoughtStore::new();
        let root = fresh.create("root", 0, None).expect("root");
        assert_eq!(root, 0);
    }

    #[test]
    fn max_depth_reached_tracks_deepest_node() {
        let mut store = ThoughtStore::new();
        assert_eq!(store.max_depth_reached(), 0);
        let root = store.create("root", 0, None).expect("root");
        let mid = store.create("mid", 1, Some(root)).expect("mid");
        store.create("leaf", 2, Some(mid)).expect("leaf");
        assert_eq!(store.max_depth_reached(), 2);
    }
}

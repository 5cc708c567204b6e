//! Tree module for phylogenetic tree representation.
//!
//! This module provides the core data structures for representing
//! phylogenetic trees:
//! - `Tree`: The main tree structure using the arena pattern.
//! - `VertexIndex` is used to index vertices.

use crate::model::vertex::{BranchLength, Vertex};

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

/// *During construction only*, index for unset root.
const NO_ROOT_SET_INDEX: VertexIndex = usize::MAX;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A rooted phylogenetic tree represented using the arena pattern on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by [VertexIndex],
/// avoiding reference cycles entirely and giving cheap index-based traversal.
/// Unlike strictly-binary models, internal vertices may have any number of
/// children (at least two): species trees produced by genome simulators can
/// be multifurcating.
///
/// # Structure
/// - All vertices (root, internal, and leaves) are stored in the arena
/// - Index of root is maintained
/// - Leaves own their taxon label; internal vertices are unlabeled
/// - Branch lengths are optional, but if provided must be non-negative
/// - Leaves appear in the arena in input (left-to-right Newick) order,
///   which downstream writers rely on for deterministic output
///
/// # Construction
/// Add vertices bottom-up with [Tree::add_leaf] and
/// [Tree::add_internal_vertex], then close with [Tree::add_root].
/// Test validity with [Tree::is_valid].
#[derive(Debug, Clone)]
pub struct Tree {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex>,

    /// Index of the root of this tree
    root_index: VertexIndex,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Creates a new, empty tree with capacity for a binary tree with
    /// `num_leaves_guess` leaves.
    pub fn new(num_leaves_guess: usize) -> Self {
        let capacity = 2 * num_leaves_guess.max(1) - 1;
        Tree {
            root_index: NO_ROOT_SET_INDEX,
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Adds a root to the tree, assigning a unique index, which gets returned.
    pub fn add_root(&mut self, children: Vec<VertexIndex>) -> VertexIndex {
        let index = self.vertices.len();
        for &child in &children {
            self.vertices[child].set_parent(index);
        }
        self.vertices.push(Vertex::new_root(index, children));
        self.root_index = index;

        index
    }

    /// Adds an internal vertex to the tree, assigning a unique index, which
    /// gets returned.
    ///
    /// # Panics
    /// Panics if `branch_length` is negative (via [BranchLength]).
    pub fn add_internal_vertex(
        &mut self,
        children: Vec<VertexIndex>,
        branch_length: Option<BranchLength>,
    ) -> VertexIndex {
        let index = self.vertices.len();
        for &child in &children {
            self.vertices[child].set_parent(index);
        }
        self.vertices.push(Vertex::new_internal(index, children, branch_length));

        index
    }

    /// Adds a leaf to the tree, assigning a unique index, which gets returned.
    pub fn add_leaf(
        &mut self,
        branch_length: Option<BranchLength>,
        label: String,
    ) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new_leaf(index, branch_length, label));
        index
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index != NO_ROOT_SET_INDEX
    }

    /// Returns the index of the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set yet.
    pub fn root_index(&self) -> VertexIndex {
        assert!(self.is_root_set());
        self.root_index
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set and thus tree hasn't been fully
    /// constructed yet.
    pub fn root(&self) -> &Vertex {
        &self[self.root_index]
    }

    /// Returns a reference to the vertex at the given index.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex {
        &self[index]
    }

    /// Returns a mutable reference to the vertex at the given index.
    pub fn vertex_mut(&mut self, index: VertexIndex) -> &mut Vertex {
        &mut self.vertices[index]
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree (excluding root).
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_internal()).count()
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the indices of all leaves, in arena (input) order.
    pub fn leaf_indices(&self) -> Vec<VertexIndex> {
        self.vertices
            .iter()
            .filter(|v| v.is_leaf())
            .map(|v| v.index())
            .collect()
    }

    /// Returns the labels of all leaves, in arena (input) order.
    pub fn leaf_labels(&self) -> Vec<&str> {
        self.vertices.iter().filter_map(|v| v.label()).collect()
    }

    /// Returns `true` if every non-leaf vertex has exactly two children.
    pub fn is_binary(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| v.children().is_none_or(|c| c.len() == 2))
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root index is valid and points to a Root vertex; only one root
    /// - All vertex indices match their position in the arena
    /// - All child indices are valid and point back to the correct parent
    /// - All non-leaf vertices have at least two children
    /// - All non-root vertices have a valid parent that lists them as child
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root_index == NO_ROOT_SET_INDEX || self.root_index >= self.vertices.len() {
            return false;
        }
        if !self.vertices[self.root_index].is_root() {
            return false;
        }

        let mut found_root = false;

        for (index, vertex) in self.vertices.iter().enumerate() {
            if vertex.index() != index {
                return false;
            }

            if vertex.is_root() {
                if found_root {
                    return false;
                }
                found_root = true;
                if vertex.has_parent() {
                    return false;
                }
            } else {
                match vertex.parent_index() {
                    None => return false,
                    Some(parent_index) => {
                        if parent_index >= self.vertices.len() {
                            return false;
                        }
                        let listed = self.vertices[parent_index]
                            .children()
                            .is_some_and(|c| c.contains(&index));
                        if !listed {
                            return false;
                        }
                    }
                }
            }

            if let Some(children) = vertex.children() {
                if children.len() < 2 {
                    return false;
                }
                for &child in children {
                    if child >= self.vertices.len() {
                        return false;
                    }
                    if self.vertices[child].parent_index() != Some(index) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Returns an iterator over the tree in post-order (children before
    /// parents).
    pub fn post_order_iter(&self) -> PostOrderIter<'_> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before
    /// children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

// ============================================================================
// Transforms (pub)
// ============================================================================
impl Tree {
    /// Rewrites every leaf label, replacing `/` with `_`.
    ///
    /// Destination Newick parsers (T-REX, RANGER-DTL) choke on slashes in
    /// taxon names; annotation tags were already dropped at parse time.
    pub fn sanitize_leaf_labels(&mut self) {
        for vertex in &mut self.vertices {
            if let Some(label) = vertex.label() {
                if label.contains('/') {
                    let sanitized = label.replace('/', "_");
                    vertex.set_label(sanitized);
                }
            }
        }
    }

    /// Clears the branch length of every vertex.
    ///
    /// Jane4 rejects trees carrying branch lengths.
    pub fn strip_branch_lengths(&mut self) {
        for vertex in &mut self.vertices {
            vertex.clear_branch_length();
        }
    }

    /// Resolves every polytomy into nested binary vertices.
    ///
    /// A vertex with more than two children is rewritten left-deep: its first
    /// two children are bundled under a fresh internal vertex with a
    /// zero-length branch, repeatedly, until two children remain. Leaf order
    /// is preserved.
    pub fn binarize(&mut self) {
        // Fresh vertices are appended and already binary, but the loop
        // covering them is harmless.
        let mut index = 0;
        while index < self.vertices.len() {
            let is_polytomy = self.vertices[index]
                .children()
                .is_some_and(|c| c.len() > 2);

            if is_polytomy {
                let mut children = self.vertices[index].children().unwrap().to_vec();

                while children.len() > 2 {
                    let left = children.remove(0);
                    let right = children.remove(0);
                    let bundled = self.add_internal_vertex(
                        vec![left, right],
                        Some(BranchLength::new(0.0)),
                    );
                    children.insert(0, bundled);
                }

                for &child in &children {
                    self.vertices[child].set_parent(index);
                }
                self.vertices[index].set_children(children);
            }

            index += 1;
        }
    }
}

impl std::ops::Index<VertexIndex> for Tree {
    type Output = Vertex;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl std::ops::IndexMut<VertexIndex> for Tree {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for post-order traversal (children before parents).
///
/// Stack-based, no recursion. Each vertex is visited after all its
/// descendants have been visited.
pub struct PostOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a> PostOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push((tree.root_index, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_leaf() {
                return Some(vertex);
            } else {
                self.stack.push((index, true));

                // Push children in reverse, so the leftmost is processed first
                if let Some(children) = vertex.children() {
                    for &child in children.iter().rev() {
                        self.stack.push((child, false));
                    }
                }
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
pub struct PreOrderIter<'a> {
    tree: &'a Tree,
    stack: Vec<VertexIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut stack = Vec::new();
        if tree.is_root_set() {
            stack.push(tree.root_index);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        if let Some(children) = vertex.children() {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(vertex)
    }
}

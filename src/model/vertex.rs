//! Vertex module for phylogenetic tree representation.

use crate::model::tree::VertexIndex;
use std::ops::Deref;

/// During construction, Internal and Leaf vertices might not have parent set yet.
const NO_PARENT_SET: VertexIndex = usize::MAX;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a phylogenetic tree.
///
/// A vertex can be either:
/// - **Root**: Has children, no parent and no branch_length
/// - **Internal**: Has children, no label, might have branch_length
/// - **Leaf**: Has no children, owns its label and might have branch_length
///
/// Internal vertices and the root hold an arbitrary number of children, since
/// source species trees may be multifurcating.
///
/// # Invariants
/// - `index` is the index in the tree arena
/// - `branch_length` is non-negative (enforced); might not be set
/// - Internal and Leaf have `parent` as [VertexIndex] of parent in arena;
///   unset only during construction
/// - Root and Internal vertices have at least two children once the tree
///   is fully built
#[derive(PartialEq, Debug, Clone)]
pub enum Vertex {
    /// Root vertex of the tree (has no parent)
    Root {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Indices of the child vertices
        children: Vec<VertexIndex>,
    },
    /// Internal vertex (has parent and children, no label)
    Internal {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Indices of the child vertices
        children: Vec<VertexIndex>,
        /// Distance to parent node (optional, non-negative if present)
        branch_length: Option<BranchLength>,
    },
    /// Leaf vertex (has parent and label, no children)
    Leaf {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Taxon label of this leaf
        label: String,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Distance to parent node (optional, non-negative if present)
        branch_length: Option<BranchLength>,
    },
}

impl Vertex {
    /// Creates a new root vertex.
    pub fn new_root(index: VertexIndex, children: Vec<VertexIndex>) -> Self {
        Vertex::Root { index, children }
    }

    /// Creates a new internal (non-leaf, non-root) vertex.
    pub fn new_internal(
        index: VertexIndex,
        children: Vec<VertexIndex>,
        branch_length: Option<BranchLength>,
    ) -> Self {
        Vertex::Internal {
            index,
            parent: NO_PARENT_SET,
            children,
            branch_length,
        }
    }

    /// Creates a new leaf vertex.
    pub fn new_leaf(
        index: VertexIndex,
        branch_length: Option<BranchLength>,
        label: String,
    ) -> Self {
        Vertex::Leaf {
            index,
            label,
            parent: NO_PARENT_SET,
            branch_length,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        match self {
            Vertex::Root { index, .. } => *index,
            Vertex::Internal { index, .. } => *index,
            Vertex::Leaf { index, .. } => *index,
        }
    }

    /// Returns the branch length if this is a non-root vertex, else `None`.
    pub fn branch_length(&self) -> Option<BranchLength> {
        match self {
            Vertex::Root { .. } => None,
            Vertex::Internal { branch_length, .. } => *branch_length,
            Vertex::Leaf { branch_length, .. } => *branch_length,
        }
    }

    /// Clears the branch length of a non-root vertex; no-op on root.
    pub fn clear_branch_length(&mut self) {
        match self {
            Vertex::Root { .. } => {}
            Vertex::Internal { branch_length, .. } => *branch_length = None,
            Vertex::Leaf { branch_length, .. } => *branch_length = None,
        }
    }

    /// Returns the leaf label if this is a leaf, else `None`.
    pub fn label(&self) -> Option<&str> {
        match self {
            Vertex::Leaf { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Replaces the label of a leaf vertex.
    ///
    /// # Panics
    /// Panics if called on a non-leaf vertex.
    pub fn set_label(&mut self, new_label: String) {
        match self {
            Vertex::Leaf { label, .. } => *label = new_label,
            _ => panic!("Cannot set label on non-leaf vertex"),
        }
    }

    /// Returns `true` if this vertex is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Vertex::Leaf { .. })
    }

    /// Returns `true` if this vertex is an internal vertex.
    pub fn is_internal(&self) -> bool {
        matches!(self, Vertex::Internal { .. })
    }

    /// Returns `true` if this vertex is a root.
    pub fn is_root(&self) -> bool {
        matches!(self, Vertex::Root { .. })
    }

    /// Returns the children if this is a non-leaf vertex, else `None`.
    pub fn children(&self) -> Option<&[VertexIndex]> {
        match self {
            Vertex::Root { children, .. } => Some(children),
            Vertex::Internal { children, .. } => Some(children),
            Vertex::Leaf { .. } => None,
        }
    }

    /// Replaces the children of a non-leaf vertex.
    ///
    /// # Panics
    /// Panics if called on a leaf.
    pub fn set_children(&mut self, new_children: Vec<VertexIndex>) {
        match self {
            Vertex::Root { children, .. } => *children = new_children,
            Vertex::Internal { children, .. } => *children = new_children,
            Vertex::Leaf { .. } => panic!("Cannot set children on leaf vertex"),
        }
    }

    /// Sets new parent for non-root vertex.
    ///
    /// # Panics
    /// Panics if called on root.
    pub fn set_parent(&mut self, parent: VertexIndex) {
        match self {
            Vertex::Root { .. } => panic!("Cannot set parent on root vertex"),
            Vertex::Internal { parent: p, .. } => *p = parent,
            Vertex::Leaf { parent: p, .. } => *p = parent,
        }
    }

    /// Returns the index of parent if this is a non-root vertex, else `None`.
    ///
    /// Note that parent might not be set yet during construction.
    pub fn parent_index(&self) -> Option<VertexIndex> {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => {
                if *parent == NO_PARENT_SET {
                    None
                } else {
                    Some(*parent)
                }
            }
            Vertex::Root { .. } => None,
        }
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => {
                *parent != NO_PARENT_SET
            }
            Vertex::Root { .. } => false,
        }
    }
}

// =#========================================================================#=
// BRANCH LENGTH
// =#========================================================================#=
/// Branch length in a phylogenetic tree, enforced non-negative.
///
/// Represents the evolutionary distance between a vertex and its parent.
/// The value is guaranteed to be non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchLength(f64);

impl BranchLength {
    /// Creates a new branch length.
    ///
    /// # Panics
    /// Panics if `length` is negative or not finite.
    pub fn new(length: f64) -> Self {
        assert!(
            length >= 0.0,
            "Branch length must be non-negative, got {}",
            length
        );
        assert!(
            length.is_finite(),
            "Branch length must be finite, got {}",
            length
        );
        BranchLength(length)
    }
}

impl Deref for BranchLength {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}

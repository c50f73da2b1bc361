use std::collections::HashMap;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::{CategoryId, CategoryNode, LocalizedCategory};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::label::{LabelFormatter, LabelOptions};
use crate::domain::sort::{sort_for_tree, SortOptions};

/// Tree node in the arena-based category hierarchy.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Category payload
    pub data: T,
    /// Index of parent node in the arena, None for top-level nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in insertion order
    pub children: Vec<Index>,
    /// 1 for top-level nodes
    pub depth: usize,
}

/// Arena-based category tree.
///
/// The arena owns every node; parent and child links are plain indices, so a
/// node's parent link never owns anything. A tree may have several top-level
/// nodes.
#[derive(Debug)]
pub struct CategoryTree<T> {
    arena: Arena<TreeNode<T>>,
    roots: Vec<Index>,
    by_id: HashMap<CategoryId, Index>,
}

impl<T> Default for CategoryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CategoryTree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Borrowed view of the node at `idx`.
    pub fn node(&self, idx: Index) -> Option<NodeRef<'_, T>> {
        self.arena.get(idx).map(|node| NodeRef {
            tree: self,
            index: idx,
            node,
        })
    }

    pub fn roots(&self) -> &[Index] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order iteration over all nodes, top-level nodes in insertion order.
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    /// Length of the longest root-to-leaf path; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.arena.iter().map(|(_, n)| n.depth).max().unwrap_or(0)
    }
}

impl<T: CategoryNode> CategoryTree<T> {
    /// Insert a node below `parent` (or at top level).
    ///
    /// Returns `InvalidArgument` if the id is already present or the parent
    /// handle is not part of this tree.
    #[instrument(level = "trace", skip(self, data), fields(id = data.id()))]
    pub fn insert_node(&mut self, data: T, parent: Option<Index>) -> DomainResult<Index> {
        let id = data.id();
        if self.by_id.contains_key(&id) {
            return Err(DomainError::invalid_argument(format!(
                "category {} already in tree",
                id
            )));
        }
        let depth = match parent {
            Some(parent_idx) => {
                let parent_node = self.arena.get(parent_idx).ok_or_else(|| {
                    DomainError::invalid_argument(format!("unknown parent node for category {}", id))
                })?;
                parent_node.depth + 1
            }
            None => 1,
        };

        let node_idx = self.arena.insert(TreeNode {
            data,
            parent,
            children: Vec::new(),
            depth,
        });

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(node_idx),
            None => self.roots.push(node_idx),
        }
        self.by_id.insert(id, node_idx);

        Ok(node_idx)
    }

    pub fn find(&self, id: CategoryId) -> Option<NodeRef<'_, T>> {
        self.by_id.get(&id).and_then(|&idx| self.node(idx))
    }
}

impl<T: CategoryNode + Clone> CategoryTree<T> {
    /// Build a tree from flat records.
    ///
    /// Records are placed in [`sort_for_tree`] order, so every reachable
    /// record finds its parent already inserted. Records whose parent is not
    /// in the tree (children of the traversal root, kept orphans) become
    /// top-level nodes.
    #[instrument(level = "debug", skip(records), fields(records = records.len()))]
    pub fn from_records(records: &[T], options: SortOptions) -> DomainResult<Self> {
        let mut tree = Self::new();
        for record in sort_for_tree(records, options)? {
            let parent = tree.by_id.get(&record.parent_id()).copied();
            tree.insert_node(record.clone(), parent)?;
        }
        debug!("built tree: {} nodes, {} top-level", tree.len(), tree.roots.len());
        Ok(tree)
    }
}

impl<T: LocalizedCategory> CategoryTree<T> {
    /// Indented label of the node at `idx`.
    ///
    /// Fails with `InvalidArgument` if the handle does not point into this tree.
    pub fn label(&self, idx: Index, options: &LabelOptions) -> DomainResult<String> {
        let node = self
            .node(idx)
            .ok_or_else(|| DomainError::invalid_argument("node is not part of this tree"))?;
        Ok(LabelFormatter::format(node, options))
    }

    /// Labels of all nodes in pre-order.
    pub fn indented_labels(&self, options: &LabelOptions) -> Vec<String> {
        self.iter()
            .map(|node| LabelFormatter::format(node, options))
            .collect()
    }
}

/// Borrowed view of one node together with its tree.
pub struct NodeRef<'a, T> {
    tree: &'a CategoryTree<T>,
    index: Index,
    node: &'a TreeNode<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("depth", &self.node.depth)
            .field("value", &self.node.data)
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub fn index(&self) -> Index {
        self.index
    }

    pub fn value(&self) -> &'a T {
        &self.node.data
    }

    pub fn depth(&self) -> usize {
        self.node.depth
    }

    pub fn tree(&self) -> &'a CategoryTree<T> {
        self.tree
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node.parent.and_then(|idx| self.tree.node(idx))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        let node = self.node;
        node.children.iter().filter_map(move |&idx| tree.node(idx))
    }

    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    /// Nodes from the top-level ancestor down to and including this node.
    pub fn path_from_root(&self) -> Vec<NodeRef<'a, T>> {
        let mut path = vec![*self];
        let mut current = self.parent();
        while let Some(node) = current {
            path.push(node);
            current = node.parent();
        }
        path.reverse();
        path
    }
}

pub struct TreeIterator<'a, T> {
    tree: &'a CategoryTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(tree: &'a CategoryTree<T>) -> Self {
        let stack = tree.roots.iter().rev().copied().collect();
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.node.children.iter().rev().copied());
                return Some(node);
            }
        }
        None
    }
}

//! Arena-backed document tree produced by the tree builder.

use super::level::Level;

/// Ancestor identifier recorded when no heading of that level was open.
pub const ABSENT_ID: u32 = 0;

/// Index of a node in a [`DocumentTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in creation order, starting at 0.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Surrogate key of the node, unique within one parse and starting at 1.
    ///
    /// Declared identifiers repeat across sibling scopes; this does not.
    #[must_use]
    pub fn key(self) -> usize {
        self.0 + 1
    }
}

/// Snapshot of one open ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorRef {
    /// Identifier the ancestor declared in the text.
    pub declared_id: u32,
    /// Surrogate key of the ancestor node.
    pub key: usize,
}

/// Ancestor context captured when a node was created.
///
/// Holds one slot per shallower level, shallowest first; a slot is `None`
/// when no heading of that level was open at the time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorChain {
    slots: Vec<(Level, Option<AncestorRef>)>,
}

impl AncestorChain {
    /// Build a chain from slots ordered shallowest first.
    #[must_use]
    pub fn new(slots: Vec<(Level, Option<AncestorRef>)>) -> Self {
        Self { slots }
    }

    /// The recorded ancestor at `level`, if one was open.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<&AncestorRef> {
        self.slots
            .iter()
            .find(|(slot_level, _)| *slot_level == level)
            .and_then(|(_, ancestor)| ancestor.as_ref())
    }

    /// Declared identifier of the ancestor at `level`, or [`ABSENT_ID`].
    #[must_use]
    pub fn declared_id(&self, level: Level) -> u32 {
        self.get(level).map_or(ABSENT_ID, |a| a.declared_id)
    }

    /// All slots, shallowest first.
    pub fn iter(&self) -> impl Iterator<Item = (Level, Option<&AncestorRef>)> {
        self.slots.iter().map(|(level, ancestor)| (*level, ancestor.as_ref()))
    }

    /// Levels for which no ancestor was open.
    pub fn missing_levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.slots
            .iter()
            .filter(|(_, ancestor)| ancestor.is_none())
            .map(|(level, _)| *level)
    }

    /// Whether any slot is absent.
    #[must_use]
    pub fn has_missing(&self) -> bool {
        self.missing_levels().next().is_some()
    }
}

/// One recognized heading occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    /// This node's position in the tree.
    pub id: NodeId,
    /// Structural level.
    pub level: Level,
    /// Identifier parsed from the heading; unique only within a parent scope.
    pub declared_id: u32,
    /// Russian name.
    pub name_ru: String,
    /// Kazakh name, empty when the title carried none.
    pub name_kz: String,
    /// Ancestors open at creation time.
    pub ancestors: AncestorChain,
    /// Owning node, `None` when attached to the root.
    pub parent: Option<NodeId>,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
    /// 1-based source line of the heading.
    pub line: usize,
}

/// Input for [`DocumentTree::insert`].
#[derive(Debug, Clone)]
pub(crate) struct NewNode {
    pub level: Level,
    pub declared_id: u32,
    pub name_ru: String,
    pub name_kz: String,
    pub ancestors: AncestorChain,
    pub line: usize,
}

/// Rooted tree of headings.
///
/// The root is a sentinel without a level; its children are every node that
/// was created while no ancestor was open. Once built the tree is only
/// handed out by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTree {
    nodes: Vec<DocumentNode>,
    root_children: Vec<NodeId>,
}

impl DocumentTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node under `parent`, or under the root when `parent` is `None`.
    pub(crate) fn insert(&mut self, new: NewNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DocumentNode {
            id,
            level: new.level,
            declared_id: new.declared_id,
            name_ru: new.name_ru,
            name_kz: new.name_kz,
            ancestors: new.ancestors,
            parent,
            children: Vec::new(),
            line: new.line,
        });

        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.root_children.push(id),
        }

        id
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&DocumentNode> {
        self.nodes.get(id.0)
    }

    /// Children of the root sentinel, in insertion order.
    #[must_use]
    pub fn root_children(&self) -> &[NodeId] {
        &self.root_children
    }

    /// Number of nodes, excluding the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no heading was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation (document) order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentNode> {
        self.nodes.iter()
    }

    /// Number of nodes at `level`.
    #[must_use]
    pub fn count(&self, level: Level) -> usize {
        self.nodes.iter().filter(|n| n.level == level).count()
    }

    /// Pre-order walk yielding `(depth, node)`, depth 0 being the root's children.
    ///
    /// Uses an explicit stack, so deeply nested documents do not grow the
    /// call stack.
    #[must_use]
    pub fn preorder(&self) -> PreOrder<'_> {
        PreOrder {
            tree: self,
            stack: self.root_children.iter().rev().map(|id| (0, *id)).collect(),
        }
    }
}

/// Iterator returned by [`DocumentTree::preorder`].
pub struct PreOrder<'a> {
    tree: &'a DocumentTree,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a DocumentNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (depth, id) = self.stack.pop()?;
            let Some(node) = self.tree.get(id) else {
                continue;
            };
            self.stack
                .extend(node.children.iter().rev().map(|child| (depth + 1, *child)));
            return Some((depth, node));
        }
    }
}

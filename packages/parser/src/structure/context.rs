//! Open-heading context for a single parse pass.

use super::level::Level;
use super::tree::NodeId;

/// Currently open node at each level.
///
/// Lives for one parse pass only. Opening a level unconditionally closes
/// every deeper level, so at any point the open entries form a chain of
/// nested headings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTable {
    open: [Option<NodeId>; Level::COUNT],
}

impl ContextTable {
    /// Create a table with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `node` as open at `level` and close all deeper levels.
    ///
    /// A previously open node at `level` is simply replaced; it keeps its
    /// children in the tree.
    pub fn open(&mut self, level: Level, node: NodeId) {
        self.open[level.depth()] = Some(node);
        for descendant in level.descendants() {
            self.open[descendant.depth()] = None;
        }
    }

    /// Node currently open at `level`, if any.
    #[must_use]
    pub fn lookup(&self, level: Level) -> Option<NodeId> {
        self.open[level.depth()]
    }

    /// First open node among `levels`, which are given shallowest first.
    #[must_use]
    pub fn shallowest_open(&self, levels: &[Level]) -> Option<NodeId> {
        levels.iter().find_map(|level| self.lookup(*level))
    }

    /// Whether no level is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.iter().all(Option::is_none)
    }
}

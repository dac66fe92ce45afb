//! Mutually exclusive pane activation.

use crate::domain::Tool;

/// Tracks which tool pane is shown. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSelector {
    active: Tool,
}

impl Default for PaneSelector {
    fn default() -> Self {
        Self { active: Tool::Rsync }
    }
}

impl PaneSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tool {
        self.active
    }

    pub fn is_active(&self, tool: Tool) -> bool {
        self.active == tool
    }

    /// Activate `tool`, deactivating every other pane. Returns whether anything changed.
    pub fn select(&mut self, tool: Tool) -> bool {
        let changed = self.active != tool;
        self.active = tool;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_rsync() {
        let panes = PaneSelector::new();
        assert!(panes.is_active(Tool::Rsync));
        assert!(!panes.is_active(Tool::Rclone));
    }

    #[test]
    fn selecting_rclone_deactivates_rsync() {
        let mut panes = PaneSelector::new();
        assert!(panes.select(Tool::Rclone));
        assert!(panes.is_active(Tool::Rclone));
        assert!(!panes.is_active(Tool::Rsync));
        assert_eq!(Tool::ALL.iter().filter(|t| panes.is_active(**t)).count(), 1);
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let mut panes = PaneSelector::new();
        assert!(!panes.select(Tool::Rsync));
        assert_eq!(panes.active(), Tool::Rsync);
    }
}

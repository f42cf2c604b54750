// Per-surface histories
// Each editing surface owns an independent branch; the caller decides which one is active.

use crate::command::branch::HistoryBranch;
use crate::command::operation::Operation;
use crate::command::trait_def::{CommandResult, Reversible};
use crate::config::EditorConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editing surfaces with their own undo history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceKind {
    #[default]
    Chart,
    Stage,
    Cosmetic,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 3] = [SurfaceKind::Chart, SurfaceKind::Stage, SurfaceKind::Cosmetic];
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceKind::Chart => write!(f, "Chart"),
            SurfaceKind::Stage => write!(f, "Stage"),
            SurfaceKind::Cosmetic => write!(f, "Cosmetic"),
        }
    }
}

/// One history branch per editing surface
///
/// Branches never share operations: undoing on the stage surface has no
/// effect on chart history.
pub struct EditorHistories {
    chart: HistoryBranch,
    stage: HistoryBranch,
    cosmetic: HistoryBranch,
    active: SurfaceKind,
}

impl EditorHistories {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            chart: HistoryBranch::with_config(&config.history),
            stage: HistoryBranch::with_config(&config.history),
            cosmetic: HistoryBranch::with_config(&config.history),
            active: SurfaceKind::default(),
        }
    }

    pub fn branch(&self, surface: SurfaceKind) -> &HistoryBranch {
        match surface {
            SurfaceKind::Chart => &self.chart,
            SurfaceKind::Stage => &self.stage,
            SurfaceKind::Cosmetic => &self.cosmetic,
        }
    }

    pub fn branch_mut(&mut self, surface: SurfaceKind) -> &mut HistoryBranch {
        match surface {
            SurfaceKind::Chart => &mut self.chart,
            SurfaceKind::Stage => &mut self.stage,
            SurfaceKind::Cosmetic => &mut self.cosmetic,
        }
    }

    pub fn active(&self) -> SurfaceKind {
        self.active
    }

    pub fn set_active(&mut self, surface: SurfaceKind) {
        if self.active != surface {
            log::debug!("Active surface: {} -> {}", self.active, surface);
            self.active = surface;
        }
    }

    pub fn active_branch(&self) -> &HistoryBranch {
        self.branch(self.active)
    }

    pub fn active_branch_mut(&mut self) -> &mut HistoryBranch {
        self.branch_mut(self.active)
    }

    /// Push onto the active surface's branch
    pub fn push(&mut self, operation: Operation) -> CommandResult<()> {
        self.active_branch_mut().push(operation)
    }

    /// Undo on the active surface, returning the undone description
    pub fn undo(&mut self) -> CommandResult<Option<String>> {
        Ok(self.active_branch_mut().undo()?.map(|op| op.description()))
    }

    /// Redo on the active surface, returning the redone description
    pub fn redo(&mut self) -> CommandResult<Option<String>> {
        Ok(self.active_branch_mut().redo()?.map(|op| op.description()))
    }

    /// Clear every surface's history, e.g. after loading a new document
    pub fn clear_all(&mut self) {
        for surface in SurfaceKind::ALL {
            self.branch_mut(surface).clear();
        }
    }
}

impl Default for EditorHistories {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

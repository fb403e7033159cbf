use std::collections::BTreeSet;

use crate::model::catalog::Catalog;
use crate::model::ids::ProblemId;

/// Which way a toggle flipped an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    MarkedComplete,
    MarkedIncomplete,
}

impl ToggleDirection {
    #[must_use]
    pub fn is_completing(self) -> bool {
        matches!(self, ToggleDirection::MarkedComplete)
    }
}

/// The set of completed problem ids plus a revision change marker.
///
/// Set semantics make duplicates impossible by construction. The revision
/// increases on every successful toggle so a reactive front end can detect
/// updates without diffing the set itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    completed: BTreeSet<ProblemId>,
    revision: u64,
}

impl CompletionState {
    /// The empty state, revision zero.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rebuild state from previously persisted ids. Duplicates collapse.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ProblemId>) -> Self {
        Self {
            completed: ids.into_iter().collect(),
            revision: 0,
        }
    }

    #[must_use]
    pub fn contains(&self, id: ProblemId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flip membership of `id`: exactly one element is inserted or removed.
    ///
    /// Any id is accepted, catalog member or not; the operation is symmetric
    /// in both directions. Bumps the revision.
    pub fn toggle(&mut self, id: ProblemId) -> ToggleDirection {
        self.revision += 1;
        if self.completed.remove(&id) {
            ToggleDirection::MarkedIncomplete
        } else {
            self.completed.insert(id);
            ToggleDirection::MarkedComplete
        }
    }

    /// Completed ids in ascending order, the shape that gets persisted.
    #[must_use]
    pub fn ids(&self) -> Vec<ProblemId> {
        self.completed.iter().copied().collect()
    }
}

/// Aggregated progress over one catalog, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub total: usize,
    pub solved: usize,
    pub remaining: usize,
    pub percent: u8,
}

impl ProgressStats {
    /// Derive stats for `state` against `catalog`.
    ///
    /// Ids no longer present in the catalog are excluded from `solved`, so a
    /// shrunken catalog can never report more solved than total.
    #[must_use]
    pub fn compute(catalog: &Catalog, state: &CompletionState) -> Self {
        let total = catalog.len();
        let solved = state
            .completed
            .iter()
            .filter(|&&id| catalog.contains(id))
            .count();
        let percent = if total == 0 {
            0
        } else {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                (solved as f64 * 100.0 / total as f64).round() as u8
            }
        };
        Self {
            total,
            solved,
            remaining: total - solved,
            percent,
        }
    }
}

use std::collections::HashMap;

use thiserror::Error;

use crate::model::ids::ProblemId;
use crate::model::problem::Problem;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate problem id {0} in catalog")]
    DuplicateId(ProblemId),
}

/// The fixed, ordered sequence of practice problems.
///
/// Supplied once at startup and read-only afterwards. Ids must be unique;
/// everything else (names, links) is accepted as authored.
#[derive(Debug, Clone)]
pub struct Catalog {
    problems: Vec<Problem>,
    index: HashMap<ProblemId, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered problem list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two entries share an id.
    pub fn new(problems: Vec<Problem>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(problems.len());
        for (position, problem) in problems.iter().enumerate() {
            if index.insert(problem.id(), position).is_some() {
                return Err(CatalogError::DuplicateId(problem.id()));
            }
        }
        Ok(Self { problems, index })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ProblemId) -> bool {
        self.index.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: ProblemId) -> Option<&Problem> {
        self.index.get(&id).map(|&position| &self.problems[position])
    }

    /// Problems in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.problems.iter()
    }
}

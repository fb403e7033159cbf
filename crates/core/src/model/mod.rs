mod catalog;
mod ids;
mod problem;
mod progress;

pub use catalog::{Catalog, CatalogError};
pub use ids::{ParseIdError, ProblemId};
pub use problem::Problem;
pub use progress::{CompletionState, ProgressStats, ToggleDirection};

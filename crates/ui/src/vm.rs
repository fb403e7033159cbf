use tracker_core::model::Problem;

/// Presentation-ready shape for one problem card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemCardVm {
    pub id: u64,
    pub badge: String,
    pub name: String,
    pub done: bool,
    pub url: String,
    pub video_link: Option<String>,
    pub code_link: Option<String>,
}

#[must_use]
pub fn map_problem_card(problem: &Problem, done: bool) -> ProblemCardVm {
    ProblemCardVm {
        id: problem.id().value(),
        badge: format!("ID: #{}", problem.id()),
        name: problem.name().to_owned(),
        done,
        url: problem.url().to_owned(),
        video_link: problem.video_link().map(str::to_owned),
        code_link: problem.code_link().map(str::to_owned),
    }
}

use serde::Deserialize;

use crate::model::ids::ProblemId;

/// One practice problem from the catalog.
///
/// The links are opaque to the tracker; nothing here is validated beyond
/// what `serde` requires to parse the catalog file. `id` is the only field
/// the core ever inspects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Problem {
    id: ProblemId,
    name: String,
    url: String,
    #[serde(default)]
    video_link: Option<String>,
    #[serde(default)]
    code_link: Option<String>,
}

impl Problem {
    #[must_use]
    pub fn new(
        id: ProblemId,
        name: impl Into<String>,
        url: impl Into<String>,
        video_link: Option<String>,
        code_link: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            url: url.into(),
            video_link,
            code_link,
        }
    }

    #[must_use]
    pub fn id(&self) -> ProblemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn video_link(&self) -> Option<&str> {
        self.video_link.as_deref()
    }

    #[must_use]
    pub fn code_link(&self) -> Option<&str> {
        self.code_link.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_entry_with_optional_links_missing() {
        let json = r#"{"id": 1, "name": "Two Sum", "url": "https://leetcode.com/problems/two-sum/"}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.id(), ProblemId::new(1));
        assert_eq!(problem.name(), "Two Sum");
        assert!(problem.video_link().is_none());
        assert!(problem.code_link().is_none());
    }

    #[test]
    fn parses_catalog_entry_with_all_links() {
        let json = r#"{
            "id": 2,
            "name": "Valid Anagram",
            "url": "https://leetcode.com/problems/valid-anagram/",
            "video_link": "https://youtube.com/watch?v=abc",
            "code_link": "https://github.com/example/solutions/blob/main/valid-anagram.rs"
        }"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.video_link(), Some("https://youtube.com/watch?v=abc"));
        assert!(problem.code_link().is_some());
    }
}

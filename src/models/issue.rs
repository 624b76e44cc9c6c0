use core::fmt;
use serde::Deserialize;

/// A closed issue as returned by the tracker's issues endpoint.
///
/// Only the fields needed for a changelog entry are kept; everything else in
/// the payload is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub html_url: String,
    pub number: u64,
    pub title: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* [#{}]({}) - {}", self.number, self.html_url, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_markdown_bullet() {
        let issue = Issue {
            html_url: "https://x/42".to_string(),
            number: 42,
            title: "Fix bug".to_string(),
        };

        assert_eq!(issue.to_string(), "* [#42](https://x/42) - Fix bug");
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "number": 7,
            "html_url": "https://github.com/o/r/issues/7",
            "title": "Add task",
            "state": "closed",
            "labels": []
        }"#;

        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.title, "Add task");
    }

    #[test]
    fn missing_title_is_rejected() {
        let json = r#"{"number": 7, "html_url": "https://x/7"}"#;
        assert!(serde_json::from_str::<Issue>(json).is_err());
    }
}

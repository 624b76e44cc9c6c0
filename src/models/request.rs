/// Which milestone of which project to build a changelog for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogRequest {
    project: String,
    milestone: String,
}

impl ChangelogRequest {
    pub fn new(project: impl Into<String>, milestone: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            milestone: milestone.into(),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn milestone(&self) -> &str {
        &self.milestone
    }

    /// `owner/repo` path segment for the request.
    ///
    /// A project that already names its owner is used as is, a bare
    /// repository name is placed under `default_owner`.
    pub fn repo_slug(&self, default_owner: &str) -> String {
        if self.project.contains('/') {
            self.project.clone()
        } else {
            format!("{}/{}", default_owner, self.project)
        }
    }
}

//! Fetching closed issues for a milestone and rendering them as markdown.
//!
//! Only a single page of results is requested. The page size is raised to the
//! API maximum, and a response that advertises a further page is logged as a
//! truncated changelog rather than followed.

use crate::error::ChangelogError;
use crate::models::{config::Config, issue::Issue, request::ChangelogRequest};
use reqwest::header::{ACCEPT, LINK};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the tracker's closed-issues endpoint.
#[derive(Debug, Clone)]
pub struct ChangelogFetcher {
    client: Client,
    api_url: String,
    owner: String,
    per_page: u32,
}

impl ChangelogFetcher {
    /// Builds a fetcher with its own HTTP client, honouring the configured timeout.
    pub fn new(config: &Config) -> Result<Self, ChangelogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            per_page: config.per_page,
        }
    }

    /// Endpoint listing the issues of the requested project, without query.
    pub fn issues_url(&self, request: &ChangelogRequest) -> String {
        format!(
            "{}/repos/{}/issues",
            self.api_url,
            request.repo_slug(&self.owner)
        )
    }

    /// Closed issues of the milestone, in the order the tracker returns them.
    pub async fn fetch_issues(
        &self,
        request: &ChangelogRequest,
    ) -> Result<Vec<Issue>, ChangelogError> {
        let url = self.issues_url(request);
        debug!(%url, milestone = request.milestone(), "requesting closed issues");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .query(&[("state", "closed"), ("milestone", request.milestone())])
            .query(&[("per_page", self.per_page)])
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "issue tracker responded");
        if status != StatusCode::OK {
            return Err(ChangelogError::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        let truncated = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .is_some_and(has_next_page);

        let body = response.text().await?;
        let issues: Vec<Issue> =
            serde_json::from_str(&body).map_err(|err| ChangelogError::MalformedResponse {
                detail: err.to_string(),
            })?;

        if truncated {
            warn!(
                fetched = issues.len(),
                "milestone has more closed issues than fit in one page; changelog is truncated"
            );
        }
        debug!(count = issues.len(), "parsed closed issues");

        Ok(issues)
    }

    /// Rendered changelog lines for the milestone, oldest issue first.
    pub async fn fetch_changelog(
        &self,
        request: &ChangelogRequest,
    ) -> Result<Vec<String>, ChangelogError> {
        let issues = self.fetch_issues(request).await?;
        Ok(render_changelog(&issues))
    }
}

/// One markdown bullet per issue, in the reverse of the given order.
pub fn render_changelog(issues: &[Issue]) -> Vec<String> {
    issues.iter().rev().map(Issue::to_string).collect()
}

/// Whether an RFC 8288 `Link` header points at a next page.
///
/// Relation values may be quoted or bare, and may list several relation
/// types separated by whitespace.
pub fn has_next_page(link: &str) -> bool {
    link.split('<')
        .skip(1)
        .filter_map(|entry| entry.split_once('>'))
        .any(|(_, params)| {
            params.split(';').any(|param| {
                let Some((name, value)) = param.split_once('=') else {
                    return false;
                };
                name.trim().eq_ignore_ascii_case("rel")
                    && value
                        .trim()
                        .trim_end_matches(',')
                        .trim()
                        .trim_matches('"')
                        .split_ascii_whitespace()
                        .any(|rel| rel.eq_ignore_ascii_case("next"))
            })
        })
}

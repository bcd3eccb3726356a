use herald_core::{GithubEnv, HeraldError};

/// GitHub REST client for publishing pipeline results.
///
/// Posts review comments and audit issues with bearer-token auth. Publishing
/// is best-effort: a non-success API status is logged to stderr, not fatal,
/// so a flaky publish never fails the surrounding CI job.
///
/// # Examples
///
/// ```
/// use herald_core::GithubEnv;
/// use herald_pipeline::github::GitHubClient;
///
/// let env = GithubEnv {
///     repo: "octocat/hello-world".into(),
///     token: "ghp_test".into(),
///     api_base: None,
/// };
/// let client = GitHubClient::new(&env);
/// ```
pub struct GitHubClient {
    http: reqwest::Client,
    env: GithubEnv,
}

impl GitHubClient {
    /// Create a client from environment configuration.
    pub fn new(env: &GithubEnv) -> Self {
        Self {
            http: reqwest::Client::new(),
            env: env.clone(),
        }
    }

    fn api_base(&self) -> &str {
        self.env
            .api_base
            .as_deref()
            .unwrap_or("https://api.github.com")
    }

    /// Post a comment on the configured repository's issue or PR `number`.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Publish`] on transport-level failure. API-level
    /// rejections (4xx/5xx) are logged and swallowed.
    pub async fn post_issue_comment(&self, number: u64, body: &str) -> Result<(), HeraldError> {
        let url = format!(
            "{}/repos/{}/issues/{number}/comments",
            self.api_base(),
            self.env.repo
        );
        self.post(&url, &serde_json::json!({ "body": body })).await
    }

    /// Open a new issue on the configured repository.
    ///
    /// # Errors
    ///
    /// Returns [`HeraldError::Publish`] on transport-level failure. API-level
    /// rejections (4xx/5xx) are logged and swallowed.
    pub async fn create_issue(&self, title: &str, body: &str) -> Result<(), HeraldError> {
        let url = format!("{}/repos/{}/issues", self.api_base(), self.env.repo);
        self.post(&url, &serde_json::json!({ "title": title, "body": body }))
            .await
    }

    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<(), HeraldError> {
        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.env.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "herald")
            .json(body)
            .send()
            .await
            .map_err(|e| HeraldError::Publish(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            eprintln!("warning: GitHub API returned {status}: {body_text}");
        }
        Ok(())
    }
}

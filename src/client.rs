use crate::config::Actor;
use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, Response};
use std::time::Duration;

/// Request conventions shared by every call.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "issue-edit-suite";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One authenticated channel against the issue endpoints, parameterized by
/// actor credentials at construction. The anonymous actor sends no
/// `Authorization` header at all.
///
/// Every operation returns the raw [`Response`]: no retries, no status
/// interpretation, no recovery. The caller owns the verdict.
#[derive(Debug, Clone)]
pub struct IssueClient {
    http: reqwest::Client,
    base_url: String,
    actor: Actor,
}

impl IssueClient {
    pub fn new(base_url: impl Into<String>, actor: Actor) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            actor,
        })
    }

    /// `POST /repos/{owner}/{repo}/issues`
    pub async fn create_issue(&self, owner: &str, repo: &str, payload: &str) -> Result<Response> {
        let url = format!("{}/repos/{owner}/{repo}/issues", self.base_url);
        let response = self
            .request(Method::POST, url)
            .body(payload.to_string())
            .send()
            .await?;
        Ok(response)
    }

    /// `POST /repos/{owner}/{repo}/issues/{id}` — POST is this API's
    /// update verb. `payload` is the pre-serialized request body, so
    /// deliberately malformed bodies pass through untouched.
    pub async fn edit_issue(
        &self,
        owner: &str,
        repo: &str,
        issue_id: u64,
        payload: &str,
    ) -> Result<Response> {
        let url = format!("{}/repos/{owner}/{repo}/issues/{issue_id}", self.base_url);
        let response = self
            .request(Method::POST, url)
            .body(payload.to_string())
            .send()
            .await?;
        Ok(response)
    }

    /// `PUT /repos/{owner}/{repo}/issues/{id}/lock` with an explicit
    /// zero-length body marker.
    pub async fn lock_issue(&self, owner: &str, repo: &str, issue_id: u64) -> Result<Response> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{issue_id}/lock",
            self.base_url
        );
        let response = self
            .request(Method::PUT, url)
            .header("Content-Length", "0")
            .send()
            .await?;
        Ok(response)
    }

    /// `DELETE /repos/{owner}/{repo}/issues/{id}/lock`
    pub async fn unlock_issue(&self, owner: &str, repo: &str, issue_id: u64) -> Result<Response> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{issue_id}/lock",
            self.base_url
        );
        let response = self.request(Method::DELETE, url).send().await?;
        Ok(response)
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT);
        if self.actor.is_anonymous() {
            builder
        } else {
            builder.basic_auth(&self.actor.username, Some(&self.actor.password))
        }
    }
}

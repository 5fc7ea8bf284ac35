use crate::client::IssueClient;
use crate::config::SuiteConfig;
use crate::payload::{IssuePayload, IssueState};
use anyhow::Result;
use reqwest::{Response, StatusCode};
use thiserror::Error;

/// A scenario precondition the orchestrator could not establish against the
/// remote service. Distinct from remote-service verdicts: hitting this means
/// the scenario must abort instead of asserting on an invalid assumption.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("could not lock issue #{issue}: HTTP {status}\n{body}")]
    Lock {
        issue: u64,
        status: u16,
        body: String,
    },
}

/// Per-scenario fixture: one authenticated channel per actor tier plus the
/// canonical payloads, built fresh for each scenario.
///
/// The lifecycle is setup (construction) → act (one client call) → assert
/// (status code, done by the caller) → [`teardown`](Self::teardown). The
/// acceptance suite guarantees teardown runs regardless of the assertion
/// outcome.
#[derive(Debug, Clone)]
pub struct EditScenario {
    config: SuiteConfig,
    push_client: IssueClient,
    no_push_client: IssueClient,
    anonymous_client: IssueClient,
}

impl EditScenario {
    pub fn new(config: SuiteConfig) -> Result<Self> {
        let push_client = IssueClient::new(&config.api_base_url, config.push_user.clone())?;
        let no_push_client = IssueClient::new(&config.api_base_url, config.no_push_user.clone())?;
        let anonymous_client =
            IssueClient::new(&config.api_base_url, crate::config::Actor::anonymous())?;
        Ok(Self {
            config,
            push_client,
            no_push_client,
            anonymous_client,
        })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn push_client(&self) -> &IssueClient {
        &self.push_client
    }

    pub fn no_push_client(&self) -> &IssueClient {
        &self.no_push_client
    }

    pub fn anonymous_client(&self) -> &IssueClient {
        &self.anonymous_client
    }

    /// The payload the fixture issue is reset to between scenarios.
    pub fn default_payload(&self) -> IssuePayload {
        IssuePayload {
            title: "Second Issue".to_string(),
            body: "Hello! It's second default issue".to_string(),
            state: IssueState::Open,
            milestone: 1,
            labels: vec!["question".to_string(), "bug".to_string()],
            assignees: vec![
                self.config.owner.username.clone(),
                self.config.push_user.username.clone(),
            ],
        }
    }

    /// The well-formed edit every positive scenario applies.
    pub fn edited_payload(&self) -> IssuePayload {
        IssuePayload {
            title: "Second but edited issue yet".to_string(),
            body: "Thank you for editing issue!".to_string(),
            state: IssueState::Open,
            milestone: 2,
            labels: vec!["question".to_string()],
            assignees: vec![self.config.push_user.username.clone()],
        }
    }

    /// Edits an issue in the target repository as the given actor.
    pub async fn edit_issue(
        &self,
        client: &IssueClient,
        issue_id: u64,
        payload: &str,
    ) -> Result<Response> {
        client
            .edit_issue(&self.config.repo.owner, &self.config.repo.name, issue_id, payload)
            .await
    }

    /// Edits the fixture issue as the given actor.
    pub async fn edit_fixture_issue(&self, client: &IssueClient, payload: &str) -> Result<Response> {
        self.edit_issue(client, self.config.fixture_issue, payload).await
    }

    /// Creates an issue in the target repository as the push-capable actor.
    pub async fn create_issue(&self, payload: &str) -> Result<Response> {
        self.push_client
            .create_issue(&self.config.repo.owner, &self.config.repo.name, payload)
            .await
    }

    /// Locks the fixture issue as the push-capable actor. Anything but
    /// 204 becomes a [`PreconditionError::Lock`], aborting the scenario.
    pub async fn lock_fixture_issue(&self) -> Result<()> {
        let response = self
            .push_client
            .lock_issue(
                &self.config.repo.owner,
                &self.config.repo.name,
                self.config.fixture_issue,
            )
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(PreconditionError::Lock {
            issue: self.config.fixture_issue,
            status,
            body,
        }
        .into())
    }

    /// Removes the lock from the fixture issue as the push-capable actor.
    pub async fn unlock_fixture_issue(&self) -> Result<Response> {
        self.push_client
            .unlock_issue(
                &self.config.repo.owner,
                &self.config.repo.name,
                self.config.fixture_issue,
            )
            .await
    }

    /// Resets the fixture issue to the default payload via the push-capable
    /// actor. The response status is deliberately not inspected: teardown is
    /// an attempt at restoration, not an assertion.
    pub async fn teardown(&self) -> Result<()> {
        let payload = self.default_payload().to_json()?;
        self.edit_fixture_issue(&self.push_client, &payload).await?;
        Ok(())
    }
}

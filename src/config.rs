use std::env;

/// Environment variable names the suite reads its configuration from.
mod env_keys {
    pub const API_BASE_URL: &str = "ISSUE_SUITE_API_BASE_URL";
    pub const REPO_OWNER: &str = "ISSUE_SUITE_REPO_OWNER";
    pub const REPO_NAME: &str = "ISSUE_SUITE_REPO_NAME";
    pub const OWNER_PASSWORD: &str = "ISSUE_SUITE_OWNER_PASSWORD";
    pub const PUSH_USER: &str = "ISSUE_SUITE_PUSH_USER";
    pub const PUSH_PASSWORD: &str = "ISSUE_SUITE_PUSH_PASSWORD";
    pub const NO_PUSH_USER: &str = "ISSUE_SUITE_NO_PUSH_USER";
    pub const NO_PUSH_PASSWORD: &str = "ISSUE_SUITE_NO_PUSH_PASSWORD";
    pub const FIXTURE_ISSUE: &str = "ISSUE_SUITE_FIXTURE_ISSUE";
    pub const MISSING_ISSUE: &str = "ISSUE_SUITE_MISSING_ISSUE";
    pub const OUT_OF_RANGE_MILESTONE: &str = "ISSUE_SUITE_OUT_OF_RANGE_MILESTONE";
}

/// Fixture defaults used when an environment variable is not set.
///
/// The target repository must already contain the fixture issue and
/// milestones 1 and 2; see the README for the full precondition list.
mod defaults {
    pub const API_BASE_URL: &str = "https://api.github.com";
    pub const REPO_OWNER: &str = "repo-owner";
    pub const REPO_NAME: &str = "api-tests";
    pub const PUSH_USER: &str = "user-with-push-access";
    pub const NO_PUSH_USER: &str = "user-without-push-access";
    pub const PASSWORD: &str = "qUC7RqvMxd";
    pub const FIXTURE_ISSUE: u64 = 2;
    pub const MISSING_ISSUE: u64 = 3;
    pub const OUT_OF_RANGE_MILESTONE: u64 = 50;
}

/// Basic-auth credentials for one test actor.
///
/// Empty username and password represent the anonymous actor; the client
/// sends no `Authorization` header for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub username: String,
    pub password: String,
}

impl Actor {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new("", "")
    }

    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Coordinates of the repository the suite runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

/// Resolved suite configuration: API location, actor credentials, and the
/// fixture issue/milestone identifiers the scenarios target.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub api_base_url: String,
    pub repo: RepoRef,
    pub owner: Actor,
    pub push_user: Actor,
    pub no_push_user: Actor,
    /// Issue number the edit scenarios target; must exist in the repository.
    pub fixture_issue: u64,
    /// Issue number known not to exist in the repository.
    pub missing_issue: u64,
    /// Milestone reference outside the repository's 1..=2 fixture range.
    pub out_of_range_milestone: u64,
}

impl SuiteConfig {
    /// Reads the configuration from the environment, falling back to the
    /// documented fixture defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let string = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let number = |key: &str, default: u64| {
            lookup(key)
                .and_then(|value| value.parse().ok())
                .unwrap_or(default)
        };

        let repo = RepoRef {
            owner: string(env_keys::REPO_OWNER, defaults::REPO_OWNER),
            name: string(env_keys::REPO_NAME, defaults::REPO_NAME),
        };
        let owner = Actor::new(
            repo.owner.clone(),
            string(env_keys::OWNER_PASSWORD, defaults::PASSWORD),
        );

        Self {
            api_base_url: string(env_keys::API_BASE_URL, defaults::API_BASE_URL),
            repo,
            owner,
            push_user: Actor::new(
                string(env_keys::PUSH_USER, defaults::PUSH_USER),
                string(env_keys::PUSH_PASSWORD, defaults::PASSWORD),
            ),
            no_push_user: Actor::new(
                string(env_keys::NO_PUSH_USER, defaults::NO_PUSH_USER),
                string(env_keys::NO_PUSH_PASSWORD, defaults::PASSWORD),
            ),
            fixture_issue: number(env_keys::FIXTURE_ISSUE, defaults::FIXTURE_ISSUE),
            missing_issue: number(env_keys::MISSING_ISSUE, defaults::MISSING_ISSUE),
            out_of_range_milestone: number(
                env_keys::OUT_OF_RANGE_MILESTONE,
                defaults::OUT_OF_RANGE_MILESTONE,
            ),
        }
    }
}

//! Push webhook payload and commit-details schema.
//!
//! Only the fields the pipeline reads are modelled; everything else in the
//! payload is ignored on deserialization.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
/// Push event as delivered by the hosting service.
pub struct PushEvent {
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub pusher: Option<Person>,
    pub repository: Repository,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub head_commit: Option<Commit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub owner: Option<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Commit {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: Option<Person>,
}

impl Commit {
    /// Author display name, if the payload carried one.
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|n| !n.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Owner/name coordinates used to address the remote repository.
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn coords(&self) -> RepoRef {
        let owner = self
            .owner
            .as_ref()
            .and_then(|o| o.login.clone().or_else(|| o.name.clone()))
            .unwrap_or_default();
        RepoRef {
            owner,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Response body of a "get commit details" call.
pub struct CommitDetails {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// One changed file in a commit. `patch` is absent for binary or rename-only
/// changes.
pub struct ChangedFile {
    pub filename: String,
    #[serde(default)]
    pub patch: Option<String>,
}

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Repo {
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub commits: Vec<Commit>,
    /// Commit count reported by GitHub, present even when `commits` is trimmed.
    #[serde(default)]
    pub size: Option<usize>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub ref_type: Option<String>,
}

/// One entry of the public GitHub event feed. Only the fields the
/// activity printer needs are decoded; everything else is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub repo: Repo,
    #[serde(default)]
    pub payload: Payload,
}

impl Event {
    pub fn new(event_type: &str, repo: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            repo: Repo { name: repo.to_string() },
            payload: Payload::default(),
        }
    }

    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }

    pub fn commit_count(&self) -> usize {
        match self.payload.commits.len() {
            0 => self.payload.size.unwrap_or(0),
            n => n,
        }
    }

    /// Human readable line for the event, or `None` when there is nothing
    /// worth printing (a push without commits).
    pub fn describe(&self) -> Option<String> {
        let repo = self.repo_name();
        match self.event_type.as_str() {
            "PushEvent" => match self.commit_count() {
                0 => None,
                1 => Some(format!("Pushed 1 commit to {}", repo)),
                n => Some(format!("Pushed {} commits to {}", n, repo)),
            },
            "IssuesEvent" => match self.payload.action.as_deref() {
                None | Some("opened") => Some(format!("Opened a new issue in {}", repo)),
                Some(action) => Some(format!("{} an issue in {}", capitalize(action), repo)),
            },
            "WatchEvent" => Some(format!("Starred {}", repo)),
            "ForkEvent" => Some(format!("Forked {}", repo)),
            "CreateEvent" => match self.payload.ref_type.as_deref() {
                Some(ref_type) => Some(format!("Created {} in {}", ref_type, repo)),
                None => Some(format!("Created {}", repo)),
            },
            other => Some(format!("Performed {} on {}", other, repo)),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A document chunk the backend cited for an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub file_path: String,
    /// 0.0..=1.0
    pub relevance_score: f64,
    pub excerpt: String,
}

impl Source {
    /// Relevance as a whole percentage, rounded half away from zero.
    pub fn relevance_percent(&self) -> u32 {
        (self.relevance_score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// A single message in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Only assistant messages carry citations
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sources: Option<Vec<Source>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            sources: None,
        }
    }

    pub fn assistant(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            sources: Some(sources),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Citations to render under this message, if any.
    pub fn citations(&self) -> &[Source] {
        match (&self.role, &self.sources) {
            (Role::Assistant, Some(sources)) => sources,
            _ => &[],
        }
    }
}

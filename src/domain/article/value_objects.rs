use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured text bundle owned by an article. Title and body are required;
/// every change replaces the whole bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    title: String,
    body: String,
    summary: Option<String>,
}

impl ArticleContent {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        summary: Option<String>,
    ) -> DomainResult<Self> {
        const MAX_TITLE_CHARS: usize = 200;
        const MAX_SUMMARY_CHARS: usize = 500;

        let title = title.into();
        let body = body.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_CHARS} characters"
            )));
        }
        if body.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        let summary = match summary {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => {
                if value.chars().count() > MAX_SUMMARY_CHARS {
                    return Err(DomainError::Validation(format!(
                        "summary cannot exceed {MAX_SUMMARY_CHARS} characters"
                    )));
                }
                Some(value)
            }
            None => None,
        };
        Ok(Self {
            title,
            body,
            summary,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

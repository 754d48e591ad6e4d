use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub status: ArticleStatus,
    #[serde(default)]
    pub category_id: Option<i64>,
    pub author_id: i64,
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        // sorted so two loads of the same row serialize identically
        let mut tag_ids: Vec<i64> = article.tag_ids.iter().copied().map(i64::from).collect();
        tag_ids.sort_unstable();
        Self {
            id: article.id.into(),
            title: article.content.title().to_string(),
            body: article.content.body().to_string(),
            summary: article.content.summary().map(ToString::to_string),
            status: article.status,
            category_id: article.category_id.map(i64::from),
            author_id: article.author_id.into(),
            tag_ids,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

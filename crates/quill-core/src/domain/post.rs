use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::slug::derive_slug;

/// Post entity - a single article addressed externally by its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new unpublished post. The slug is derived from the title
    /// here, once, and stays fixed for the lifetime of the post.
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        let slug = derive_slug(&title);
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            slug,
            published: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Field overwrite applied by the update operation. The slug is
/// deliberately absent: retitling a post must not move it.
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
}

//! In-memory repository - used as fallback when Postgres is not configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::filter::PostFilter;
use quill_core::ports::PostRepository;

/// In-memory post store keyed by slug, behind an async RwLock.
///
/// This is the fallback implementation when no database is configured,
/// and the test double for handler-level logic.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&post.slug) {
            return Err(RepoError::Constraint("slug already exists".to_string()));
        }

        store.insert(post.slug.clone(), post.clone());
        Ok(post)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(slug).cloned())
    }

    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect())
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;

        let Some(post) = store.get_mut(slug) else {
            return Ok(None);
        };

        post.title = patch.title;
        post.content = patch.content;
        post.updated_at = chrono::Utc::now();

        Ok(Some(post.clone()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find_by_slug() {
        let repo = InMemoryPostRepository::new();
        let saved = repo
            .insert(Post::new("A".to_string(), "B".to_string()))
            .await
            .unwrap();
        assert_eq!(saved.slug, "a");

        let found = repo.find_by_slug("a").await.unwrap().unwrap();
        assert_eq!(found.title, "A");
        assert_eq!(found.content, "B");
        assert!(!found.published);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("Hello, World!".to_string(), "first".to_string()))
            .await
            .unwrap();

        let err = repo
            .insert(Post::new("Hello World".to_string(), "second".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));

        // The first post is untouched and remains the only one.
        let kept = repo.find_by_slug("hello-world").await.unwrap().unwrap();
        assert_eq!(kept.content, "first");
        let all = repo.list(&PostFilter::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_the_slug_stable() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("Old Title".to_string(), "text".to_string()))
            .await
            .unwrap();

        let patch = PostPatch {
            title: "New Title".to_string(),
            content: "revised text".to_string(),
        };
        let updated = repo.update_by_slug("old-title", patch).await.unwrap().unwrap();

        assert_eq!(updated.title, "New Title");
        assert_eq!(updated.content, "revised text");
        assert_eq!(updated.slug, "old-title");

        // The post is still reachable under its original slug.
        assert!(repo.find_by_slug("old-title").await.unwrap().is_some());
        assert!(repo.find_by_slug("new-title").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_on_missing_slug_return_none() {
        let repo = InMemoryPostRepository::new();

        let patch = PostPatch {
            title: "t".to_string(),
            content: "c".to_string(),
        };
        assert!(repo.update_by_slug("missing", patch).await.unwrap().is_none());
        assert!(repo.delete_by_slug("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_and_returns_the_post() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("Gone Soon".to_string(), "bye".to_string()))
            .await
            .unwrap();

        let deleted = repo.delete_by_slug("gone-soon").await.unwrap().unwrap();
        assert_eq!(deleted.title, "Gone Soon");

        assert!(repo.find_by_slug("gone-soon").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_applies_the_filter() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new("Rust Tips".to_string(), "borrowck".to_string()))
            .await
            .unwrap();
        let mut released = Post::new("Released".to_string(), "shipping news".to_string());
        released.published = true;
        repo.insert(released).await.unwrap();

        // Bare listing: unpublished posts only.
        let drafts = repo.list(&PostFilter::from_query(None, None)).await.unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].slug, "rust-tips");

        // Keyword restricted to title or content.
        let hits = repo
            .list(&PostFilter::from_query(None, Some("borrowck")))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let published = repo
            .list(&PostFilter::from_query(Some("true"), None))
            .await
            .unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].slug, "released");
    }
}

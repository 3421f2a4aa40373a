use async_trait::async_trait;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;
use crate::filter::PostFilter;

/// Post repository port.
///
/// Every operation is a single, self-contained store call; there is no
/// cross-request coordination in this layer. Slug uniqueness is enforced
/// by the store at insert time.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. A slug collision surfaces as
    /// [`RepoError::Constraint`] and is never retried with a suffixed slug.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Exact-match lookup on the unique slug key. `Ok(None)` is the
    /// expected outcome for an unknown slug, not a failure.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// All posts matching the filter; may be empty. Ordering is whatever
    /// the store returns.
    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Overwrite title and content for the post at `slug`. The slug itself
    /// is never recomputed from the new title.
    async fn update_by_slug(
        &self,
        slug: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, RepoError>;

    /// Remove and return the post at `slug`.
    async fn delete_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;
}

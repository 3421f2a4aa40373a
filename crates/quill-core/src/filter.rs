//! List filtering built from query parameters.

use crate::domain::Post;

/// Filter predicate for listing posts.
///
/// `published` is compared for equality even when the query parameter was
/// omitted: an absent parameter parses to `false`, so a bare listing
/// returns unpublished posts only. The keyword must occur in the title or
/// the content; the empty keyword matches every post.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFilter {
    pub published: bool,
    pub keyword: String,
}

impl PostFilter {
    /// Build the filter from raw query parameters. Anything other than the
    /// literal text `"true"` parses as `false`.
    pub fn from_query(published: Option<&str>, keyword: Option<&str>) -> Self {
        Self {
            published: published == Some("true"),
            keyword: keyword.unwrap_or_default().to_string(),
        }
    }

    /// Evaluate the predicate against a post in-process. The Postgres
    /// repository translates the same predicate into SQL instead.
    pub fn matches(&self, post: &Post) -> bool {
        post.published == self.published
            && (post.title.contains(&self.keyword) || post.content.contains(&self.keyword))
    }
}

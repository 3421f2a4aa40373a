//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Set,
};

use quill_core::domain::{Post, PostPatch};
use quill_core::error::RepoError;
use quill_core::filter::PostFilter;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Each operation issues a single self-contained statement; slug
/// uniqueness rests on the unique index over the `slug` column.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Translate the list filter into a SQL condition: publication state must
/// match, and the keyword must occur in the title or the content.
fn filter_condition(filter: &PostFilter) -> Condition {
    Condition::all()
        .add(post::Column::Published.eq(filter.published))
        .add(
            Condition::any()
                .add(post::Column::Title.contains(&filter.keyword))
                .add(post::Column::Content.contains(&filter.keyword)),
        )
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = new_post.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("slug already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_slug = %slug, "Finding post by slug");

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(filter_condition(filter))
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_by_slug(
        &self,
        slug: &str,
        patch: PostPatch,
    ) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        // Title and content only; the slug stays as assigned at creation.
        let mut active = model.into_active_model();
        active.title = Set(patch.title);
        active.content = Set(patch.content);
        active.updated_at = Set(Utc::now().into());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(updated.into()))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let deleted: Post = model.clone().into();
        model
            .delete(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(Some(deleted))
    }
}

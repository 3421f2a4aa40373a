#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use quill_core::domain::Post;
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(slug: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            slug: slug.to_owned(),
            published: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let model = sample_model("test-post");
        let post_id = model.id;

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_slug("test-post").await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.slug, "test-post");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_find_post_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_slug("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_post_by_slug() {
        let model = sample_model("test-post");

        // Lookup first, then the delete statement
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let deleted = repo.delete_by_slug("test-post").await.unwrap();
        assert!(deleted.is_some());
        assert_eq!(deleted.unwrap().slug, "test-post");
    }
}

//! Post resource handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostPatch};
use quill_core::filter::PostFilter;
use quill_core::validate::validate_post_fields;
use quill_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        slug: post.slug,
        published: post.published,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate before deriving the slug or touching the store
    let violations = validate_post_fields(&req.title, &req.content);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let post = Post::new(req.title, req.content);
    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /api/posts
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let filter = PostFilter::from_query(query.published.as_deref(), query.keyword.as_deref());

    let posts = state.posts.list(&filter).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// PUT /api/posts/{slug}
pub async fn update_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let req = body.into_inner();

    let violations = validate_post_fields(&req.title, &req.content);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }

    let patch = PostPatch {
        title: req.title,
        content: req.content,
    };

    let updated = state
        .posts
        .update_by_slug(&slug, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// DELETE /api/posts/{slug}
pub async fn delete_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let deleted = state
        .posts
        .delete_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no post with slug '{}'", slug)))?;

    Ok(HttpResponse::Ok().json(to_response(deleted)))
}

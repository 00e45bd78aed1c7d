//! Category CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use codepulse_core::domain::Category;
use codepulse_shared::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use codepulse_shared::{MessageResponse, PatchDocument};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name,
        url_handle: category.url_handle,
    }
}

/// POST /api/categories
pub async fn create_category(
    state: web::Data<AppState>,
    body: web::Json<CreateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let category = Category::new(req.name, req.url_handle);
    let created = state.categories.create(category).await?;
    tracing::debug!(category_id = %created.id, "Category created");

    Ok(HttpResponse::Ok().json(to_response(created)))
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.find_all().await?;

    let response: Vec<CategoryResponse> = categories.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/categories/{id}
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let category = state
        .categories
        .find_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound(None))?;

    Ok(HttpResponse::Ok().json(to_response(category)))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let category = Category::with_id(path.into_inner(), req.name, req.url_handle);
    let updated = state
        .categories
        .update(category)
        .await?
        .ok_or(AppError::NotFound(None))?;

    Ok(HttpResponse::Ok().json(to_response(updated)))
}

/// PATCH /api/categories/{id}
///
/// Applies a JSON Patch document to `{name, urlHandle}` and persists the
/// result. The response carries the patched fields only.
pub async fn patch_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: Option<web::Json<PatchDocument>>,
) -> AppResult<HttpResponse> {
    let Some(document) = body else {
        return Err(AppError::BadRequest(None));
    };
    let id = path.into_inner();

    let existing = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound(None))?;

    let mut target = UpdateCategoryRequest {
        name: existing.name,
        url_handle: existing.url_handle,
    };
    document.apply_to(&mut target)?;

    let patched = Category::with_id(id, target.name, target.url_handle);
    let updated = state
        .categories
        .update(patched)
        .await?
        // Deleted between the lookup and the write.
        .ok_or(AppError::NotFound(None))?;
    tracing::debug!(
        category_id = %id,
        operations = document.operations().len(),
        "Category patched"
    );

    Ok(HttpResponse::Ok().json(UpdateCategoryRequest {
        name: updated.name,
        url_handle: updated.url_handle,
    }))
}

/// DELETE /api/categories/{id}
pub async fn delete_category(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let deleted = state
        .categories
        .delete(path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound(Some("Category not found.".to_string())))?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "{} deleted successfully.",
        deleted.name
    ))))
}

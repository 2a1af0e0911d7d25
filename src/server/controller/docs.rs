use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        docs::{
            CreateDocPageDto, CreateDocSectionDto, DocPageDto, DocSectionDto, UpdateDocPageDto,
            UpdateDocSectionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::docs::DocsService,
        state::AppState,
    },
};

pub static DOCS_TAG: &str = "docs";

#[utoipa::path(
    get,
    path = "/api/docs/sections",
    tag = DOCS_TAG,
    responses(
        (status = 200, description = "Sections ordered by position, with pages; unpublished pages only for admins", body = Vec<DocSectionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sections(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let sections = DocsService::new(&state.db).get_sections(&user).await?;

    let dtos: Vec<DocSectionDto> = sections.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/docs/sections",
    tag = DOCS_TAG,
    request_body = CreateDocSectionDto,
    responses(
        (status = 201, description = "Created section", body = DocSectionDto),
        (status = 400, description = "Slug empty or already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDocSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let section = DocsService::new(&state.db)
        .create_section(payload.slug, payload.title, payload.position)
        .await?;

    Ok((StatusCode::CREATED, Json(section.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/docs/sections/{id}",
    tag = DOCS_TAG,
    params(
        ("id" = i32, Path, description = "Section ID")
    ),
    request_body = UpdateDocSectionDto,
    responses(
        (status = 200, description = "Updated section", body = DocSectionDto),
        (status = 400, description = "Slug empty or already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDocSectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let section = DocsService::new(&state.db)
        .update_section(id, Some(payload.slug), payload.title, payload.position)
        .await?;

    Ok((StatusCode::OK, Json(section.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/docs/sections/{id}",
    tag = DOCS_TAG,
    params(
        ("id" = i32, Path, description = "Section ID")
    ),
    responses(
        (status = 204, description = "Section deleted together with its pages"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Section not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_section(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    DocsService::new(&state.db).delete_section(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/docs/pages/{slug}",
    tag = DOCS_TAG,
    params(
        ("slug" = String, Path, description = "Page slug")
    ),
    responses(
        (status = 200, description = "The page", body = DocPageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No such slug, or page unpublished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let page = DocsService::new(&state.db)
        .get_page_by_slug(&user, &slug)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/docs/pages",
    tag = DOCS_TAG,
    request_body = CreateDocPageDto,
    responses(
        (status = 201, description = "Created page", body = DocPageDto),
        (status = 400, description = "Unknown section, empty slug, or slug taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDocPageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = DocsService::new(&state.db)
        .create_page(
            payload.section_id,
            payload.slug,
            payload.title,
            payload.content,
            payload.position,
            payload.published,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(page.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/docs/pages/{id}",
    tag = DOCS_TAG,
    params(
        ("id" = i32, Path, description = "Page ID")
    ),
    request_body = UpdateDocPageDto,
    responses(
        (status = 200, description = "Updated page", body = DocPageDto),
        (status = 400, description = "Unknown section, empty slug, or slug taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDocPageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = DocsService::new(&state.db)
        .update_page(
            id,
            payload.section_id,
            Some(payload.slug),
            payload.title,
            payload.content,
            payload.position,
            payload.published,
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/docs/pages/{id}",
    tag = DOCS_TAG,
    params(
        ("id" = i32, Path, description = "Page ID")
    ),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    DocsService::new(&state.db).delete_page(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

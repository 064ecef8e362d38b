use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::settings_dto::{
        DealershipResponse, SaveWorkingHoursPayload, UpdateUserRolePayload, UserListResponse,
        UserResponse,
    },
    error::Result,
    middleware::auth::Claims,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/admin/settings/dealership",
    responses(
        (status = 200, description = "Dealership info with working hours", body = Json<DealershipResponse>)
    )
)]
#[axum::debug_handler]
pub async fn get_dealership_info(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    state.user_service.require_user(&claims).await?;

    let (dealership, hours) = state.settings_service.get_dealership().await?;
    Ok(Json(DealershipResponse::from_parts(dealership, hours)))
}

#[utoipa::path(
    post,
    path = "/api/admin/settings/working-hours",
    request_body = SaveWorkingHoursPayload,
    responses(
        (status = 200, description = "Schedule replaced", body = Json<DealershipResponse>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn save_working_hours(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SaveWorkingHoursPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.require_admin(&claims).await?;

    let (dealership, hours) = state
        .settings_service
        .replace_working_hours(&payload.working_hours)
        .await?;
    Ok(Json(DealershipResponse::from_parts(dealership, hours)))
}

#[utoipa::path(
    get,
    path = "/api/admin/settings/users",
    responses(
        (status = 200, description = "All users, newest first", body = Json<UserListResponse>),
        (status = 403, description = "Caller is not an admin")
    )
)]
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    state.user_service.require_admin(&claims).await?;

    let users = state.user_service.list().await?;
    let items: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(UserListResponse { items }))
}

#[utoipa::path(
    patch,
    path = "/api/admin/settings/users/{id}/role",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRolePayload,
    responses(
        (status = 200, description = "Role updated", body = Json<UserResponse>),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user_role(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRolePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.require_admin(&claims).await?;

    let role = payload.role.to_uppercase();
    let user = state.user_service.update_role(id, &role).await?;
    Ok(Json(UserResponse::from(user)))
}

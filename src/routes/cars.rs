use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::car_dto::{
        CarListQuery, CarListResponse, CarResponse, CreateCarPayload, UpdateCarStatusPayload,
    },
    error::{Error, Result},
    middleware::auth::Claims,
    utils::data_url::parse_image_data_url,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/admin/cars/extract",
    responses(
        (status = 200, description = "Car details extracted from the image"),
        (status = 400, description = "Missing image or malformed AI response"),
        (status = 502, description = "AI provider failure")
    )
)]
#[axum::debug_handler]
pub async fn extract_car_image(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    state.user_service.require_user(&claims).await?;

    let mut image: Option<(Vec<u8>, String)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            let content_type = field
                .content_type()
                .unwrap_or("image/jpeg")
                .to_string();
            let bytes = field.bytes().await?;
            image = Some((bytes.to_vec(), content_type));
            break;
        }
    }

    let (bytes, content_type) =
        image.ok_or_else(|| Error::BadRequest("Missing image field".to_string()))?;
    if !content_type.starts_with("image/") {
        return Err(Error::BadRequest(format!(
            "Unsupported content type: {}",
            content_type
        )));
    }

    let details = state
        .ai_service
        .extract_car_details(&bytes, &content_type)
        .await?;
    Ok(Json(details))
}

#[utoipa::path(
    post,
    path = "/api/admin/cars",
    request_body = CreateCarPayload,
    responses(
        (status = 201, description = "Car created successfully", body = Json<CarResponse>),
        (status = 400, description = "Invalid payload or no valid images"),
        (status = 401, description = "Unknown caller")
    )
)]
#[axum::debug_handler]
pub async fn add_car(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateCarPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.require_user(&claims).await?;

    // Generated up front so the row id and the storage folder stay in sync.
    let car_id = Uuid::new_v4();
    let folder_path = format!("cars/{}", car_id);

    let mut image_urls = Vec::new();
    for (index, data_url) in payload.images.iter().enumerate() {
        let Some(image) = parse_image_data_url(data_url) else {
            tracing::warn!(index, "Skipping invalid image data");
            continue;
        };

        let file_name = format!(
            "image-{}-{}.{}",
            chrono::Utc::now().timestamp_millis(),
            index,
            image.extension
        );
        let file_path = format!("{}/{}", folder_path, file_name);
        let content_type = image.content_type();

        let public_url = state
            .storage_service
            .upload(&file_path, image.bytes, &content_type)
            .await?;
        image_urls.push(public_url);
    }

    if image_urls.is_empty() {
        return Err(Error::BadRequest(
            "No valid images were uploaded".to_string(),
        ));
    }

    let status = payload
        .car
        .status
        .as_deref()
        .unwrap_or("AVAILABLE")
        .to_uppercase();

    // Uploaded blobs are not cleaned up if the insert fails.
    let car = state
        .car_service
        .create(car_id, &payload.car, &status, &image_urls)
        .await?;

    Ok((StatusCode::CREATED, Json(CarResponse::from(car))))
}

#[utoipa::path(
    get,
    path = "/api/admin/cars",
    params(
        ("search" = Option<String>, Query, description = "Substring matched against make, model and color")
    ),
    responses(
        (status = 200, description = "List of cars", body = Json<CarListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_cars(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<CarListQuery>,
) -> Result<impl IntoResponse> {
    state.user_service.require_user(&claims).await?;

    let cars = state.car_service.list(query.search.as_deref()).await?;
    let items: Vec<CarResponse> = cars.into_iter().map(Into::into).collect();
    Ok(Json(CarListResponse { items }))
}

#[utoipa::path(
    delete,
    path = "/api/admin/cars/{id}",
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    responses(
        (status = 204, description = "Car deleted; storage cleanup is best-effort"),
        (status = 404, description = "Car not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_car(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.user_service.require_user(&claims).await?;

    let car = state.car_service.get_by_id(id).await?;
    state.car_service.delete(id).await?;

    // The row is gone at this point; a failed blob removal only logs.
    let file_paths: Vec<String> = car
        .images
        .iter()
        .filter_map(|image_url| {
            let path = state.storage_service.object_path_from_url(image_url);
            if path.is_none() {
                tracing::warn!(%image_url, "Image URL does not match bucket layout, skipping");
            }
            path
        })
        .collect();

    if !file_paths.is_empty() {
        if let Err(e) = state.storage_service.remove(&file_paths).await {
            tracing::warn!(error = ?e, car_id = %id, "Failed to remove car images from storage");
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/admin/cars/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    request_body = UpdateCarStatusPayload,
    responses(
        (status = 200, description = "Car updated", body = Json<CarResponse>),
        (status = 404, description = "Car not found")
    )
)]
#[axum::debug_handler]
pub async fn update_car_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCarStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.require_user(&claims).await?;

    let status = payload.status.as_deref().map(str::to_uppercase);
    let car = state
        .car_service
        .update_status(id, status.as_deref(), payload.featured)
        .await?;
    Ok(Json(CarResponse::from(car)))
}

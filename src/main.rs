use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};
use dealership_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let admin_api = Router::new()
        .route(
            "/api/admin/cars",
            get(routes::cars::list_cars).post(routes::cars::add_car),
        )
        .route(
            "/api/admin/cars/extract",
            post(routes::cars::extract_car_image),
        )
        .route("/api/admin/cars/:id", delete(routes::cars::delete_car))
        .route(
            "/api/admin/cars/:id/status",
            patch(routes::cars::update_car_status),
        )
        .route(
            "/api/admin/settings/dealership",
            get(routes::settings::get_dealership_info),
        )
        .route(
            "/api/admin/settings/working-hours",
            post(routes::settings::save_working_hours),
        )
        .route(
            "/api/admin/settings/users",
            get(routes::settings::list_users),
        )
        .route(
            "/api/admin/settings/users/:id/role",
            patch(routes::settings::update_user_role),
        )
        .layer(axum::middleware::from_fn(
            dealership_backend::middleware::auth::require_bearer_auth,
        ));

    let app = base_routes
        .merge(admin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

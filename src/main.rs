mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::{Config, PhotoExportConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::assistant::{routes as assistant_routes, AssistantService};
use crate::features::auth;
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::diary::{routes as diary_routes, DiaryService};
use crate::features::materials::{routes as materials_routes, MaterialService};
use crate::features::orders::{routes as orders_routes, OrderService};
use crate::features::photos::{routes as photos_routes, PhotoExportService, PhotoService};
use crate::features::settings::{routes as settings_routes, SettingsService};
use crate::features::time_entries::{routes as time_entries_routes, TimeEntryService};
use crate::modules::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use crate::modules::store::{OrderStore, SharedStore};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

/// Every feature service, wired to one order store and one settings store
struct AppServices {
    auth: Arc<AuthService>,
    orders: Arc<OrderService>,
    materials: Arc<MaterialService>,
    time_entries: Arc<TimeEntryService>,
    diary: Arc<DiaryService>,
    photos: Arc<PhotoService>,
    dashboard: Arc<DashboardService>,
    assistant: Arc<AssistantService>,
    settings: Arc<SettingsService>,
}

impl AppServices {
    fn new(
        store: SharedStore,
        kv: Arc<dyn KeyValueStore>,
        token_service: Arc<TokenService>,
        photo_export: &PhotoExportConfig,
    ) -> anyhow::Result<Self> {
        let settings = Arc::new(SettingsService::new(kv));
        let exporter = Arc::new(
            PhotoExportService::new(photo_export)
                .map_err(|e| anyhow::anyhow!("Failed to initialize photo export: {}", e))?,
        );

        Ok(Self {
            auth: Arc::new(AuthService::new(token_service)),
            orders: Arc::new(OrderService::new(store.clone())),
            materials: Arc::new(MaterialService::new(store.clone())),
            time_entries: Arc::new(TimeEntryService::new(store.clone())),
            diary: Arc::new(DiaryService::new(store.clone())),
            photos: Arc::new(PhotoService::new(
                store.clone(),
                Arc::clone(&settings),
                exporter,
            )),
            dashboard: Arc::new(DashboardService::new(store.clone())),
            assistant: Arc::new(AssistantService::new(store)),
            settings,
        })
    }

    /// API routes: login and health are public, everything else needs a JWT
    fn router(self, jwt_validator: Arc<auth::JwtValidator>) -> Router {
        // Protected routes (require JWT authentication)
        let protected_routes = Router::new()
            .merge(auth_routes::protected_routes(Arc::clone(&self.auth)))
            .merge(orders_routes::routes(self.orders))
            .merge(materials_routes::routes(self.materials))
            .merge(time_entries_routes::routes(self.time_entries))
            .merge(diary_routes::routes(self.diary))
            .merge(photos_routes::routes(self.photos))
            .merge(dashboard_routes::routes(self.dashboard))
            .merge(assistant_routes::routes(self.assistant))
            .merge(settings_routes::routes(self.settings))
            .route_layer(axum::middleware::from_fn_with_state(
                jwt_validator,
                middleware::auth_middleware,
            ));

        // Simple health check endpoint (no auth required)
        async fn health_check() -> axum::http::StatusCode {
            axum::http::StatusCode::OK
        }
        let health_route = Router::new().route("/health", axum::routing::get(health_check));

        // Public routes (no auth required)
        let public_routes = Router::new().merge(auth_routes::public_routes(self.auth));

        Router::new()
            .merge(protected_routes)
            .merge(public_routes)
            .merge(health_route)
    }
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Order store
    let store = if config.store.seed_demo_data {
        let store = OrderStore::seeded()
            .map_err(|e| anyhow::anyhow!("Failed to load demo data: {}", e))?;
        tracing::info!("Order store seeded with {} demo orders", store.orders().len());
        store
    } else {
        tracing::info!("Order store starts empty");
        OrderStore::new()
    }
    .into_shared();

    // Settings store
    let kv: Arc<dyn KeyValueStore> = match &config.store.settings_file {
        Some(path) => {
            let file_store = FileKeyValueStore::open(path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to open settings file {}: {}", path, e))?;
            tracing::info!("Settings persisted to {}", file_store.path().display());
            Arc::new(file_store)
        }
        None => {
            tracing::info!("Settings kept in memory only");
            Arc::new(MemoryKeyValueStore::new())
        }
    };

    // Initialize auth
    let jwt_validator = Arc::new(auth::JwtValidator::new(&config.auth));
    let token_service = Arc::new(TokenService::new(&config.auth));
    tracing::info!(
        "Auth configuration initialized (issuer: {}, token ttl: {}s)",
        config.auth.jwt_issuer,
        config.auth.token_ttl.as_secs()
    );

    let services = AppServices::new(store, kv, token_service, &config.photo_export)?;
    tracing::info!("Feature services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let app = Router::new()
        .merge(swagger)
        .merge(services.router(jwt_validator))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

mod core;
mod features;
mod shared;

use crate::core::config::{Config, RegionConfig, ZipCodeConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::predictions::{
    routes as predictions_routes, HttpModelClient, PredictionService,
};
use crate::features::regions::{routes as regions_routes, RegionResolver, RegionTable};
use crate::features::zip_codes::{routes as zip_codes_routes, ZipCodeDirectory};
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Json, Router};
use serde_json::{json, Value};
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
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
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

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );
    tracing::info!("Configuration loaded successfully");

    // Region table is built once and shared read-only by every request
    let region_table = Arc::new(load_region_table(&config.regions)?);
    let region_resolver = Arc::new(RegionResolver::new(Arc::clone(&region_table)));
    tracing::info!(
        "Region resolver initialized with {} ranges",
        region_table.len()
    );

    let zip_codes = load_zip_codes(&config.zip_codes)?.map(Arc::new);
    match &zip_codes {
        Some(directory) => tracing::info!(
            "ZIP code directory loaded with {} entries",
            directory.len()
        ),
        None => tracing::info!("ZIP code directory disabled (no reference file configured)"),
    }

    let apartment_model = Arc::new(
        HttpModelClient::new(&config.models.apartment_url, config.models.timeout)
            .map_err(|e| anyhow::anyhow!("Failed to create apartment model client: {}", e))?,
    );
    let house_model = Arc::new(
        HttpModelClient::new(&config.models.house_url, config.models.timeout)
            .map_err(|e| anyhow::anyhow!("Failed to create house model client: {}", e))?,
    );
    tracing::info!(
        "Model clients initialized (apartment: {}, house: {})",
        apartment_model.url(),
        house_model.url()
    );

    let prediction_service = Arc::new(PredictionService::new(
        Arc::clone(&region_resolver),
        zip_codes.clone(),
        apartment_model,
        house_model,
    ));
    tracing::info!("Prediction service initialized");

    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

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

    let api_routes = api_router(
        region_resolver,
        zip_codes.unwrap_or_default(),
        prediction_service,
    );

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
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

    let addr = config.app.server_address();
    let listener = bind_listener(&addr)?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Feature routes plus the liveness endpoints
fn api_router(
    region_resolver: Arc<RegionResolver>,
    zip_codes: Arc<ZipCodeDirectory>,
    prediction_service: Arc<PredictionService>,
) -> Router {
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }

    async fn root() -> Json<Value> {
        Json(json!({ "message": "API is alive" }))
    }

    Router::new()
        .route("/", axum::routing::get(root))
        .route("/health", axum::routing::get(health_check))
        .merge(regions_routes::routes(region_resolver))
        .merge(zip_codes_routes::routes(zip_codes))
        .merge(predictions_routes::routes(prediction_service))
}

fn load_region_table(config: &RegionConfig) -> anyhow::Result<RegionTable> {
    match &config.table_path {
        Some(path) => {
            let table = RegionTable::from_json_file(path).map_err(|e| {
                anyhow::anyhow!("Failed to load region table {}: {}", path.display(), e)
            })?;
            tracing::info!("Region table loaded from {}", path.display());
            Ok(table)
        }
        None => Ok(RegionTable::belgian()),
    }
}

fn load_zip_codes(config: &ZipCodeConfig) -> anyhow::Result<Option<ZipCodeDirectory>> {
    config
        .reference_path
        .as_ref()
        .map(|path| {
            ZipCodeDirectory::from_json_file(path).map_err(|e| {
                anyhow::anyhow!("Failed to load ZIP code reference {}: {}", path.display(), e)
            })
        })
        .transpose()
}

fn bind_listener(addr: &str) -> anyhow::Result<tokio::net::TcpListener> {
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
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
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

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    fn server() -> TestServer {
        let resolver = Arc::new(RegionResolver::new(Arc::new(RegionTable::belgian())));
        let model = Arc::new(
            HttpModelClient::new("http://127.0.0.1:9/predict", Duration::from_secs(1)).unwrap(),
        );
        let predictions = Arc::new(PredictionService::new(
            Arc::clone(&resolver),
            None,
            model.clone(),
            model,
        ));
        TestServer::new(api_router(
            resolver,
            Arc::new(ZipCodeDirectory::default()),
            predictions,
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let server = server();

        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_json(&json!({ "message": "API is alive" }));

        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_feature_routes_are_mounted() {
        let server = server();
        server
            .get("/api/regions/classify/1000")
            .await
            .assert_status_ok();
        server.get("/api/predictions/models").await.assert_status_ok();
    }

    #[test]
    fn test_load_region_table_defaults_to_belgian() {
        let table = load_region_table(&RegionConfig::default()).unwrap();
        assert_eq!(table, RegionTable::belgian());
    }

    #[test]
    fn test_load_region_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"lower": 9000, "upper": 9992, "region": "East Flanders", "macroRegion": "Flanders"}}]"#
        )
        .unwrap();

        let config = RegionConfig {
            table_path: Some(file.path().to_path_buf()),
        };
        let table = load_region_table(&config).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_region_table_rejects_invalid_file() {
        let config = RegionConfig {
            table_path: Some(PathBuf::from("/nonexistent/table.json")),
        };
        assert!(load_region_table(&config).is_err());
    }

    #[test]
    fn test_load_zip_codes_disabled_without_path() {
        assert!(load_zip_codes(&ZipCodeConfig::default()).unwrap().is_none());
    }
}

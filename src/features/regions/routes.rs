use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionResolver;

/// Create routes for the regions feature
pub fn routes(resolver: Arc<RegionResolver>) -> Router {
    Router::new()
        .route(
            "/api/regions/classify/{postal_code}",
            get(handlers::classify_postal_code),
        )
        .route("/api/regions/table", get(handlers::list_region_table))
        .with_state(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::dtos::{ClassificationResponseDto, RegionRangeDto};
    use crate::features::regions::models::{RegionRange, RegionTable};
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server_with(table: RegionTable) -> TestServer {
        let resolver = Arc::new(RegionResolver::new(Arc::new(table)));
        TestServer::new(routes(resolver)).unwrap()
    }

    #[tokio::test]
    async fn test_classify_resolved() {
        let server = server_with(RegionTable::belgian());

        let response = server.get("/api/regions/classify/4000").await;
        response.assert_status_ok();

        let body: ApiResponse<ClassificationResponseDto> = response.json();
        assert!(body.success);
        let data = body.data.unwrap();
        assert_eq!(data.postal_code, "4000");
        assert_eq!(data.region, "Liège");
        assert_eq!(data.macro_region.as_deref(), Some("Wallonia"));
    }

    #[tokio::test]
    async fn test_classify_unresolved_is_bad_request() {
        let server = server_with(RegionTable::belgian());

        for code in ["abcd", "0999", "0001", "12345"] {
            let response = server
                .get(&format!("/api/regions/classify/{}", code))
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let body: ApiResponse<()> = response.json();
            assert!(!body.success);
            assert!(body.message.unwrap().contains("4-digit"));
        }
    }

    #[tokio::test]
    async fn test_classify_trims_path_value() {
        let server = server_with(RegionTable::belgian());

        let response = server.get("/api/regions/classify/%201000%20").await;
        response.assert_status_ok();

        let body: ApiResponse<ClassificationResponseDto> = response.json();
        assert_eq!(body.data.unwrap().postal_code, "1000");
    }

    #[tokio::test]
    async fn test_list_table_preserves_order() {
        let table = RegionTable::new(vec![
            RegionRange::new(1000, 2000, "A"),
            RegionRange::new(1500, 2500, "B"),
        ])
        .unwrap();
        let server = server_with(table);

        let response = server.get("/api/regions/table").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<RegionRangeDto>> = response.json();
        assert_eq!(body.meta.unwrap().total, 2);
        let regions: Vec<String> = body.data.unwrap().into_iter().map(|r| r.region).collect();
        assert_eq!(regions, vec!["A".to_string(), "B".to_string()]);
    }
}

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::zip_codes::handlers;
use crate::features::zip_codes::services::ZipCodeDirectory;

/// Create routes for the ZIP code reference feature
pub fn routes(directory: Arc<ZipCodeDirectory>) -> Router {
    Router::new()
        .route("/api/zip-codes/{zip}", get(handlers::get_zip_code))
        .with_state(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::zip_codes::dtos::ZipCodeResponseDto;
    use crate::features::zip_codes::models::ZipCodeEntry;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let directory = ZipCodeDirectory::from_entries(vec![ZipCodeEntry {
            zip: "3000".to_string(),
            city: "Leuven".to_string(),
            lat: 50.88,
            lng: 4.70,
        }]);
        TestServer::new(routes(Arc::new(directory))).unwrap()
    }

    #[tokio::test]
    async fn test_get_zip_code_found() {
        let response = server().get("/api/zip-codes/3000").await;
        response.assert_status_ok();

        let body: ApiResponse<ZipCodeResponseDto> = response.json();
        assert_eq!(body.data.unwrap().city, "Leuven");
    }

    #[tokio::test]
    async fn test_get_zip_code_not_found() {
        let response = server().get("/api/zip-codes/1000").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }
}

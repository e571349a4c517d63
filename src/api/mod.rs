//! REST API layer: route handlers, OpenAPI document, and app assembly.

pub mod handlers;
pub mod openapi;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json")),
    );

    router
}

/// Builds the servable application: routes, middleware, and state.
///
/// Requests running longer than `request_timeout` are answered with
/// `408 Request Timeout`.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    with_middleware(build_router(), request_timeout).with_state(state)
}

/// Wraps `router` in the tracing, timeout, and CORS layers.
fn with_middleware<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            ))
            .layer(CorsLayer::permissive()),
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::routing::get;
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let router: Router = with_middleware(
            Router::new().route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            ),
            Duration::from_millis(50),
        );

        let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
            panic!("failed to bind test listener");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("listener has no address");
        };
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let Ok(response) = reqwest::get(format!("http://{addr}/slow")).await else {
            panic!("request failed");
        };
        assert_eq!(response.status().as_u16(), 408);
    }
}

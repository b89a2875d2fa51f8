use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use civils_security::http::{self, AppState};
use civils_security::{Cors, CorsPolicy, SecurityPolicy};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn development_state() -> AppState {
    AppState::new(SecurityPolicy::new(
        Cors::new(CorsPolicy::development()).expect("valid CORS configuration"),
    ))
}

pub fn development_app() -> Router {
    http::router(development_state())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

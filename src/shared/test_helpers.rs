#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::modules::store::{OrderStore, SharedStore};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser::from_email("tekniker@sanering.se")
}

#[cfg(test)]
async fn inject_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Stand-in for the JWT middleware: every request is made as `create_test_user()`
#[cfg(test)]
pub fn with_authenticated_user(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_user_middleware))
}

/// Fresh store loaded with the demo data
#[cfg(test)]
pub fn seeded_store() -> SharedStore {
    OrderStore::seeded()
        .expect("demo data has unique order ids")
        .into_shared()
}

/// Export settings that let tests reach `spawn_photo_receiver` on loopback
#[cfg(test)]
pub fn local_export_config() -> crate::core::config::PhotoExportConfig {
    crate::core::config::PhotoExportConfig {
        request_timeout: std::time::Duration::from_secs(5),
        allow_private_hosts: true,
    }
}

/// One request seen by `spawn_photo_receiver`
#[cfg(test)]
#[derive(Debug)]
pub struct ReceivedExport {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

/// Local HTTP endpoint standing in for a photo export target.
///
/// Answers every POST to `/upload` with `status` and forwards what it received
/// to the returned channel. Returns the full upload URL.
#[cfg(test)]
pub async fn spawn_photo_receiver(
    status: axum::http::StatusCode,
) -> (String, tokio::sync::mpsc::UnboundedReceiver<ReceivedExport>) {
    use axum::{http::HeaderMap, routing::post, Json};

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    let app = Router::new().route(
        "/upload",
        post(
            move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    let authorization = headers
                        .get(axum::http::header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let _ = tx.send(ReceivedExport {
                        authorization,
                        body,
                    });
                    status
                }
            },
        ),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/upload", addr), rx)
}

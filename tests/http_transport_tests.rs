// tests/http_transport_tests.rs
// The reqwest transport against a local Actix server standing in for the
// product API.

mod common;

use std::net::{SocketAddr, TcpListener};

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use common::THREE_PRODUCTS_JSON;
use mymart_catalog::web_app::api::{fetch_catalog, HttpTransport};
use mymart_catalog::web_app::config::ApiBase;
use mymart_catalog::web_app::error::FetchError;
use mymart_catalog::web_app::model::ViewState;

async fn products() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(THREE_PRODUCTS_JSON)
}

async fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().finish()
}

async fn bad_request() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "message": "Bad request" }))
}

/// Start a fake product API on an ephemeral port
fn start_api() -> anyhow::Result<(SocketAddr, ServerHandle)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;

    let server = HttpServer::new(|| {
        App::new()
            .route("/ok/api/products", web::get().to(products))
            .route("/down/api/products", web::get().to(unavailable))
            .route("/bad/api/products", web::get().to(bad_request))
    })
    .workers(1)
    .listen(listener)?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((addr, handle))
}

#[actix_web::test]
async fn test_http_success() -> anyhow::Result<()> {
    let (addr, handle) = start_api()?;
    let base = ApiBase::new(format!("http://{}/ok/", addr));

    let page = fetch_catalog(&HttpTransport::new(), &base).await?;
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].brand, "Apple");

    handle.stop(true).await;
    Ok(())
}

#[actix_web::test]
async fn test_http_status_classification() -> anyhow::Result<()> {
    let (addr, handle) = start_api()?;
    let transport = HttpTransport::new();

    let cases = [
        ("missing", "API endpoint not found"),
        ("down", "Server error - Please try again later"),
        ("bad", "Bad request"),
    ];

    for (prefix, expected) in cases {
        let base = ApiBase::new(format!("http://{}/{}", addr, prefix));
        let state = ViewState::from(fetch_catalog(&transport, &base).await);
        assert_eq!(state.error(), Some(expected), "prefix {}", prefix);
    }

    handle.stop(true).await;
    Ok(())
}

#[actix_web::test]
async fn test_http_connection_refused_is_network_error() -> anyhow::Result<()> {
    // Grab a free port and release it so nothing is listening there
    let addr = TcpListener::bind("127.0.0.1:0")?.local_addr()?;
    let base = ApiBase::new(format!("http://{}", addr));

    let err = fetch_catalog(&HttpTransport::new(), &base).await.unwrap_err();
    assert!(matches!(err, FetchError::NetworkUnreachable(_)), "{:?}", err);
    assert_eq!(err.user_message(), "Network error - Cannot connect to server");
    Ok(())
}

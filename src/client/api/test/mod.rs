//! HTTP round-trip tests.
//!
//! Each test serves the full router on an ephemeral local port, backed by its own
//! in-memory SQLite database, and talks to it through `ApiClient`.

use test_utils::{builder::TestBuilder, context::TestContext};
use tokio::net::TcpListener;

use crate::{
    client::{api::ApiClient, model::error::ApiError},
    server::{router, state::AppState},
};


/// Running test server plus the context owning its database.
struct TestServer {
    client: ApiClient,
    _context: TestContext,
}

async fn spawn_server() -> TestServer {
    let context = TestBuilder::new()
        .with_roadmap_tables()
        .build()
        .await
        .unwrap();
    let db = context.db.clone().unwrap();

    let app = router::router()
        .layer(router::cors_layer())
        .with_state(AppState::new(db));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        client: ApiClient::new(&format!("http://{}", addr)).unwrap(),
        _context: context,
    }
}

fn assert_status(result: Result<impl std::fmt::Debug, ApiError>, status: u16) -> ApiError {
    match result {
        Err(err) => {
            assert_eq!(err.status, status, "unexpected error: {}", err.message);
            err
        }
        Ok(value) => panic!("expected status {}, got success: {:?}", status, value),
    }
}

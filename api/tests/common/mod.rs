use std::sync::Arc;

use axum_test::TestServer;
use heuksal_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs, ServerArgs, UsdaArgs},
};

/// Nothing listens on the discard port, so every USDA call fails fast.
pub const UNREACHABLE_USDA: &str = "http://127.0.0.1:9/fdc/v1";

pub fn test_args(root_path: &str) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: root_path.to_string(),
            allowed_origins: vec!["*".to_string()],
        },
        usda: UsdaArgs {
            api_key: "DEMO_KEY".to_string(),
            base_url: UNREACHABLE_USDA.to_string(),
            timeout_secs: 2,
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

pub fn test_server(root_path: &str) -> TestServer {
    let state = state(Arc::new(test_args(root_path))).expect("failed to build app state");
    let router = router(state).expect("failed to build router");
    TestServer::new(router).expect("failed to start test server")
}

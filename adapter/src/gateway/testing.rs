use axum::Router;
use shared::config::GatewayConfig;

use super::GatewayClient;

pub(crate) async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fixture");
    });
    format!("http://{addr}")
}

pub(crate) fn client_at(base_url: &str) -> GatewayClient {
    GatewayClient::new(&GatewayConfig {
        base_url: base_url.to_string(),
        legacy_base_url: format!("{base_url}/api"),
        with_credentials: true,
    })
    .expect("gateway client")
}

pub(crate) async fn client_for(router: Router) -> GatewayClient {
    client_at(&spawn(router).await)
}

/// A client pointed at the discard port, where nothing listens.
pub(crate) fn unreachable_client() -> GatewayClient {
    client_at("http://127.0.0.1:9")
}

//! 추정기를 HTTP로 노출하는 axum 라우터와 서버.

pub mod handlers;
pub mod models;
pub mod routes;

use tokio::net::TcpListener;
use tracing::info;

pub use routes::{create_router, AppState};

/// 주어진 주소에서 서버를 실행한다. Ctrl-C 를 받으면 정상 종료한다.
pub async fn serve(bind: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

//! HTTP server
//!
//! ## 使用示例
//! ```rust,ignore
//! let store = Arc::new(WorkbookFileStore::new("roster.json", DEFAULT_SHEET_NAME));
//! let use_case = CheckAccessUseCase::new(LookupService::new(store));
//! HttpServer::new(addr, use_case).run().await?;
//! ```

use super::routes::create_router;
use super::state::AppState;
use crate::application::CheckAccessUseCase;
use crate::domain::admission::RecordStore;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 入场权利查询服务器
pub struct HttpServer<S: RecordStore> {
    addr: SocketAddr,
    state: AppState<S>,
}

impl<S: RecordStore + 'static> HttpServer<S> {
    pub fn new(addr: SocketAddr, use_case: CheckAccessUseCase<S>) -> Self {
        Self {
            addr,
            state: AppState::new(use_case),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        self.run_on(listener).await
    }

    /// Serves on an already bound listener (tests bind to port 0).
    pub async fn run_on(self, listener: TcpListener) -> std::io::Result<()> {
        let local_addr = listener.local_addr()?;
        info!("服务器启动于 {}", local_addr);
        info!("查询端点: http://{}/?campfireId=...", local_addr);
        info!("健康检查端点: http://{}/health", local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号，停止服务");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LookupService;
    use crate::infrastructure::store::MemoryRecordStore;
    use std::sync::Arc;

    #[test]
    fn test_server_creation() {
        let store = Arc::new(MemoryRecordStore::new("roster", vec![]));
        let use_case = CheckAccessUseCase::new(LookupService::new(store));
        let server = HttpServer::new(SocketAddr::from(([127, 0, 0, 1], 8080)), use_case);
        assert_eq!(server.addr().port(), 8080);
    }
}

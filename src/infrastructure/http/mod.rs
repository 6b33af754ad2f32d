/// HTTP surface
///
/// - `routes`: both access-check entry points, health and metrics, CORS
/// - `server`: listener and graceful shutdown
/// - `state`: shared handler state

pub mod routes;
pub mod server;
pub mod state;

pub use routes::{cors_layer, create_router};
pub use server::HttpServer;
pub use state::AppState;

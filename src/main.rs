/// Main entry point for the access-check service
///
/// This serves as a thin wrapper that delegates to the interfaces layer.
/// The actual application logic is implemented in `interfaces::cli`.

use admission_check::interfaces::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}

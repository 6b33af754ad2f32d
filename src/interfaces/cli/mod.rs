/// CLI Interface Module
///
/// Command-line entry point for the access-check service.
///
/// ## Commands
/// - `serve`: start the HTTP server
/// - `lookup <ID>`: search the roster locally and print the decision
/// - `inspect`: print the roster sheet structure
/// - `check <ID>`: run the access client against a deployed endpoint

use crate::application::{envelope_for, CheckAccessUseCase, LookupError, LookupService};
use crate::domain::admission::StoreError;
use crate::infrastructure::http::HttpServer;
use crate::infrastructure::store::{WorkbookFileStore, DEFAULT_SHEET_NAME};
use crate::interfaces::client::{AccessClient, ClientConfig, RequestMethod};
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

/// 命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "admission-check")]
#[command(version)]
#[command(about = "ライブ入場権利確認サービス", long_about = None)]
pub struct CliConfig {
    /// 名单文件（JSON workbook）
    #[arg(short = 's', long, global = true, default_value = "roster.json")]
    pub store: PathBuf,

    /// 读取的表名
    #[arg(long, global = true, default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short = 'l', long, global = true, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 启动 HTTP 服务
    Serve {
        /// 监听地址
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// 监听端口
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// 仅显示配置不启动服务器
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },

    /// 在本地名单中查询一个ID
    Lookup { identifier: String },

    /// 显示名单表结构（表头、首行、行列数）
    Inspect,

    /// 通过 HTTP 向已部署的服务查询
    Check {
        identifier: String,

        /// 服务地址
        #[arg(long, conflicts_with = "config")]
        endpoint_url: Option<String>,

        /// 客户端配置文件 (`{"endpointUrl": ...}`)
        #[arg(long)]
        config: Option<PathBuf>,

        /// 请求方式（仅与 --endpoint-url 一起使用）
        #[arg(long, value_enum, default_value_t = RequestMethod::Get)]
        method: RequestMethod,
    },
}

/// Runs the CLI application
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    tracing::debug!("配置: {:?}", config);

    let store = Arc::new(WorkbookFileStore::new(&config.store, &config.sheet));
    let service = LookupService::new(store);

    match config.command.clone() {
        Command::Serve {
            host,
            port,
            dry_run,
        } => serve(&config, service, SocketAddr::new(host, port), dry_run).await,
        Command::Lookup { identifier } => lookup(&service, &identifier).await,
        Command::Inspect => inspect(&service).await,
        Command::Check {
            identifier,
            endpoint_url,
            config: config_path,
            method,
        } => {
            let client_config = match (endpoint_url, config_path) {
                (Some(url), _) => ClientConfig::new(url).with_method(method),
                (None, Some(path)) => ClientConfig::load(&path)?,
                (None, None) => ClientConfig::new(""),
            };
            check(client_config, &identifier).await
        }
    }
}

async fn serve(
    config: &CliConfig,
    service: LookupService<WorkbookFileStore>,
    addr: SocketAddr,
    dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("========================================");
    println!("  ライブ入場権利確認サービス v{}", env!("CARGO_PKG_VERSION"));
    println!("========================================");
    println!("监听地址:     {}", addr);
    println!("名单文件:     {}", config.store.display());
    println!("表名:         {}", config.sheet);
    println!("日志级别:     {}", config.log_level);
    println!("========================================");

    if dry_run {
        println!("\nDry-run 模式 - 不启动服务器");
        return Ok(());
    }

    // 启动时读一次名单，只记录结果，不阻止启动
    match service.inspect().await {
        Ok(structure) => tracing::info!(
            sheet = %structure.sheet,
            rows = structure.row_count,
            "roster reachable"
        ),
        Err(e) => tracing::warn!(error = %e, "roster not reachable at startup"),
    }

    let use_case = CheckAccessUseCase::new(service);
    HttpServer::new(addr, use_case).run().await?;
    Ok(())
}

async fn lookup(
    service: &LookupService<WorkbookFileStore>,
    identifier: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Testing with ID: {}", identifier);

    let decision = service.lookup(identifier).await?;
    println!("{}", serde_json::to_string_pretty(&decision)?);
    println!("{}", serde_json::to_string_pretty(&envelope_for(decision))?);
    Ok(())
}

async fn inspect(
    service: &LookupService<WorkbookFileStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    match service.inspect().await {
        Ok(structure) => {
            println!("Sheet found: {}", structure.sheet);
            println!("Number of rows: {}", structure.row_count);
            println!("Number of columns: {}", structure.column_count);
            if let Some(header) = &structure.header {
                println!("Header row: {}", serde_json::to_string(header)?);
            }
            if let Some(first) = &structure.first_data_row {
                println!("First data row: {}", serde_json::to_string(first)?);
            }
            Ok(())
        }
        Err(LookupError::StoreUnavailable(StoreError::SheetNotFound { sheet, available })) => {
            println!("Sheet \"{}\" not found", sheet);
            println!("Available sheets: {}", available.join(", "));
            Err(format!("sheet not found: {}", sheet).into())
        }
        Err(e) => Err(e.into()),
    }
}

async fn check(config: ClientConfig, identifier: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = AccessClient::new(config)?;

    match client.check(identifier).await {
        Ok(screen) => {
            println!("{}", screen.render());
            Ok(())
        }
        Err(e) => {
            println!("{}", e.user_message());
            Err(e.into())
        }
    }
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

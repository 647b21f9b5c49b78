use clap::Parser;
use cognitive_journal::utils::error::{ErrorSeverity, JournalError};
use cognitive_journal::utils::{logger, validation::Validate};
use cognitive_journal::{CliConfig, JournalServer, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_server_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting journal-server v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入配置：檔案 -> 環境變數 / 命令列
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📄 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => exit_with(e),
            }
        }
        None => TomlConfig::default(),
    };
    config.apply_overrides(&cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(e);
    }

    let server = match JournalServer::from_config(&config).await {
        Ok(server) => server,
        Err(e) => exit_with(e),
    };

    if let Err(e) = server.run().await {
        exit_with(e);
    }
}

fn exit_with(e: JournalError) -> ! {
    tracing::error!(
        "❌ journal-server failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

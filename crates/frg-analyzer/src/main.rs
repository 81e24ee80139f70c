use std::path::{Path, PathBuf};

use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use frg_analyzer::FrgLanguageServer;

const LOG_FILE_NAME: &str = "frg-analyzer.log";

#[derive(Parser, Debug)]
#[command(name = "frg-analyzer", version, about)]
struct Args {
    /// Debug-level logs for both the log file and stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Log file path. Defaults to `~/.frg-analyzer/frg-analyzer.log`.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// `~/.frg-analyzer`, or the system temp dir when it cannot be created.
fn default_log_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".frg-analyzer");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

/// Install the file and stderr layers. stdout is reserved for the protocol.
fn init_tracing(
    verbose: bool,
    log_path: &Path,
) {
    let (file_directives, stderr_directives) = if verbose {
        ("frg_analyzer=debug,tower_lsp=info", "frg_analyzer=debug,tower_lsp=debug")
    } else {
        ("frg_analyzer=info,tower_lsp=warn", "frg_analyzer=info,tower_lsp=warn")
    };

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new(LOG_FILE_NAME)),
    );

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(file_directives));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(stderr_directives));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let log_path = args.log_file.unwrap_or_else(|| default_log_dir().join(LOG_FILE_NAME));
    init_tracing(args.verbose, &log_path);

    info!("Starting frg-analyzer v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let (service, socket) = LspService::new(FrgLanguageServer::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket).serve(service).await;

    info!("frg-analyzer stopped");
}

//! WebServer entry point

use clap::Parser;
use std::net::SocketAddr;

use generator::{GeneratorConfig, TitleGenerator, XlsxTitleExporter};
use shared::{logging, Component};
use webserver::{WebServer, WebServerError, WebServerResult};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "SearchBoost AI - SEO blog title generator")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server (browser connections)
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Static files directory
    #[arg(long, default_value = "./webserver/static")]
    static_dir: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    logging::init_tracing(Component::WebServer, Some(&args.log_level))?;

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid address: {}", e)))?;

    let config = GeneratorConfig::from_env()?;
    if config.has_api_key() {
        logging::log_success(Component::WebServer, "Using GEMINI_API_KEY as fallback credential");
    } else {
        tracing::warn!("GEMINI_API_KEY not set; requests must supply their own key");
    }

    let title_generator = TitleGenerator::from_config(&config);
    let webserver = WebServer::new(
        http_addr,
        args.static_dir,
        title_generator,
        XlsxTitleExporter::new(),
        config.has_api_key(),
    );

    webserver.run().await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}

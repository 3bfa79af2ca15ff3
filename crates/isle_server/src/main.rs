use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use isle_net::connection::DEFAULT_SERVER_ADDR;
use isle_net::{ServerConfig, bind, serve};

#[derive(Parser, Debug)]
#[command(name = "isle_server", about = "Liveness server for isle clients")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = DEFAULT_SERVER_ADDR)]
    addr: String,

    /// Seconds without data before a client is dropped
    #[arg(long, default_value_t = 60)]
    idle_timeout: u64,

    /// Largest chunk read from a client at once, in bytes
    #[arg(long, default_value_t = 4096)]
    max_message_size: usize,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_idle_timeout(Duration::from_secs(self.idle_timeout))
            .with_max_message_size(self.max_message_size)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("isle_server=info".parse()?)
                .add_directive("isle_net=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let listener = bind(&args.addr).await?;

    serve(listener, args.server_config(), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    })
    .await?;

    info!("isle server shut down");
    Ok(())
}

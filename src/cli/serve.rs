//! `--serve-uploads [ADDR]`: run the upload server in the foreground.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::net::SocketAddr;

use crate::config::AppConfig;
use crate::upload::start_upload_server_on;

/// Resolve the bind address: the flag value if given, else the configured one.
pub fn resolve_addr(flag: Option<&str>, config: &AppConfig) -> Result<SocketAddr> {
    match flag {
        Some(raw) => raw
            .parse()
            .wrap_err_with(|| format!("invalid address '{}'", raw)),
        None => Ok(config.upload_addr),
    }
}

/// Serve uploads until Ctrl+C.
pub fn handle_serve_uploads(flag: Option<&str>, config: &AppConfig) -> Result<()> {
    let addr = resolve_addr(flag, config)?;
    let dir = config.upload_dir();
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async move {
        let (handle, bound) = start_upload_server_on(addr, dir.clone()).await?;
        println!("Serving uploads on http://{} from {}", bound, dir.display());
        println!("Press Ctrl+C to stop.");

        tokio::signal::ctrl_c().await?;
        handle.abort();
        tracing::info!("upload server stopped");
        Ok::<(), color_eyre::Report>(())
    })
}

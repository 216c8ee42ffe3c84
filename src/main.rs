use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // 默认输出debug日志，可通过 RUST_LOG 调整
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = AppConfig::load()?;

    let pool = database::initialize_database(&config).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到关闭信号");
            let _ = shutdown_tx.send(true);
        }
    });

    web_service::start_web_service(pool.clone(), config, shutdown_rx).await?;

    pool.close().await;
    info!("👋 服务已退出");

    Ok(())
}

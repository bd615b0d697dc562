use order_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 必须在读取配置之前加载
    dotenv::dotenv().ok();

    let config = Config::from_env();
    setup_environment(&config)?;

    tracing::info!(
        environment = %config.environment,
        app_name = %config.app_name,
        "Food order server starting..."
    );

    let server = Server::new(config);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

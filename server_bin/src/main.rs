use api::proxy::ProxyConfig;
use api::proxy::UniRateClient;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO)?;

    let config = ProxyConfig::from_env()?;
    match config.api_key.as_ref() {
        Some(key) => info!("UniRate API key loaded ({} chars)", key.len()),
        None => warn!("UNIRATE_API_KEY is not set; every endpoint will report an error"),
    }

    let app = api::proxy::router(UniRateClient::new(&config)?);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

use dotenvy::dotenv;
use tracing::{error, info};

use hireboard::hireboard_config::ServerConfig;
use hireboard::logging::init_tracing;
use hireboard::metrics::{init_metrics, metrics_app};
use hireboard::router::init_router;
use hireboard::state::init_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();

    match init_metrics() {
        Ok(Some(handle)) => {
            let metrics_addr = server_config.metrics_addr();
            let listener = tokio::net::TcpListener::bind(&metrics_addr).await?;
            info!("Metrics available at http://{metrics_addr}/metrics");
            tokio::spawn(async move {
                if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                    error!(error = %e, "Metrics server stopped");
                }
            });
        }
        Ok(None) => info!("Observability disabled, metrics server not started"),
        Err(e) => error!(error = %e, "Failed to install the Prometheus recorder"),
    }

    let state = init_app_state().await?;
    let app = init_router(state);

    let addr = server_config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{addr}");
    info!("Swagger UI available at http://{addr}/swagger-ui");
    info!("Scalar UI available at http://{addr}/scalar");

    axum::serve(listener, app).await?;
    Ok(())
}

use tracing::info;
use tracing_subscriber::FmtSubscriber;

use budgeteer_functions::{app, config::Config, errors::Result, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing::subscriber::set_global_default(FmtSubscriber::default()).unwrap();

    let config = Config::load();
    let port = config.port;
    let state = AppState::init(config);

    info!("Starting function server");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("Serving functions at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

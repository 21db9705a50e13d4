use hello_agent::{error::ServeError, run, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<(), ServeError> {
    dotenvy::dotenv().ok();
    init_tracing();

    run().await.inspect_err(|e| tracing::error!(error = %e, "Server failed"))
}

#[tokio::main]
async fn main() {
    if let Err(err) = om_api::run().await {
        tracing::error!(error = %err, "om-api failed");
        std::process::exit(1);
    }
}

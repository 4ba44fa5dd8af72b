#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logsift_web::start_server().await
}

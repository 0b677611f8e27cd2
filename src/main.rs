#[tokio::main]
async fn main() -> anyhow::Result<()> {
    filmlog::run().await
}

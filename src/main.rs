#[tokio::main]
async fn main() {
    if let Err(e) = webtour::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}

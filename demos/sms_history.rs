use std::io;

use possinote::{HistoryParams, Possinote, PossinoteClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("POSSINOTE_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSSINOTE_API_KEY environment variable is required",
        )
    })?;

    let mut builder = PossinoteClient::builder(api_key);
    if let Ok(base_url) = std::env::var("POSSINOTE_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = Possinote::from_client(builder.build()?);

    let params = HistoryParams {
        status: std::env::var("POSSINOTE_STATUS").ok(),
        ..HistoryParams::page(1, 20)
    };
    let response = client.sms.history(Some(&params)).await?;
    println!("success: {}, data: {}", response.success, response.data);

    Ok(())
}

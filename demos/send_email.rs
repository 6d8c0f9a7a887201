use std::io;

use possinote::Possinote;

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
    let recipient = std::env::var("POSSINOTE_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSSINOTE_EMAIL environment variable is required",
        )
    })?;
    let sender_name = std::env::var("POSSINOTE_SENDER_NAME").ok();

    let client = Possinote::new(api_key);
    let response = client
        .email
        .send(
            recipient,
            "Hello",
            "Sent by the possinote demo.",
            sender_name.as_deref(),
        )
        .await?;
    println!("success: {}, data: {}", response.success, response.data);

    Ok(())
}

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
    let phone = std::env::var("POSSINOTE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSSINOTE_PHONE environment variable is required",
        )
    })?;
    let sender_id = std::env::var("POSSINOTE_SENDER_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSSINOTE_SENDER_ID environment variable is required",
        )
    })?;
    let message = std::env::var("POSSINOTE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the possinote demo.".to_owned());

    let client = Possinote::new(api_key);
    let response = client.sms.send(phone, message, sender_id).await?;
    println!("success: {}, data: {}", response.success, response.data);

    Ok(())
}

use std::io;

use possinote::{Possinote, PossinoteError};

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
    let scheduled_at = std::env::var("POSSINOTE_SCHEDULED_AT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "POSSINOTE_SCHEDULED_AT environment variable is required (e.g. 2026-01-01T09:00:00Z)",
        )
    })?;

    let client = Possinote::new(api_key);
    let result = client
        .scheduling
        .schedule_email(
            recipient,
            "Reminder",
            "Scheduled by the possinote demo.",
            scheduled_at,
            None,
        )
        .await;

    match result {
        Ok(response) => println!("success: {}, data: {}", response.success, response.data),
        Err(PossinoteError::Validation { message, .. }) => {
            eprintln!("the API rejected the request: {message}");
        }
        Err(PossinoteError::PaymentRequired { message, .. }) => {
            eprintln!("account needs credits: {message}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

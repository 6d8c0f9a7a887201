//! Service layer: one type per API area, plus the [`Possinote`] entry point bundling them.

mod email;
mod scheduling;
mod sms;

pub use email::Email;
pub use scheduling::Scheduling;
pub use sms::Sms;

use crate::client::PossinoteClient;
use crate::domain::ApiKey;

#[derive(Debug, Clone)]
/// Entry point for the PossiNote API.
///
/// All three services share one [`PossinoteClient`], so they use the same API key and
/// connection pool.
pub struct Possinote {
    pub sms: Sms,
    pub email: Email,
    pub scheduling: Scheduling,
}

impl Possinote {
    /// Create the services for the production API with `api_key`.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self::from_client(PossinoteClient::new(api_key))
    }

    /// Create the services on top of an already configured client.
    pub fn from_client(client: PossinoteClient) -> Self {
        Self {
            sms: Sms::new(client.clone()),
            email: Email::new(client.clone()),
            scheduling: Scheduling::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;

    #[tokio::test]
    async fn services_share_one_transport_and_key() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":[]}"#);
        let possinote =
            Possinote::from_client(PossinoteClient::with_transport("shared", transport.clone()));

        possinote.sms.history(None).await.unwrap();
        possinote.email.history(None).await.unwrap();
        possinote.scheduling.scheduled_emails(None).await.unwrap();

        assert_eq!(transport.request_count(), 3);
        assert_eq!(
            transport.last_request().unwrap().authorization,
            "Bearer shared"
        );
    }

    #[test]
    fn new_targets_production_api() {
        let possinote = Possinote::new("key");
        let rendered = format!("{possinote:?}");
        assert!(rendered.contains(crate::client::DEFAULT_BASE_URL));
        assert!(!rendered.contains("Bearer"));
    }
}

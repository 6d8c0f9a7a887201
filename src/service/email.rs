use crate::client::{PossinoteClient, PossinoteError};
use crate::domain::{ApiResponse, HistoryParams, SendBulkEmail, SendEmail};
use crate::transport;

const SEND_PATH: &str = "/emails/send";
const BULK_PATH: &str = "/emails/bulk";
const HISTORY_PATH: &str = "/emails/history";

#[derive(Debug, Clone)]
/// Email endpoints for immediate sends and history.
pub struct Email {
    client: PossinoteClient,
}

impl Email {
    pub fn new(client: PossinoteClient) -> Self {
        Self { client }
    }

    /// Send one email now. `sender_name` is left out of the request when `None` or empty.
    pub async fn send(
        &self,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        sender_name: Option<&str>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = SendEmail {
            recipient: recipient.into(),
            subject: subject.into(),
            content: content.into(),
            sender_name: sender_name.map(str::to_owned),
        };
        self.client
            .post(SEND_PATH, &transport::encode_send_email(&request))
            .await
    }

    /// Send the same email to every address in `recipients`.
    pub async fn send_bulk(
        &self,
        subject: impl Into<String>,
        content: impl Into<String>,
        recipients: Vec<String>,
        sender_name: Option<&str>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = SendBulkEmail {
            subject: subject.into(),
            content: content.into(),
            recipients,
            sender_name: sender_name.map(str::to_owned),
        };
        self.client
            .post(BULK_PATH, &transport::encode_send_bulk_email(&request))
            .await
    }

    /// List sent emails.
    pub async fn history(
        &self,
        params: Option<&HistoryParams>,
    ) -> Result<ApiResponse, PossinoteError> {
        let query = params.map(transport::encode_history_query).unwrap_or_default();
        self.client.get(HISTORY_PATH, &query).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::client::fake::FakeTransport;

    fn make_email(transport: FakeTransport) -> Email {
        Email::new(PossinoteClient::with_transport("test_key", transport))
    }

    #[tokio::test]
    async fn send_without_sender_name_omits_the_key() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{"id":"e1"}}"#);
        let email = make_email(transport.clone());

        email.send("a@b.com", "Hi", "Body", None).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/api/v1/emails/send");
        assert_eq!(
            request.body,
            Some(json!({ "recipient": "a@b.com", "subject": "Hi", "content": "Body" }))
        );
    }

    #[tokio::test]
    async fn send_with_sender_name_includes_it() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{}}"#);
        let email = make_email(transport.clone());

        email
            .send("a@b.com", "Hi", "Body", Some("ACME Support"))
            .await
            .unwrap();

        let body = transport.last_request().unwrap().body.unwrap();
        assert_eq!(body["sender_name"], "ACME Support");
    }

    #[tokio::test]
    async fn send_bulk_posts_recipients_list() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{}}"#);
        let email = make_email(transport.clone());

        email
            .send_bulk(
                "News",
                "Body",
                vec!["a@b.com".to_owned(), "c@d.com".to_owned()],
                None,
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v1/emails/bulk");
        assert_eq!(
            request.body,
            Some(json!({
                "subject": "News",
                "content": "Body",
                "recipients": ["a@b.com", "c@d.com"]
            }))
        );
    }

    #[tokio::test]
    async fn history_hits_email_history() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":[]}"#);
        let email = make_email(transport.clone());

        email.history(Some(&HistoryParams::page(3, 10))).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.path(), "/api/v1/emails/history");
        assert_eq!(request.query.len(), 2);
    }

    #[tokio::test]
    async fn validation_error_carries_remote_message() {
        let email = make_email(FakeTransport::new(400, r#"{"error":"Invalid recipient"}"#));

        let err = email.send("nope", "Hi", "Body", None).await.unwrap_err();
        assert!(matches!(err, PossinoteError::Validation { .. }));
        assert_eq!(err.message(), "Invalid recipient");
    }
}

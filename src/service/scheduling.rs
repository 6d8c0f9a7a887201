use crate::client::{PossinoteClient, PossinoteError};
use crate::domain::{ApiResponse, HistoryParams, ScheduleBulkEmail, ScheduleEmail};
use crate::transport;

const SCHEDULE_PATH: &str = "/emails/schedule";
const SCHEDULE_BULK_PATH: &str = "/emails/schedule-bulk";
const SCHEDULE_INDIVIDUAL_PATH: &str = "/emails/schedule-bulk-individual";
const SCHEDULED_PATH: &str = "/emails/scheduled";

#[derive(Debug, Clone)]
/// Scheduled email endpoints.
///
/// `scheduled_at` values are forwarded as given; the remote API decides which formats it
/// accepts.
pub struct Scheduling {
    client: PossinoteClient,
}

impl Scheduling {
    pub fn new(client: PossinoteClient) -> Self {
        Self { client }
    }

    /// Schedule one email.
    pub async fn schedule_email(
        &self,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        scheduled_at: impl Into<String>,
        sender_name: Option<&str>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = ScheduleEmail {
            recipient: recipient.into(),
            subject: subject.into(),
            content: content.into(),
            scheduled_at: scheduled_at.into(),
            sender_name: sender_name.map(str::to_owned),
        };
        self.client
            .post(SCHEDULE_PATH, &transport::encode_schedule_email(&request))
            .await
    }

    /// Schedule the same email for every address in `recipients`.
    pub async fn schedule_bulk_emails(
        &self,
        subject: impl Into<String>,
        content: impl Into<String>,
        recipients: Vec<String>,
        scheduled_at: impl Into<String>,
        sender_name: Option<&str>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = ScheduleBulkEmail {
            subject: subject.into(),
            content: content.into(),
            recipients,
            scheduled_at: scheduled_at.into(),
            sender_name: sender_name.map(str::to_owned),
        };
        self.client
            .post(
                SCHEDULE_BULK_PATH,
                &transport::encode_schedule_bulk_email(&request),
            )
            .await
    }

    /// Schedule several independent emails in one call, each with its own content and time.
    pub async fn schedule_multiple_emails(
        &self,
        emails: &[ScheduleEmail],
    ) -> Result<ApiResponse, PossinoteError> {
        self.client
            .post(
                SCHEDULE_INDIVIDUAL_PATH,
                &transport::encode_schedule_multiple_emails(emails),
            )
            .await
    }

    /// List emails that are scheduled but not sent yet.
    pub async fn scheduled_emails(
        &self,
        params: Option<&HistoryParams>,
    ) -> Result<ApiResponse, PossinoteError> {
        let query = params.map(transport::encode_history_query).unwrap_or_default();
        self.client.get(SCHEDULED_PATH, &query).await
    }

    /// Cancel a scheduled email by id.
    pub async fn cancel_scheduled_email(
        &self,
        email_id: &str,
    ) -> Result<ApiResponse, PossinoteError> {
        self.client.delete_resource(SCHEDULED_PATH, email_id).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::client::fake::FakeTransport;

    fn make_scheduling(transport: FakeTransport) -> Scheduling {
        Scheduling::new(PossinoteClient::with_transport("test_key", transport))
    }

    #[tokio::test]
    async fn schedule_email_nests_payload_and_omits_sender_name() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{"id":"s1"}}"#);
        let scheduling = make_scheduling(transport.clone());

        scheduling
            .schedule_email("a@b.com", "Hi", "Body", "2026-01-01T09:00:00Z", None)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/api/v1/emails/schedule");
        assert_eq!(
            request.body,
            Some(json!({
                "scheduled_email": {
                    "recipient": "a@b.com",
                    "subject": "Hi",
                    "content": "Body",
                    "scheduled_at": "2026-01-01T09:00:00Z"
                }
            }))
        );
    }

    #[tokio::test]
    async fn schedule_bulk_emails_posts_bulk_scheduled_email() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{}}"#);
        let scheduling = make_scheduling(transport.clone());

        scheduling
            .schedule_bulk_emails(
                "News",
                "Body",
                vec!["a@b.com".to_owned()],
                "2026-01-01T09:00:00Z",
                Some("ACME"),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v1/emails/schedule-bulk");
        let body = request.body.unwrap();
        assert_eq!(body["bulk_scheduled_email"]["sender_name"], "ACME");
        assert_eq!(body["bulk_scheduled_email"]["recipients"], json!(["a@b.com"]));
    }

    #[tokio::test]
    async fn schedule_multiple_emails_posts_emails_array() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":{}}"#);
        let scheduling = make_scheduling(transport.clone());

        let emails = vec![
            ScheduleEmail::new("a@b.com", "One", "First", "2026-01-01T09:00:00Z"),
            ScheduleEmail::new("c@d.com", "Two", "Second", "2026-01-02T09:00:00Z")
                .sender_name("ACME"),
        ];
        scheduling.schedule_multiple_emails(&emails).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url.path(),
            "/api/v1/emails/schedule-bulk-individual"
        );
        let body = request.body.unwrap();
        assert_eq!(body["emails"].as_array().map(Vec::len), Some(2));
        assert!(body["emails"][0].get("sender_name").is_none());
        assert_eq!(body["emails"][1]["sender_name"], "ACME");
    }

    #[tokio::test]
    async fn scheduled_emails_and_cancel_use_scheduled_path() {
        let transport = FakeTransport::new(200, r#"{"success":true,"data":[]}"#);
        let scheduling = make_scheduling(transport.clone());

        scheduling.scheduled_emails(None).await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.path(), "/api/v1/emails/scheduled");

        scheduling.cancel_scheduled_email("em_7").await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/api/v1/emails/scheduled/em_7");
    }

    #[tokio::test]
    async fn cancel_accepts_no_content() {
        let scheduling = make_scheduling(FakeTransport::new(204, ""));

        let response = scheduling.cancel_scheduled_email("em_7").await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn cancel_escapes_slashes_and_rejects_empty_ids() {
        let transport = FakeTransport::new(200, r#"{"success":true}"#);
        let scheduling = make_scheduling(transport.clone());

        scheduling.cancel_scheduled_email("em/7").await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v1/emails/scheduled/em%2F7");

        let err = scheduling.cancel_scheduled_email("").await.unwrap_err();
        assert!(matches!(err, PossinoteError::Api { status: None, .. }));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn rate_limit_surfaces_as_error() {
        let scheduling = make_scheduling(FakeTransport::new(429, "{}"));

        let err = scheduling.scheduled_emails(None).await.unwrap_err();
        assert!(matches!(err, PossinoteError::RateLimit { .. }));
        assert_eq!(err.code(), Some(429));
    }
}

use crate::client::{PossinoteClient, PossinoteError};
use crate::domain::{
    ApiResponse, BulkSmsMessage, HistoryParams, ScheduleBulkSms, ScheduleSms, SendBulkSms,
    SendSms,
};
use crate::transport;

const SEND_PATH: &str = "/sms/send";
const BULK_PATH: &str = "/sms/bulk";
const SCHEDULE_PATH: &str = "/sms/schedule";
const SCHEDULE_BULK_PATH: &str = "/sms/schedule-bulk";
const HISTORY_PATH: &str = "/sms/history";
const SCHEDULED_PATH: &str = "/sms/scheduled";

#[derive(Debug, Clone)]
/// SMS endpoints: immediate and scheduled sends, history, scheduled-message management.
pub struct Sms {
    client: PossinoteClient,
}

impl Sms {
    pub fn new(client: PossinoteClient) -> Self {
        Self { client }
    }

    /// Send one SMS now.
    pub async fn send(
        &self,
        to: impl Into<String>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = SendSms {
            to: to.into(),
            message: message.into(),
            sender_id: sender_id.into(),
        };
        self.client
            .post(SEND_PATH, &transport::encode_send_sms(&request))
            .await
    }

    /// Send a batch of SMS, each with its own recipient and text, from one sender id.
    pub async fn send_bulk(
        &self,
        sender_id: impl Into<String>,
        messages: Vec<BulkSmsMessage>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = SendBulkSms {
            sender_id: sender_id.into(),
            messages,
        };
        self.client
            .post(BULK_PATH, &transport::encode_send_bulk_sms(&request))
            .await
    }

    /// Schedule one SMS for `scheduled_at` (passed through as given).
    pub async fn schedule(
        &self,
        recipient: impl Into<String>,
        message: impl Into<String>,
        sender_id: impl Into<String>,
        scheduled_at: impl Into<String>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = ScheduleSms {
            recipient: recipient.into(),
            message: message.into(),
            sender_id: sender_id.into(),
            scheduled_at: scheduled_at.into(),
        };
        self.client
            .post(SCHEDULE_PATH, &transport::encode_schedule_sms(&request))
            .await
    }

    /// Schedule a batch of SMS for the same send time.
    pub async fn schedule_bulk(
        &self,
        sender_id: impl Into<String>,
        messages: Vec<BulkSmsMessage>,
        scheduled_at: impl Into<String>,
    ) -> Result<ApiResponse, PossinoteError> {
        let request = ScheduleBulkSms {
            sender_id: sender_id.into(),
            messages,
            scheduled_at: scheduled_at.into(),
        };
        self.client
            .post(
                SCHEDULE_BULK_PATH,
                &transport::encode_schedule_bulk_sms(&request),
            )
            .await
    }

    /// List sent SMS.
    pub async fn history(
        &self,
        params: Option<&HistoryParams>,
    ) -> Result<ApiResponse, PossinoteError> {
        let query = params.map(transport::encode_history_query).unwrap_or_default();
        self.client.get(HISTORY_PATH, &query).await
    }

    /// List SMS that are scheduled but not sent yet.
    pub async fn scheduled(
        &self,
        params: Option<&HistoryParams>,
    ) -> Result<ApiResponse, PossinoteError> {
        let query = params.map(transport::encode_history_query).unwrap_or_default();
        self.client.get(SCHEDULED_PATH, &query).await
    }

    /// Cancel a scheduled SMS by id.
    pub async fn cancel_scheduled(&self, sms_id: &str) -> Result<ApiResponse, PossinoteError> {
        self.client.delete_resource(SCHEDULED_PATH, sms_id).await
    }
}

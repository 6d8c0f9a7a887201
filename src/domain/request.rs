//! Request payloads: one value per remote call, built and consumed within a single request.

/// Single SMS for `sms/send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSms {
    pub to: String,
    pub message: String,
    pub sender_id: String,
}

/// One recipient/text pair inside a bulk SMS batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSmsMessage {
    pub recipient: String,
    pub message: String,
}

impl BulkSmsMessage {
    pub fn new(recipient: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            message: message.into(),
        }
    }
}

/// Bulk SMS for `sms/bulk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBulkSms {
    pub sender_id: String,
    pub messages: Vec<BulkSmsMessage>,
}

/// Single scheduled SMS for `sms/schedule`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSms {
    pub recipient: String,
    pub message: String,
    pub sender_id: String,
    pub scheduled_at: String,
}

/// Bulk scheduled SMS for `sms/schedule-bulk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBulkSms {
    pub sender_id: String,
    pub messages: Vec<BulkSmsMessage>,
    pub scheduled_at: String,
}

/// Single email for `emails/send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub sender_name: Option<String>,
}

/// One email body delivered to many recipients (`emails/bulk`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBulkEmail {
    pub subject: String,
    pub content: String,
    pub recipients: Vec<String>,
    pub sender_name: Option<String>,
}

/// Single scheduled email.
///
/// Used both for `emails/schedule` and as an entry of
/// `emails/schedule-bulk-individual`, where every entry carries its own subject,
/// content and send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub scheduled_at: String,
    pub sender_name: Option<String>,
}

impl ScheduleEmail {
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        scheduled_at: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            content: content.into(),
            scheduled_at: scheduled_at.into(),
            sender_name: None,
        }
    }

    /// Set the display name used as the sender.
    pub fn sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }
}

/// One scheduled email body delivered to many recipients (`emails/schedule-bulk`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBulkEmail {
    pub subject: String,
    pub content: String,
    pub recipients: Vec<String>,
    pub scheduled_at: String,
    pub sender_name: Option<String>,
}

/// Filters for history and scheduled-message listings.
///
/// Every field is optional and forwarded verbatim as a query parameter; unset fields
/// are not sent. No validation happens locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub api_key_id: Option<String>,
    pub sender_id: Option<String>,
    pub phone: Option<String>,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
}

impl HistoryParams {
    /// Shorthand for page-only pagination.
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Self::default()
        }
    }
}

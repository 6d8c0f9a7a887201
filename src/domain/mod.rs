//! Domain layer: request shapes, query filters and the response envelope (no I/O).

mod request;
mod response;
mod value;

pub use request::{
    BulkSmsMessage, HistoryParams, ScheduleBulkEmail, ScheduleBulkSms, ScheduleEmail,
    ScheduleSms, SendBulkEmail, SendBulkSms, SendEmail, SendSms,
};
pub use response::ApiResponse;
pub use value::ApiKey;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_params_default_is_empty() {
        let params = HistoryParams::default();
        assert_eq!(params.page, None);
        assert_eq!(params.status, None);
        assert_eq!(params.min_cost, None);
    }

    #[test]
    fn history_params_page_shorthand_sets_only_pagination() {
        let params = HistoryParams::page(2, 50);
        assert_eq!(params.page, Some(2));
        assert_eq!(params.per_page, Some(50));
        assert_eq!(
            params,
            HistoryParams {
                page: Some(2),
                per_page: Some(50),
                ..HistoryParams::default()
            }
        );
    }

    #[test]
    fn schedule_email_builder_sets_sender_name() {
        let email = ScheduleEmail::new("a@b.com", "Hi", "Body", "2026-01-01T09:00:00Z");
        assert_eq!(email.sender_name, None);

        let email = email.sender_name("ACME");
        assert_eq!(email.sender_name.as_deref(), Some("ACME"));
        assert_eq!(email.scheduled_at, "2026-01-01T09:00:00Z");
    }

    #[test]
    fn bulk_sms_message_new_converts_inputs() {
        let entry = BulkSmsMessage::new("+15551234567", String::from("hello"));
        assert_eq!(entry.recipient, "+15551234567");
        assert_eq!(entry.message, "hello");
    }
}

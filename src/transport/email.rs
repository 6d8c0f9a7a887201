use serde::Serialize;

use crate::domain::{ScheduleBulkEmail, ScheduleEmail, SendBulkEmail, SendEmail};

#[derive(Debug, Serialize)]
pub struct SendEmailBody<'a> {
    recipient: &'a str,
    subject: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct SendBulkEmailBody<'a> {
    subject: &'a str,
    content: &'a str,
    recipients: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleEmailBody<'a> {
    scheduled_email: ScheduledEmailJson<'a>,
}

#[derive(Debug, Serialize)]
struct ScheduledEmailJson<'a> {
    recipient: &'a str,
    subject: &'a str,
    content: &'a str,
    scheduled_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleBulkEmailBody<'a> {
    bulk_scheduled_email: BulkScheduledEmailJson<'a>,
}

#[derive(Debug, Serialize)]
struct BulkScheduledEmailJson<'a> {
    subject: &'a str,
    content: &'a str,
    recipients: &'a [String],
    scheduled_at: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleMultipleEmailsBody<'a> {
    emails: Vec<ScheduledEmailJson<'a>>,
}

pub fn encode_send_email(request: &SendEmail) -> SendEmailBody<'_> {
    SendEmailBody {
        recipient: &request.recipient,
        subject: &request.subject,
        content: &request.content,
        sender_name: present(request.sender_name.as_deref()),
    }
}

pub fn encode_send_bulk_email(request: &SendBulkEmail) -> SendBulkEmailBody<'_> {
    SendBulkEmailBody {
        subject: &request.subject,
        content: &request.content,
        recipients: &request.recipients,
        sender_name: present(request.sender_name.as_deref()),
    }
}

pub fn encode_schedule_email(request: &ScheduleEmail) -> ScheduleEmailBody<'_> {
    ScheduleEmailBody {
        scheduled_email: scheduled_email_json(request),
    }
}

pub fn encode_schedule_bulk_email(request: &ScheduleBulkEmail) -> ScheduleBulkEmailBody<'_> {
    ScheduleBulkEmailBody {
        bulk_scheduled_email: BulkScheduledEmailJson {
            subject: &request.subject,
            content: &request.content,
            recipients: &request.recipients,
            scheduled_at: &request.scheduled_at,
            sender_name: present(request.sender_name.as_deref()),
        },
    }
}

pub fn encode_schedule_multiple_emails(emails: &[ScheduleEmail]) -> ScheduleMultipleEmailsBody<'_> {
    ScheduleMultipleEmailsBody {
        emails: emails.iter().map(scheduled_email_json).collect(),
    }
}

fn scheduled_email_json(request: &ScheduleEmail) -> ScheduledEmailJson<'_> {
    ScheduledEmailJson {
        recipient: &request.recipient,
        subject: &request.subject,
        content: &request.content,
        scheduled_at: &request.scheduled_at,
        sender_name: present(request.sender_name.as_deref()),
    }
}

// An empty sender name is sent the same way as a missing one: not at all.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

use serde::Serialize;

use crate::domain::{BulkSmsMessage, ScheduleBulkSms, ScheduleSms, SendBulkSms, SendSms};

#[derive(Debug, Serialize)]
pub struct SendSmsBody<'a> {
    sms: SmsJson<'a>,
}

#[derive(Debug, Serialize)]
struct SmsJson<'a> {
    to: &'a str,
    message: &'a str,
    sender_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendBulkSmsBody<'a> {
    bulk_sms: BulkSmsJson<'a>,
}

#[derive(Debug, Serialize)]
struct BulkSmsJson<'a> {
    sender_id: &'a str,
    messages: Vec<BulkSmsMessageJson<'a>>,
}

#[derive(Debug, Serialize)]
struct BulkSmsMessageJson<'a> {
    recipient: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ScheduleSmsBody<'a> {
    scheduled_sms: ScheduledSmsJson<'a>,
}

#[derive(Debug, Serialize)]
struct ScheduledSmsJson<'a> {
    recipient: &'a str,
    message: &'a str,
    sender_id: &'a str,
    scheduled_at: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ScheduleBulkSmsBody<'a> {
    bulk_scheduled_sms: BulkScheduledSmsJson<'a>,
}

#[derive(Debug, Serialize)]
struct BulkScheduledSmsJson<'a> {
    sender_id: &'a str,
    messages: Vec<BulkSmsMessageJson<'a>>,
    scheduled_at: &'a str,
}

pub fn encode_send_sms(request: &SendSms) -> SendSmsBody<'_> {
    SendSmsBody {
        sms: SmsJson {
            to: &request.to,
            message: &request.message,
            sender_id: &request.sender_id,
        },
    }
}

pub fn encode_send_bulk_sms(request: &SendBulkSms) -> SendBulkSmsBody<'_> {
    SendBulkSmsBody {
        bulk_sms: BulkSmsJson {
            sender_id: &request.sender_id,
            messages: encode_messages(&request.messages),
        },
    }
}

pub fn encode_schedule_sms(request: &ScheduleSms) -> ScheduleSmsBody<'_> {
    ScheduleSmsBody {
        scheduled_sms: ScheduledSmsJson {
            recipient: &request.recipient,
            message: &request.message,
            sender_id: &request.sender_id,
            scheduled_at: &request.scheduled_at,
        },
    }
}

pub fn encode_schedule_bulk_sms(request: &ScheduleBulkSms) -> ScheduleBulkSmsBody<'_> {
    ScheduleBulkSmsBody {
        bulk_scheduled_sms: BulkScheduledSmsJson {
            sender_id: &request.sender_id,
            messages: encode_messages(&request.messages),
            scheduled_at: &request.scheduled_at,
        },
    }
}

fn encode_messages(messages: &[BulkSmsMessage]) -> Vec<BulkSmsMessageJson<'_>> {
    messages
        .iter()
        .map(|entry| BulkSmsMessageJson {
            recipient: &entry.recipient,
            message: &entry.message,
        })
        .collect()
}

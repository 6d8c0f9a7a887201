//! Transport layer: JSON wire shapes for request bodies, query strings and responses.

mod email;
mod envelope;
mod query;
mod sms;

pub use email::{
    encode_schedule_bulk_email, encode_schedule_email, encode_schedule_multiple_emails,
    encode_send_bulk_email, encode_send_email,
};
pub use envelope::{decode_envelope, remote_error_message};
pub use query::encode_history_query;
pub use sms::{encode_schedule_bulk_sms, encode_schedule_sms, encode_send_bulk_sms, encode_send_sms};

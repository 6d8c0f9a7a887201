use crate::domain::HistoryParams;

pub fn encode_history_query(params: &HistoryParams) -> Vec<(String, String)> {
    let mut query = Vec::<(String, String)>::new();

    push(&mut query, "page", params.page);
    push(&mut query, "per_page", params.per_page);
    push(&mut query, "status", params.status.as_deref());
    push(&mut query, "date_filter", params.date_filter.as_deref());
    push(&mut query, "start_date", params.start_date.as_deref());
    push(&mut query, "end_date", params.end_date.as_deref());
    push(&mut query, "api_key_id", params.api_key_id.as_deref());
    push(&mut query, "sender_id", params.sender_id.as_deref());
    push(&mut query, "phone", params.phone.as_deref());
    push(&mut query, "min_cost", params.min_cost);
    push(&mut query, "max_cost", params.max_cost);

    query
}

fn push<V: ToString>(query: &mut Vec<(String, String)>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        query.push((key.to_owned(), value.to_string()));
    }
}

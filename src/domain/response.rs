/// Uniform response envelope returned by every PossiNote endpoint.
///
/// `data` defaults to raw JSON; pass a concrete `T` to the client's request helpers to
/// decode it into your own type.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    pub data: T,
    pub error: Option<String>,
    pub message: Option<String>,
}

use tm_types::search::SearchResults;

use super::client::ApiClient;
use crate::error::ApiError;

/// Search destinations and packages. A blank query returns no results without a request.
pub async fn search(api: &ApiClient, query: &str) -> Result<SearchResults, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchResults::default());
    }
    api.get_json("/api/admin/search", &[("query", query.to_string())]).await
}

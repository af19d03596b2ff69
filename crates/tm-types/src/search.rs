//! Combined destination and package search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchHitKind {
    Destination,
    Package,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SearchHitKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub hotel_count: u32,
    #[serde(default)]
    pub restaurant_count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub destinations: Vec<SearchHit>,
    #[serde(default)]
    pub packages: Vec<SearchHit>,
    #[serde(default)]
    pub total_results: usize,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty() && self.packages.is_empty()
    }

    /// Number of matches, trusting the listed hits over a missing or stale total.
    pub fn count(&self) -> usize {
        self.total_results.max(self.destinations.len() + self.packages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_parse() {
        let results: SearchResults = serde_json::from_str(
            r#"{"destinations":[{"id":1,"name":"Lisbon","country":"Portugal","type":"destination","hotelCount":2,"restaurantCount":1}],
                "packages":[{"id":42,"name":"Lisbon Long Weekend","price":899.0,"type":"package"}],
                "totalResults":2}"#,
        )
        .unwrap();
        assert_eq!(results.destinations[0].kind, SearchHitKind::Destination);
        assert_eq!(results.destinations[0].hotel_count, 2);
        assert_eq!(results.packages[0].kind, SearchHitKind::Package);
        assert_eq!(results.packages[0].price, Some(899.0));
        assert!(!results.is_empty());
        assert!(SearchResults::default().is_empty());
    }

    #[test]
    fn test_count_without_total() {
        let results: SearchResults =
            serde_json::from_str(r#"{"packages":[{"id":42,"name":"Lisbon Long Weekend","type":"package"}]}"#).unwrap();
        assert_eq!(results.total_results, 0);
        assert_eq!(results.count(), 1);
    }
}

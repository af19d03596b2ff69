//! Travel packages published by agencies.

use serde::{Deserialize, Serialize};

use crate::catalog::{Hotel, Restaurant};

/// Packages store their destination inside the description as `Package to <destination>`.
const DESTINATION_PREFIX: &str = "Package to ";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPackage {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

impl TravelPackage {
    /// Destination recovered from the description, if it follows the usual format.
    pub fn destination(&self) -> Option<&str> {
        self.description
            .as_deref()
            .and_then(|d| d.strip_prefix(DESTINATION_PREFIX))
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Bookable package as listed in the public catalogue.
pub struct PackageSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelAgency {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
}

impl TravelAgency {
    pub fn display_name(&self) -> &str {
        self.travel_agency_name.as_deref().unwrap_or(&self.username)
    }
}

/// Package create/edit form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackageForm {
    pub package_name: String,
    pub destination: String,
    pub price: String,
    pub hotels: Vec<String>,
    pub restaurants: Vec<String>,
}

impl PackageForm {
    pub fn from_package(package: &TravelPackage) -> Self {
        Self {
            package_name: package.name.clone(),
            destination: package.destination().unwrap_or_default().to_string(),
            price: package.price.to_string(),
            hotels: package.hotels.iter().map(|h| h.name.clone()).collect(),
            restaurants: package.restaurants.iter().map(|r| r.name.clone()).collect(),
        }
    }

    /// Form fields for the package endpoints. Blank hotel and restaurant rows are dropped.
    pub fn form_fields(&self, username: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("packageName", self.package_name.trim().to_string()),
            ("destination", self.destination.trim().to_string()),
            ("price", self.price.trim().to_string()),
        ];
        fields.extend(non_blank(&self.restaurants).map(|r| ("restaurants", r)));
        fields.extend(non_blank(&self.hotels).map(|h| ("hotels", h)));
        fields.push(("username", username.to_string()));
        fields
    }
}

fn non_blank(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(description: Option<&str>) -> TravelPackage {
        TravelPackage {
            id: 42,
            name: "Lisbon Long Weekend".to_string(),
            description: description.map(str::to_string),
            price: 899.0,
            travel_agency_name: Some("Globetrotters".to_string()),
            hotels: vec![],
            restaurants: vec![],
        }
    }

    #[test]
    fn test_destination_from_description() {
        assert_eq!(package(Some("Package to Lisbon")).destination(), Some("Lisbon"));
        assert_eq!(package(Some("A custom description")).destination(), None);
        assert_eq!(package(Some("Package to ")).destination(), None);
        assert_eq!(package(None).destination(), None);
    }

    #[test]
    fn test_form_fields_skip_blank_rows() {
        let form = PackageForm {
            package_name: "Lisbon Long Weekend".to_string(),
            destination: "Lisbon".to_string(),
            price: "899".to_string(),
            hotels: vec!["Sea View".to_string(), "  ".to_string()],
            restaurants: vec![String::new(), "Tasca".to_string()],
        };

        let fields = form.form_fields("globetrotters");
        let hotels: Vec<_> = fields.iter().filter(|(k, _)| *k == "hotels").collect();
        let restaurants: Vec<_> = fields.iter().filter(|(k, _)| *k == "restaurants").collect();
        assert_eq!(hotels, vec![&("hotels", "Sea View".to_string())]);
        assert_eq!(restaurants, vec![&("restaurants", "Tasca".to_string())]);
        assert_eq!(fields.last(), Some(&("username", "globetrotters".to_string())));
    }

    #[test]
    fn test_agency_display_name_falls_back_to_username() {
        let agency = TravelAgency {
            id: 1,
            username: "globe".to_string(),
            travel_agency_name: None,
        };
        assert_eq!(agency.display_name(), "globe");
    }
}

//! Destinations, hotels and restaurants managed by administrators.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price_per_night: f64,
    #[serde(default)]
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub cuisine_type: String,
}

/// Destination create/update form. The admin endpoints take form fields, not JSON.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationForm {
    pub name: String,
    pub country: String,
    pub description: String,
}

impl DestinationForm {
    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            country: destination.country.clone(),
            description: destination.description.clone().unwrap_or_default(),
        }
    }

    pub fn form_fields(&self, username: &str) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_string()),
            ("country", self.country.trim().to_string()),
            ("description", self.description.trim().to_string()),
            ("username", username.to_string()),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelForm {
    pub name: String,
    pub location: String,
    pub price_per_night: String,
    pub address: String,
    /// Destination the hotel belongs to, if any.
    pub destination_id: Option<i64>,
}

impl HotelForm {
    pub fn from_hotel(hotel: &Hotel, destination_id: Option<i64>) -> Self {
        Self {
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            price_per_night: hotel.price_per_night.to_string(),
            address: hotel.address.clone(),
            destination_id,
        }
    }

    pub fn form_fields(&self, username: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.trim().to_string()),
            ("location", self.location.trim().to_string()),
            ("pricePerNight", self.price_per_night.trim().to_string()),
            ("address", self.address.trim().to_string()),
            ("username", username.to_string()),
        ];
        if let Some(id) = self.destination_id {
            fields.push(("destinationId", id.to_string()));
        }
        fields
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestaurantForm {
    pub name: String,
    pub location: String,
    pub address: String,
    pub cuisine: String,
    pub cuisine_type: String,
    pub destination_id: Option<i64>,
}

impl RestaurantForm {
    pub fn from_restaurant(restaurant: &Restaurant, destination_id: Option<i64>) -> Self {
        Self {
            name: restaurant.name.clone(),
            location: restaurant.location.clone(),
            address: restaurant.address.clone(),
            cuisine: restaurant.cuisine.clone(),
            cuisine_type: restaurant.cuisine_type.clone(),
            destination_id,
        }
    }

    pub fn form_fields(&self, username: &str) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.trim().to_string()),
            ("location", self.location.trim().to_string()),
            ("address", self.address.trim().to_string()),
            ("cuisine", self.cuisine.trim().to_string()),
            ("cuisineType", self.cuisine_type.trim().to_string()),
            ("username", username.to_string()),
        ];
        if let Some(id) = self.destination_id {
            fields.push(("destinationId", id.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_tolerates_missing_collections() {
        let destination: Destination =
            serde_json::from_str(r#"{"id":1,"name":"Lisbon","country":"Portugal","imagePath":"/img/lisbon.jpg"}"#).unwrap();
        assert!(destination.hotels.is_empty());
        assert!(destination.restaurants.is_empty());
        assert_eq!(destination.image_path.as_deref(), Some("/img/lisbon.jpg"));
    }

    #[test]
    fn test_hotel_form_fields_include_destination_only_when_set() {
        let mut form = HotelForm {
            name: " Sea View ".to_string(),
            location: "Lisbon".to_string(),
            price_per_night: "120".to_string(),
            address: "Rua 1".to_string(),
            destination_id: None,
        };
        let fields = form.form_fields("root");
        assert!(fields.contains(&("name", "Sea View".to_string())));
        assert!(fields.contains(&("pricePerNight", "120".to_string())));
        assert!(!fields.iter().any(|(k, _)| *k == "destinationId"));

        form.destination_id = Some(4);
        assert!(form.form_fields("root").contains(&("destinationId", "4".to_string())));
    }

    #[test]
    fn test_restaurant_form_round_trips_existing_values() {
        let restaurant = Restaurant {
            id: 9,
            name: "Tasca".to_string(),
            location: "Porto".to_string(),
            address: "Rua 2".to_string(),
            cuisine: "Portuguese".to_string(),
            cuisine_type: "Seafood".to_string(),
        };
        let form = RestaurantForm::from_restaurant(&restaurant, Some(2));
        let fields = form.form_fields("root");
        assert!(fields.contains(&("cuisineType", "Seafood".to_string())));
        assert!(fields.contains(&("destinationId", "2".to_string())));
        assert!(fields.contains(&("username", "root".to_string())));
    }
}

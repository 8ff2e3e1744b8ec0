use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder stored in any lead field the source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// One business record extracted from a model response.
///
/// `phone` is either [`NOT_AVAILABLE`], a `+55` formatted number, or the raw
/// cell text when it could not be normalized. `website` and `rating` are kept
/// exactly as the source wrote them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub rating: String,
    pub city: String,
}

impl Lead {
    #[must_use]
    pub fn has_phone(&self) -> bool {
        self.phone != NOT_AVAILABLE
    }

    /// Returns `true` when the website cell holds something usable as a link.
    #[must_use]
    pub fn has_website(&self) -> bool {
        !self.website.is_empty() && self.website != NOT_AVAILABLE
    }

    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.rating != NOT_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: "Lanchonete Central".to_string(),
            address: "Rua A, 10".to_string(),
            phone: "+55 11 98765-4321".to_string(),
            website: NOT_AVAILABLE.to_string(),
            rating: "4.5".to_string(),
            city: "Campinas".to_string(),
        }
    }

    #[test]
    fn lead_serializes_with_flat_field_names() {
        let lead = sample_lead();
        let json = serde_json::to_value(&lead).expect("serialize lead");
        assert_eq!(json["id"].as_str(), Some(lead.id.to_string().as_str()));
        assert_eq!(json["name"], "Lanchonete Central");
        assert_eq!(json["phone"], "+55 11 98765-4321");
        assert_eq!(json["website"], "N/A");
        assert_eq!(json["city"], "Campinas");
    }

    #[test]
    fn lead_deserializes_from_backend_json() {
        let json = serde_json::json!({
            "id": "6f9619ff-8b86-4d01-b42d-00cf4fc964ff",
            "name": "Pastelaria do Bairro",
            "address": "Av. B, 200",
            "phone": "N/A",
            "website": "https://instagram.com/pastel",
            "rating": "N/A",
            "city": "Sorocaba"
        });
        let lead: Lead = serde_json::from_value(json).expect("deserialize lead");
        assert_eq!(lead.name, "Pastelaria do Bairro");
        assert!(!lead.has_phone());
        assert!(lead.has_website());
        assert!(!lead.has_rating());
    }

    #[test]
    fn empty_website_is_not_a_link() {
        let mut lead = sample_lead();
        lead.website = String::new();
        assert!(!lead.has_website());
    }
}

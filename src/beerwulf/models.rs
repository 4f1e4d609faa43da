//! Data models for beer product records.

use serde::{Deserialize, Serialize};

/// Everything read off one beer product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
    /// Product name
    pub name: String,
    /// Price in euros
    pub price: f64,
    /// Volume in centiliters
    pub volume: u32,
    /// Customer rating, in percent
    pub rating: u32,
    /// Position on the EBC color scale, in percent
    pub color_intensity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let beer = Beer {
            name: "Stiegl Goldbraü".to_string(),
            price: 2.49,
            volume: 33,
            rating: 70,
            color_intensity: 38.4,
        };

        let json = serde_json::to_value(&beer).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 5);
        for key in ["name", "price", "volume", "rating", "colorIntensity"] {
            assert!(keys.contains(&key.to_string()), "missing key {key}");
        }
        assert_eq!(json["volume"], 33);
    }
}

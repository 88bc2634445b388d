//! Wire schema for the recommendation and analytics endpoints.
//!
//! Field names follow what the backend transmits: snake_case on products and
//! list items, camelCase on the analytics envelope.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Text shown for a product without a price.
pub const PRICE_UNAVAILABLE_LABEL: &str = "Price not available";

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

/// Body of `POST /api/recommend`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub prompt: String,
}

/// One item of the `POST /api/recommend` response array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: Product,
    pub generated_description: String,
}

/// A catalog product as returned inside a recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default)]
    pub price: Price,
}

impl Product {
    /// Brand to display, if any. Blank brands count as absent.
    #[must_use]
    pub fn brand_label(&self) -> Option<&str> {
        self.brand.as_deref().map(str::trim).filter(|b| !b.is_empty())
    }

    /// Secondary line under the title: `"Brand • Category"` or just the category.
    #[must_use]
    pub fn byline(&self) -> String {
        match self.brand_label() {
            Some(brand) => format!("{brand} • {}", self.category),
            None => self.category.clone(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// PRICE
// =============================================================================

/// Product price decoded at the API boundary.
///
/// The backend sends a number, a free-form string (`"24.50"`, `"N/A"`), or
/// the sentinel string `"nan"` when the catalog has no price. Strings are
/// kept exactly as sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Price {
    Known(f64),
    Text(String),
    #[default]
    Unavailable,
}

impl Price {
    /// Decode a raw JSON value. `null`, non-finite numbers, and non-scalar
    /// values are `Unavailable`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map_or(Self::Unavailable, Self::Known),
            Value::String(s) => Self::parse(s),
            _ => Self::Unavailable,
        }
    }

    /// Decode a textual price. Only the `"nan"` sentinel is special.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("nan") {
            Self::Unavailable
        } else {
            Self::Text(raw.to_owned())
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => write!(f, "{v}"),
            Self::Text(text) => f.write_str(text),
            Self::Unavailable => f.write_str(PRICE_UNAVAILABLE_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Known(v) => serializer.serialize_f64(*v),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Unavailable => serializer.serialize_str("nan"),
        }
    }
}

// =============================================================================
// ANALYTICS
// =============================================================================

/// Body of `GET /api/analytics`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub key_metrics: KeyMetrics,
    #[serde(default)]
    pub products_by_brand: Vec<BrandCount>,
    #[serde(default)]
    pub avg_price_by_category: Vec<CategoryPrice>,
    #[serde(default)]
    pub material_distribution: Vec<MaterialCount>,
}

/// Headline numbers shown as summary cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_products: u64,
    pub unique_brands: u64,
    pub average_price: f64,
    pub unique_categories: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandCount {
    pub brand: String,
    pub product_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrice {
    pub primary_category: String,
    pub price: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCount {
    pub material: String,
    pub count: u64,
}

/// Decode a recommendation response body.
///
/// # Errors
///
/// Returns [`crate::ApiError::Parse`] when the body is not a JSON array of
/// recommendations.
pub fn decode_recommendations(body: &str) -> Result<Vec<Recommendation>, crate::ApiError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode an analytics response body.
///
/// # Errors
///
/// Returns [`crate::ApiError::Parse`] when the body does not match
/// [`AnalyticsReport`].
pub fn decode_analytics(body: &str) -> Result<AnalyticsReport, crate::ApiError> {
    Ok(serde_json::from_str(body)?)
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    #[serde(with = "date_of_sale")]
    pub date_of_sale: NaiveDateTime,
    pub sold: bool,
    pub image: String,
}

pub fn parse_search_price(search: &str) -> Option<f64> {
    match search.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Some(price),
        _ => None,
    }
}

// Seed dumps carry an offset (`2021-11-27T20:29:54+05:30`); storage is naive UTC.
mod date_of_sale {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{}Z", value.format("%Y-%m-%dT%H:%M:%S%.3f")))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let value = String::deserialize(deserializer)?;

        if let Ok(date) = DateTime::parse_from_rfc3339(&value) {
            return Ok(date.naive_utc());
        }

        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(D::Error::custom)
    }
}

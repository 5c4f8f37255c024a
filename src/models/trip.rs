use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Origin, destination, ordered waypoints and travel dates for one trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub start_country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub intermediate_countries: Vec<String>,
    #[serde(with = "trip_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "trip_date")]
    pub end_date: Option<NaiveDate>,
}

impl TripRequest {
    /// Route as `Start → Stop → End`, skipping waypoints still pending entry.
    pub fn route_summary(&self) -> String {
        std::iter::once(self.start_country.trim())
            .chain(
                self.intermediate_countries
                    .iter()
                    .map(|country| country.trim())
                    .filter(|country| !country.is_empty()),
            )
            .chain(std::iter::once(self.end_country.trim()))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Whole days between the start and end date, when both are known.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }
}

/// Dates travel as `YYYY-MM-DD`. Browser clients tend to send full RFC 3339
/// timestamps instead, so those are accepted too and truncated to the UTC date.
mod trip_date {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
            return Ok(None);
        };

        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(raw.trim()).map(|dt| dt.naive_utc().date()))
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid trip date {:?}: {}", raw, e)))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded activity in the summary shape activity APIs return
/// (one row = one recorded outing).
///
/// Distances are meters, times are seconds, speeds are m/s. The optional
/// metrics (`average_watts`, `average_heartrate`, `suffer_score`) are absent
/// on many records; chart predicates are responsible for excluding records
/// that lack a field their Y computation needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Upstream activity id; only used by the rendering side (e.g. to link
    /// a point back to the activity detail page).
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Activity type like "Ride" or "Run".
    #[serde(rename = "type", default)]
    pub activity_type: Option<String>,
    /// Start of the activity, ISO-8601 on the wire.
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: f64,
    #[serde(default)]
    pub elapsed_time: f64,
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default)]
    pub average_speed: f64,
    pub average_watts: Option<f64>,
    pub average_heartrate: Option<f64>,
    /// Some exports encode the suffer score as a string, others as a number.
    /// Accept both and normalize to `f64`.
    #[serde(default, deserialize_with = "de_opt_f64_from_string_or_number")]
    pub suffer_score: Option<f64>,
    /// Equipment identifier; the categorical field scatter charts cluster by.
    pub gear_id: Option<String>,
}

impl Activity {
    /// Start timestamp in epoch milliseconds, the X unit the core works in.
    pub fn start_ms(&self) -> i64 {
        self.start_date.timestamp_millis()
    }
}

/// Serde helper: parse `Option<f64>` from a JSON number, a numeric string, or null.
fn de_opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct OptF64Visitor;

    impl<'de> Visitor<'de> for OptF64Visitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number, a numeric string, or null")
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v as f64))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<f64>().map(Some).map_err(E::custom)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OptF64Visitor)
}

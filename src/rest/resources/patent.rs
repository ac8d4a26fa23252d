//! Patent resource implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A patent held by a research group.
///
/// The grant date and inventor are optional on the backend; a missing date
/// is represented as `None` and round-trips as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patent {
    /// The unique identifier of the patent.
    #[serde(rename = "oidPatente", skip_serializing, default)]
    pub id: Option<i64>,

    /// Patent description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Patent type classification.
    #[serde(rename = "tipo")]
    pub kind: String,

    /// Patent number; unique across the system.
    #[serde(rename = "numero")]
    pub number: String,

    /// Grant date, if known.
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDate>,

    /// Inventor name, possibly empty.
    #[serde(rename = "inventor")]
    pub inventor: String,

    /// Id of the owning research group.
    #[serde(rename = "GrupoInvestigacion")]
    pub research_group: i64,
}

impl RestResource for Patent {
    const NAME: &'static str = "Patent";
    const PATH: &'static str = "patentes";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_date_round_trips_as_null() {
        let patent = Patent {
            id: None,
            description: "Sensor de humedad".to_string(),
            kind: "Invención".to_string(),
            number: "AR-2024-0117".to_string(),
            date: None,
            inventor: String::new(),
            research_group: 3,
        };

        let value = serde_json::to_value(&patent).unwrap();
        assert_eq!(value["fecha"], serde_json::Value::Null);
        assert!(value.get("oidPatente").is_none());
    }

    #[test]
    fn test_deserializes_backend_payload() {
        let body = json!({
            "oidPatente": 9,
            "descripcion": "Sensor de humedad",
            "tipo": "Invención",
            "numero": "AR-2024-0117",
            "fecha": "2024-07-15",
            "inventor": "M. Duarte",
            "GrupoInvestigacion": 3
        });

        let patent: Patent = serde_json::from_value(body).unwrap();
        assert_eq!(patent.get_id(), Some(9));
        assert_eq!(patent.date, NaiveDate::from_ymd_opt(2024, 7, 15));
        assert_eq!(patent.inventor, "M. Duarte");
    }
}

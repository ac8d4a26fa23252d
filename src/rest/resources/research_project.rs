//! ResearchProject resource implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A research project carried out by a group.
///
/// Dates are calendar dates without a time component. The `research_group`
/// field carries the owning group's id, matching the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchProject {
    /// The unique identifier of the project.
    #[serde(rename = "oidProyectoInvestigacion", skip_serializing, default)]
    pub id: Option<i64>,

    /// Project code; unique across the system.
    #[serde(rename = "codigoProyecto")]
    pub code: String,

    /// Project description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Object type classification.
    #[serde(rename = "objectType")]
    pub object_type: String,

    /// Project name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Project start date.
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,

    /// Project end date.
    #[serde(rename = "fechaFinalizacion")]
    pub end_date: NaiveDate,

    /// Project type classification.
    #[serde(rename = "tipoProyecto")]
    pub project_type: String,

    /// Achievements obtained so far.
    #[serde(rename = "logrosObtenidos")]
    pub achievements: String,

    /// Funding source description.
    #[serde(rename = "fuenteFinanciamiento")]
    pub funding_source: String,

    /// Id of the owning research group.
    #[serde(rename = "GrupoInvestigacion")]
    pub research_group: i64,
}

impl RestResource for ResearchProject {
    const NAME: &'static str = "ResearchProject";
    const PATH: &'static str = "proyectos";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dates_serialize_as_iso_calendar_dates() {
        let project = ResearchProject {
            id: None,
            code: "PID-4523".to_string(),
            description: "Optimización de redes".to_string(),
            object_type: "Aplicada".to_string(),
            name: "Redes neuronales".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            project_type: "PID".to_string(),
            achievements: "Publicación inicial".to_string(),
            funding_source: "UTN".to_string(),
            research_group: 3,
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["fechaInicio"], "2024-03-01");
        assert_eq!(value["fechaFinalizacion"], "2026-02-28");
        assert!(value.get("oidProyectoInvestigacion").is_none());
    }

    #[test]
    fn test_deserializes_backend_payload() {
        let body = json!({
            "oidProyectoInvestigacion": 11,
            "codigoProyecto": "PID-4523",
            "descripcion": "Optimización de redes",
            "objectType": "Aplicada",
            "nombre": "Redes neuronales",
            "fechaInicio": "2024-03-01",
            "fechaFinalizacion": "2026-02-28",
            "tipoProyecto": "PID",
            "logrosObtenidos": "Publicación inicial",
            "fuenteFinanciamiento": "UTN",
            "GrupoInvestigacion": 3
        });

        let project: ResearchProject = serde_json::from_value(body).unwrap();
        assert_eq!(project.get_id(), Some(11));
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(project.research_group, 3);
    }
}

//! Activity and ResearchLine resource implementations.
//!
//! Activities are the planned work items of a research line; research lines
//! group activities under an activity program.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A planned activity within a research line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// The unique identifier of the activity.
    #[serde(rename = "oidActividad", skip_serializing, default)]
    pub id: Option<i64>,

    /// Activity description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Activity start date.
    #[serde(rename = "fechaInicio")]
    pub start_date: NaiveDate,

    /// Activity end date.
    #[serde(rename = "fechaFin")]
    pub end_date: NaiveDate,

    /// Sequence number within the line.
    #[serde(rename = "nro")]
    pub number: i64,

    /// Budget assigned to the activity.
    #[serde(rename = "presupuestoAsignado")]
    pub assigned_budget: f64,

    /// Expected results description.
    #[serde(rename = "resultadosEsperados")]
    pub expected_results: String,

    /// Id of the owning research line.
    #[serde(rename = "LineaDeInvestigacion")]
    pub research_line: i64,
}

impl RestResource for Activity {
    const NAME: &'static str = "Activity";
    const PATH: &'static str = "actividades";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// A research line grouping activities under an activity program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchLine {
    /// The unique identifier of the line.
    #[serde(rename = "oidLineaDeInvestigacion", skip_serializing, default)]
    pub id: Option<i64>,

    /// Line name.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Line description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Id of the activity program this line belongs to.
    #[serde(rename = "ProgramaActividades")]
    pub activity_program: i64,
}

impl RestResource for ResearchLine {
    const NAME: &'static str = "ResearchLine";
    const PATH: &'static str = "lineas-investigacion";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

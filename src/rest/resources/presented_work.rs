//! PresentedWork resource implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A work presented at a conference or scientific meeting.
///
/// Unlike projects and patents, the start date here carries a time
/// component, matching the backend contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresentedWork {
    /// The unique identifier of the work.
    #[serde(rename = "oidTrabajoPresentado", skip_serializing, default)]
    pub id: Option<i64>,

    /// City where the meeting took place.
    #[serde(rename = "ciudad")]
    pub city: String,

    /// Meeting start date and time.
    #[serde(rename = "fechaInicio")]
    pub start_date: DateTime<Utc>,

    /// Name of the meeting or conference.
    #[serde(rename = "nombreReunion")]
    pub meeting_name: String,

    /// Title of the presented work; unique across the system.
    #[serde(rename = "tituloTrabajo")]
    pub title: String,

    /// Id of the owning research group.
    #[serde(rename = "GrupoInvestigacion")]
    pub research_group: i64,
}

impl RestResource for PresentedWork {
    const NAME: &'static str = "PresentedWork";
    const PATH: &'static str = "trabajos-presentados";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

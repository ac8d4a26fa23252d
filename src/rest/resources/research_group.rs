//! ResearchGroup resource implementation.
//!
//! Research groups are the anchor entity of the records system: projects,
//! publications, patents, and presented works all hang off a group.
//!
//! # Example
//!
//! ```rust,ignore
//! use memoria_client::rest::{self, resources::ResearchGroup};
//!
//! // List all groups (this collection is not paginated)
//! let groups = rest::all::<ResearchGroup>(&client).await?;
//!
//! // Create a group
//! let group = ResearchGroup {
//!     id: None,
//!     name: "Sistemas Inteligentes".to_string(),
//!     acronym: "GSI".to_string(),
//!     assigned_faculty: "FRRe".to_string(),
//!     email: "gsi@frre.utn.edu.ar".to_string(),
//!     organization_chart: "Director, codirector, becarios".to_string(),
//!     funding_source: "UTN".to_string(),
//!     activity_program: 1,
//! };
//! let saved = rest::create(&client, &group).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A research group.
///
/// Wire field names follow the backend contract; the id is server-assigned
/// and never sent back on create or update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResearchGroup {
    /// The unique identifier of the group.
    #[serde(rename = "oidGrupoInvestigacion", skip_serializing, default)]
    pub id: Option<i64>,

    /// Group name; unique across the system.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Group acronym; unique across the system.
    #[serde(rename = "sigla")]
    pub acronym: String,

    /// The regional faculty the group is assigned to.
    #[serde(rename = "facultadReginalAsignada")]
    pub assigned_faculty: String,

    /// Contact email; unique across the system.
    #[serde(rename = "correo")]
    pub email: String,

    /// Description of the group's organization chart.
    #[serde(rename = "organigrama")]
    pub organization_chart: String,

    /// Funding source description.
    #[serde(rename = "fuenteFinanciamiento")]
    pub funding_source: String,

    /// Id of the activity program this group operates under.
    #[serde(rename = "ProgramaActividades")]
    pub activity_program: i64,
}

impl RestResource for ResearchGroup {
    const NAME: &'static str = "ResearchGroup";
    const PATH: &'static str = "grupos";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

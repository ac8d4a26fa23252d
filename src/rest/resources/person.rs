//! Person resource implementation.
//!
//! People are the members of research groups. CRUD goes through the
//! `personas/` collection; the full roster is also exposed at
//! `auth/personas/` wrapped in a `{"personas": [...]}` envelope, which
//! [`directory`] unwraps.

use serde::{Deserialize, Serialize};

use crate::rest::client::RestClient;
use crate::rest::errors::RestError;
use crate::rest::resource::RestResource;

/// A person belonging to a research group.
///
/// The password is write-only from the client's perspective: it is sent on
/// create when set and never echoed back in usable form. The personnel-type
/// name is a read-only convenience field the backend derives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// The unique identifier of the person.
    #[serde(rename = "oidpersona", skip_serializing, default)]
    pub id: Option<i64>,

    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,

    /// Email; unique across the system.
    #[serde(rename = "correo")]
    pub email: String,

    /// Password, sent on create only.
    #[serde(rename = "contrasena", skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,

    /// Weekly hours dedicated; never negative.
    #[serde(rename = "horasSemanales")]
    pub weekly_hours: i64,

    /// Id of the personnel type, if assigned.
    #[serde(rename = "tipoDePersonal")]
    pub personnel_type: Option<i64>,

    /// Name of the personnel type; read-only, backend-derived.
    #[serde(rename = "tipoDePersonalNombre", skip_serializing, default)]
    pub personnel_type_name: Option<String>,

    /// Id of the research group, if the person belongs to one.
    #[serde(rename = "GrupoInvestigacion")]
    pub research_group: Option<i64>,
}

impl RestResource for Person {
    const NAME: &'static str = "Person";
    const PATH: &'static str = "personas";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Deserialize)]
struct DirectoryEnvelope {
    personas: Vec<Person>,
}

/// Path of the roster endpoint, relative to the API base URL.
pub const DIRECTORY_PATH: &str = "auth/personas/";

/// Fetches the full roster of people.
///
/// # Errors
///
/// Returns [`RestError`] for API rejections, transport or session failures,
/// or an unexpected body shape.
pub async fn directory(client: &RestClient) -> Result<Vec<Person>, RestError> {
    let envelope: DirectoryEnvelope = client.get_json(DIRECTORY_PATH, None).await?;
    Ok(envelope.personas)
}

//! Registration resource implementation.
//!
//! A registration records the formal filing of a patent under one of the
//! registration kinds the backend exposes at `tipo-registros/`.

use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// A formal registration of a patent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registration {
    /// The unique identifier of the registration.
    #[serde(rename = "oidRegistro", skip_serializing, default)]
    pub id: Option<i64>,

    /// Registration description.
    #[serde(rename = "descripcion")]
    pub description: String,

    /// Id of the registration kind.
    #[serde(rename = "TipoDeRegistro")]
    pub kind: i64,

    /// Id of the registered patent. Each patent has at most one
    /// registration.
    #[serde(rename = "Patente")]
    pub patent: i64,
}

impl RestResource for Registration {
    const NAME: &'static str = "Registration";
    const PATH: &'static str = "registros";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// A registration kind (e.g. national, international).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationKind {
    /// The unique identifier of the kind.
    #[serde(rename = "oidTipoDeRegistro", skip_serializing, default)]
    pub id: Option<i64>,

    /// Kind name.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl RestResource for RegistrationKind {
    const NAME: &'static str = "RegistrationKind";
    const PATH: &'static str = "tipo-registros";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

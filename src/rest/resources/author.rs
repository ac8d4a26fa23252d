//! Author resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::resource::RestResource;

/// An author credited on published works.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    /// The unique identifier of the author.
    #[serde(rename = "oidAutor", skip_serializing, default)]
    pub id: Option<i64>,

    /// Given name.
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name.
    #[serde(rename = "apellido")]
    pub last_name: String,
}

impl RestResource for Author {
    const NAME: &'static str = "Author";
    const PATH: &'static str = "autores";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

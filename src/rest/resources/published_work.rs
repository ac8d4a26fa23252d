//! PublishedWork resource implementation.
//!
//! Published works are journal articles and similar publications credited
//! to a research group. The collection is paginated; a convenience query
//! exists for works that reached the `Publicado` state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::clients::Page;
use crate::rest::client::RestClient;
use crate::rest::errors::RestError;
use crate::rest::resource::{self, RestResource};

/// A published work (journal article or similar).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedWork {
    /// The unique identifier of the work.
    #[serde(rename = "oidTrabajoPublicado", skip_serializing, default)]
    pub id: Option<i64>,

    /// Work title; unique across the system.
    #[serde(rename = "titulo")]
    pub title: String,

    /// ISSN of the publishing journal; unique across the system.
    #[serde(rename = "ISSN")]
    pub issn: String,

    /// Publisher name.
    #[serde(rename = "editorial")]
    pub publisher: String,

    /// Journal name.
    #[serde(rename = "nombreRevista")]
    pub journal_name: String,

    /// Country of publication.
    #[serde(rename = "pais")]
    pub country: String,

    /// Publication state. The backend defaults new works to `Realizado`;
    /// works that went to print carry `Publicado`.
    #[serde(rename = "estado")]
    pub state: String,

    /// Id of the work kind.
    #[serde(rename = "tipoTrabajoPublicado")]
    pub kind: i64,

    /// Id of the credited author.
    #[serde(rename = "Autor")]
    pub author: i64,

    /// Id of the owning research group.
    #[serde(rename = "GrupoInvestigacion")]
    pub research_group: i64,
}

impl RestResource for PublishedWork {
    const NAME: &'static str = "PublishedWork";
    const PATH: &'static str = "trabajos-publicados";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

/// The state value for works that went to print.
pub const STATE_PUBLISHED: &str = "Publicado";

/// Fetches the page of works whose state is [`STATE_PUBLISHED`].
///
/// # Errors
///
/// Returns [`RestError`] for API rejections, transport or session failures,
/// or an unexpected body shape.
pub async fn published(client: &RestClient) -> Result<Page<PublishedWork>, RestError> {
    let mut query = HashMap::new();
    query.insert("estado".to_string(), STATE_PUBLISHED.to_string());
    resource::list_filtered(client, query).await
}

/// A published-work kind (e.g. article, book chapter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishedWorkKind {
    /// The unique identifier of the kind.
    #[serde(rename = "oidTipoTrabajoPublicado", skip_serializing, default)]
    pub id: Option<i64>,

    /// Kind name.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl RestResource for PublishedWorkKind {
    const NAME: &'static str = "PublishedWorkKind";
    const PATH: &'static str = "tipo-trabajos-publicados";

    fn get_id(&self) -> Option<i64> {
        self.id
    }
}

//! The REST resource abstraction and its generic CRUD operations.
//!
//! Every backend collection follows the same conventions: the collection
//! lives at `<base>/<path>/`, members at `<base>/<path>/<id>/`, bodies are
//! JSON, and primary keys are server-assigned integers. [`RestResource`]
//! captures the per-type facts (path, name, id accessor) and the free
//! functions in this module implement the shared operations once.
//!
//! # Example
//!
//! ```rust,ignore
//! use memoria_client::rest::{self, RestClient};
//! use memoria_client::rest::resources::Patent;
//!
//! // Create
//! let saved: Patent = rest::create(&client, &patent).await?;
//!
//! // Paginated list
//! let page = rest::list::<Patent>(&client, 1, 10).await?;
//! println!("{} patents total", page.count);
//!
//! // Delete
//! rest::delete::<Patent>(&client, saved.id.unwrap()).await?;
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::Page;
use crate::rest::client::RestClient;
use crate::rest::errors::RestError;

/// A typed REST resource following the backend's collection conventions.
pub trait RestResource: Serialize + DeserializeOwned {
    /// Human-readable type name, used in error messages.
    const NAME: &'static str;

    /// Collection path segment relative to the base URL, without slashes
    /// (e.g., `"patentes"`).
    const PATH: &'static str;

    /// Returns the server-assigned id, if this value has been persisted.
    fn get_id(&self) -> Option<i64>;
}

/// Collection endpoint path, with the backend's trailing slash.
fn collection_path<R: RestResource>() -> String {
    format!("{}/", R::PATH)
}

/// Member endpoint path for one id.
fn member_path<R: RestResource>(id: i64) -> String {
    format!("{}/{id}/", R::PATH)
}

/// Fetches every item of an unpaginated collection.
///
/// # Errors
///
/// Returns [`RestError`] for API rejections, transport or session failures,
/// or an unexpected body shape.
pub async fn all<R: RestResource>(client: &RestClient) -> Result<Vec<R>, RestError> {
    client.get_json(&collection_path::<R>(), None).await
}

/// Fetches one page of a paginated collection.
///
/// # Errors
///
/// Returns [`RestError`] for API rejections, transport or session failures,
/// or an unexpected body shape.
pub async fn list<R: RestResource>(
    client: &RestClient,
    page: u32,
    page_size: u32,
) -> Result<Page<R>, RestError> {
    let mut query = HashMap::new();
    query.insert("page".to_string(), page.to_string());
    query.insert("page_size".to_string(), page_size.to_string());
    client.get_json(&collection_path::<R>(), Some(query)).await
}

/// Fetches one page of a paginated collection with extra filter parameters.
///
/// # Errors
///
/// Returns [`RestError`] for API rejections, transport or session failures,
/// or an unexpected body shape.
pub async fn list_filtered<R: RestResource>(
    client: &RestClient,
    query: HashMap<String, String>,
) -> Result<Page<R>, RestError> {
    client.get_json(&collection_path::<R>(), Some(query)).await
}

/// Creates a new item and returns the persisted value, id included.
///
/// # Errors
///
/// Returns [`RestError::Api`] carrying the backend's validation errors when
/// the payload is rejected.
pub async fn create<R: RestResource>(client: &RestClient, resource: &R) -> Result<R, RestError> {
    let body = serde_json::to_value(resource)?;
    let response = client.post(&collection_path::<R>(), body).await?;
    Ok(response.json()?)
}

/// Updates an existing item in place and returns the persisted value.
///
/// # Errors
///
/// Returns [`RestError::MissingId`] if `resource` has never been persisted,
/// or [`RestError::Api`] when the backend rejects the payload.
pub async fn update<R: RestResource>(client: &RestClient, resource: &R) -> Result<R, RestError> {
    let id = resource
        .get_id()
        .ok_or(RestError::MissingId { resource: R::NAME })?;
    let body = serde_json::to_value(resource)?;
    let response = client.put(&member_path::<R>(id), body).await?;
    Ok(response.json()?)
}

/// Deletes the item with the given id.
///
/// # Errors
///
/// Returns [`RestError::Api`] if the backend rejects the deletion.
pub async fn delete<R: RestResource>(client: &RestClient, id: i64) -> Result<(), RestError> {
    client.delete(&member_path::<R>(id)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Widget {
        #[serde(skip_serializing)]
        id: Option<i64>,
        nombre: String,
    }

    impl RestResource for Widget {
        const NAME: &'static str = "Widget";
        const PATH: &'static str = "widgets";

        fn get_id(&self) -> Option<i64> {
            self.id
        }
    }

    #[test]
    fn test_collection_path_has_trailing_slash() {
        assert_eq!(collection_path::<Widget>(), "widgets/");
    }

    #[test]
    fn test_member_path_embeds_id() {
        assert_eq!(member_path::<Widget>(42), "widgets/42/");
    }

    #[test]
    fn test_resource_id_is_not_serialized() {
        let widget = Widget {
            id: Some(7),
            nombre: "prueba".to_string(),
        };
        let value = serde_json::to_value(&widget).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["nombre"], "prueba");
    }
}

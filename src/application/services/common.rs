/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::Envelope;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Builds `/{collection}/{id}`, rejecting ids that would change the path
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String, AppError> {
    if id.is_empty() || id.contains(['/', '?', '#']) {
        return Err(AppError::InvalidInput(format!(
            "invalid {collection} id: {id:?}"
        )));
    }
    Ok(format!("/{collection}/{id}"))
}

/// Builds `/{collection}/{id}/{nested}`
pub(crate) fn nested_path(collection: &str, id: &str, nested: &str) -> Result<String, AppError> {
    Ok(format!("{}/{nested}", resource_path(collection, id)?))
}

/// GETs a single resource and unwraps it from its envelope
pub(crate) async fn fetch_one<E: Envelope>(
    http_client: &HttpClient,
    path: &str,
) -> Result<E::Item, AppError> {
    let envelope: E = http_client.get(path, &[]).await?;
    envelope.into_first()
}

/// GETs one page of a collection
pub(crate) async fn fetch_page<E: Envelope>(
    http_client: &HttpClient,
    path: &str,
    params: &ListParams,
) -> Result<Page<E::Item>, AppError> {
    let envelope: E = http_client.get(path, &params.to_query()).await?;
    let page = envelope.into_page();
    debug!(
        "{} {} of {} obtained",
        page.len(),
        E::KEY,
        page.pagination.total
    );
    Ok(page)
}

/// POSTs to a collection and unwraps the created resource
pub(crate) async fn create_one<E: Envelope, B: Serialize + ?Sized + Sync>(
    http_client: &HttpClient,
    path: &str,
    body: Option<&B>,
) -> Result<E::Item, AppError> {
    let envelope: E = http_client.post(path, body).await?;
    envelope.into_first()
}

/// PUTs changed fields to a resource and unwraps the updated resource
pub(crate) async fn update_one<E: Envelope, B: Serialize + ?Sized + Sync>(
    http_client: &HttpClient,
    path: &str,
    body: &B,
) -> Result<E::Item, AppError> {
    let envelope: E = http_client.put(path, body).await?;
    envelope.into_first()
}

/// DELETEs a resource; `true` when the API answered with a 2xx status
pub(crate) async fn delete_resource(http_client: &HttpClient, path: &str) -> Result<bool, AppError> {
    let status = http_client.delete(path).await?;
    Ok(status.is_success())
}

/// Wraps a `{"customer": "/customers/{id}"}` style link update
pub(crate) fn link_update(field: &str, collection: &str, id: &str) -> Result<Value, AppError> {
    let href = resource_path(collection, id)?;
    let mut body = serde_json::Map::new();
    body.insert(field.to_string(), Value::String(href));
    Ok(Value::Object(body))
}

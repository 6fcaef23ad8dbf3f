//! Stateless Todoist API client
//!
//! [`TodoistClient`] owns nothing but its transport. Each resource module
//! (`tasks`, `projects`, ...) adds its operations through its own `impl`
//! block using the request helpers defined here.

use crate::config::ClientConfig;
use crate::todoist::error::{Error, Result};
use crate::todoist::page::{Endpoint, Page, decode_page};
use crate::todoist::transport::{HttpTransport, Transport};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Typed gateway to the Todoist REST API.
///
/// Safe to share across concurrent calls: there is no cache and no mutable
/// state, every operation allocates its own request and response values.
#[derive(Debug, Clone)]
pub struct TodoistClient<T = HttpTransport> {
    transport: T,
}

impl TodoistClient<HttpTransport> {
    /// Build a client that talks HTTP to `config.base_url` using `token`.
    pub fn new(token: &str, config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(token, config)?))
    }
}

impl<T: Transport> TodoistClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET a single record.
    pub(crate) async fn get_record<R: DeserializeOwned>(
        &self,
        path: &str,
        resource: &'static str,
    ) -> Result<R> {
        let bytes = self.transport.execute(Method::GET, path, None).await?;
        decode_record(bytes, resource)
    }

    /// POST a JSON body and decode the record the API echoes back.
    pub(crate) async fn post_record<B, R>(
        &self,
        path: &str,
        body: &B,
        resource: &'static str,
    ) -> Result<R>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
        let bytes = self
            .transport
            .execute(Method::POST, path, Some(payload))
            .await?;
        decode_record(bytes, resource)
    }

    /// POST with no body where no content is expected back.
    pub(crate) async fn post_action(&self, path: &str) -> Result<()> {
        self.transport.execute(Method::POST, path, None).await?;
        Ok(())
    }

    /// DELETE; whatever the server returns is ignored.
    pub(crate) async fn delete_record(&self, path: &str) -> Result<()> {
        self.transport.execute(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// GET every page of a list endpoint, one request at a time, and
    /// concatenate the results in server order.
    pub(crate) async fn get_all<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        resource: &'static str,
    ) -> Result<Vec<R>> {
        let mut results = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let path = endpoint.render(cursor.as_deref());
            pages += 1;
            let Some(bytes) = self.transport.execute(Method::GET, &path, None).await? else {
                break;
            };
            let page: Page<R> = decode_page(&bytes).map_err(|e| Error::decode(resource, e))?;
            results.extend(page.results);

            match page.next_cursor {
                Some(next) if cursor.as_deref() == Some(next.as_str()) => {
                    return Err(Error::RepeatedCursor {
                        resource,
                        cursor: next,
                    });
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(resource, pages, count = results.len(), "drained list endpoint");
        Ok(results)
    }
}

/// `/{collection}/{id}` with the id percent-encoded.
pub(crate) fn item_path(collection: &str, id: &str) -> String {
    format!("/{}/{}", collection, urlencoding::encode(id))
}

fn decode_record<R: DeserializeOwned>(bytes: Option<Vec<u8>>, resource: &'static str) -> Result<R> {
    let bytes = bytes.ok_or(Error::EmptyResponse(resource))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(resource, e))
}

//! The `getVersion` operation.

use serde_json::Value;

use crate::client::BabelNetClient;
use crate::endpoints::GET_VERSION;
use crate::error::Result;

impl BabelNetClient {
    /// Retrieve the BabelNet version.
    ///
    /// Returns `None` when the response has no `version` field or it is
    /// `null`. Non-string values are returned in their JSON text form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[tracing::instrument(skip(self))]
    pub async fn get_version(&self) -> Result<Option<String>> {
        let value = self.exec(&GET_VERSION, &[]).await?;
        Ok(version_text(value.get("version")))
    }
}

fn version_text(version: Option<&Value>) -> Option<String> {
    match version? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

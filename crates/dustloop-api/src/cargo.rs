// Cargo export HTTP client
//
// Wraps `reqwest::Client` with `Special:CargoExport` URL construction and
// JSON decoding. The wiki answers with a bare JSON array of flat rows whose
// keys are the requested field names.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Default MediaWiki entry point for the Dustloop wiki.
pub const DEFAULT_ENDPOINT: &str = "https://www.dustloop.com/wiki/index.php";

const EXPORT_TITLE: &str = "Special:CargoExport";

/// Error bodies are clipped to this many characters before surfacing.
const MAX_ERROR_BODY: usize = 200;

/// A single Cargo table query.
///
/// Maps one-to-one onto the export endpoint's query parameters. The
/// response format is always JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoQuery {
    pub table: String,
    pub fields: Vec<String>,
    pub order_by: Vec<String>,
    pub limit: u32,
}

impl CargoQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
            order_by: Vec::new(),
            limit: 9999,
        }
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn order_by<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The `order by` clause with each column backtick-quoted.
    fn order_clause(&self) -> String {
        self.order_by
            .iter()
            .map(|col| format!("`{col}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("title", EXPORT_TITLE)
            .append_pair("tables", &self.table)
            .append_pair("fields", &self.fields.join(", "));
        if !self.order_by.is_empty() {
            pairs.append_pair("order by", &self.order_clause());
        }
        pairs
            .append_pair("limit", &self.limit.to_string())
            .append_pair("format", "json");
    }
}

/// Raw HTTP client for the wiki's Cargo export endpoint.
pub struct CargoClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CargoClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `endpoint` is the MediaWiki `index.php` URL; the export title and
    /// query parameters are appended per request.
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Parse `endpoint` and wrap an existing `reqwest::Client`.
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self::with_client(http, endpoint))
    }

    /// Build the full export URL for a query.
    pub fn export_url(&self, query: &CargoQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(None);
        query.apply(&mut url);
        url
    }

    /// Run a query and decode every row as `T`.
    ///
    /// Either the whole payload decodes or the call fails; partial results
    /// are never returned.
    pub async fn export<T: DeserializeOwned>(&self, query: &CargoQuery) -> Result<Vec<T>, Error> {
        let url = self.export_url(query);
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(status = status.as_u16(), bytes = body.len(), "cargo export response");

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: clip(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

fn clip(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".into();
    }
    trimmed.chars().take(MAX_ERROR_BODY).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> CargoClient {
        CargoClient::from_reqwest(DEFAULT_ENDPOINT, reqwest::Client::new()).unwrap()
    }

    #[test]
    fn export_url_carries_every_parameter() {
        let query = CargoQuery::new("MoveData_GGST")
            .fields(["chara", "input", "name"])
            .order_by(["chara", "input"])
            .limit(50);

        let url = client().export_url(&query);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(url.path(), "/wiki/index.php");
        assert_eq!(
            pairs,
            vec![
                ("title".into(), "Special:CargoExport".into()),
                ("tables".into(), "MoveData_GGST".into()),
                ("fields".into(), "chara, input, name".into()),
                ("order by".into(), "`chara`, `input`".into()),
                ("limit".into(), "50".into()),
                ("format".into(), "json".into()),
            ]
        );
    }

    #[test]
    fn export_url_omits_empty_order_clause() {
        let query = CargoQuery::new("MoveData_GGST").fields(["chara"]);
        let url = client().export_url(&query);
        assert!(url.query_pairs().all(|(k, _)| k != "order by"));
    }

    #[test]
    fn export_url_replaces_existing_query() {
        let http = reqwest::Client::new();
        let client = CargoClient::from_reqwest("https://wiki.test/index.php?title=Main", http).unwrap();
        let url = client.export_url(&CargoQuery::new("T"));
        assert_eq!(url.query_pairs().filter(|(k, _)| k == "title").count(), 1);
    }

    #[test]
    fn clip_bounds_long_bodies() {
        let long = "x".repeat(1_000);
        assert_eq!(clip(&long).len(), MAX_ERROR_BODY);
        assert_eq!(clip("   "), "empty response body");
    }
}

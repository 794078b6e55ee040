// ── Remote move source ──
//
// The fixed Cargo query behind every refresh. Table, columns and sort
// order are not user-configurable; only the endpoint is.

use dustloop_api::{CargoClient, CargoQuery, TransportConfig};
use tracing::debug;
use url::Url;

use crate::error::CoreError;
use crate::model::{Field, MoveRecord};

const TABLE: &str = "MoveData_GGST";

/// Pulls the full move table from the wiki.
pub struct MoveSource {
    client: CargoClient,
    query: CargoQuery,
}

impl MoveSource {
    pub fn new(client: CargoClient) -> Self {
        Self {
            client,
            query: move_query(),
        }
    }

    /// Build a source for `endpoint` with its own HTTP client.
    pub fn connect(endpoint: Url, transport: &TransportConfig) -> Result<Self, CoreError> {
        Ok(Self::new(CargoClient::new(endpoint, transport)?))
    }

    /// Fetch every row. All-or-nothing: a single bad row fails the fetch.
    pub async fn fetch(&self) -> Result<Vec<MoveRecord>, CoreError> {
        let records: Vec<MoveRecord> = self.client.export(&self.query).await?;
        debug!(records = records.len(), table = TABLE, "move table fetched");
        Ok(records)
    }
}

/// The query the store issues: every fetched column, sorted by character,
/// input, then name, with no practical row limit.
pub fn move_query() -> CargoQuery {
    CargoQuery::new(TABLE)
        .fields(Field::fetched().map(Field::key))
        .order_by([Field::Chara, Field::Input, Field::Name].map(Field::key))
        .limit(9999)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_matches_the_wiki_schema() {
        let query = move_query();
        assert_eq!(query.table, "MoveData_GGST");
        assert_eq!(
            query.fields.join(", "),
            "chara, input, name, damage, guard, startup, active, recovery, onBlock, onHit, invuln, type"
        );
        assert_eq!(query.order_by, ["chara", "input", "name"]);
        assert_eq!(query.limit, 9999);
    }
}

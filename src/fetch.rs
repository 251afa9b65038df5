use tracing::{error, instrument};

use crate::error::StoreError;
use crate::model::stored::StoredGameRecord;
use crate::store::GameStore;

/// Read every stored game. Any failure discards partial results.
#[instrument(level = "info", skip(store))]
pub fn fetch_all<S: GameStore>(store: &mut S) -> Result<Vec<StoredGameRecord>, StoreError> {
    store.scan().inspect_err(|e| error!(error = %e, "Error fetching data from store"))
}

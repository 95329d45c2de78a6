// Application state module
// Wires configuration to the document store and asset resolver

use super::types::Config;
use crate::handler::StaticAssetResolver;
use crate::store::DocumentStore;

/// Application state shared across requests.
///
/// Holds no mutable cross-request data: the document store re-reads its
/// backing file on every request, and the resolver only carries the asset
/// root.
pub struct AppState {
    pub config: Config,
    pub store: DocumentStore,
    pub assets: StaticAssetResolver,
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = DocumentStore::new(&config.storage.data_file);
        let assets = StaticAssetResolver::new(&config.assets.root);
        let access_log = config.logging.access_log;
        Self {
            config,
            store,
            assets,
            access_log,
        }
    }
}

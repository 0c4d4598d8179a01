use super::LoadPhase;
use crate::catalog::Catalog;

/// Catalog page model.
pub struct CatalogState {
    pub(in crate::app) phase: LoadPhase,
    pub(in crate::app) catalog: Catalog,
    /// Detail link of the last opened entry.
    pub(in crate::app) last_link: Option<String>,
}

impl CatalogState {
    pub(in crate::app) fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            catalog: Catalog::default(),
            last_link: None,
        }
    }
}

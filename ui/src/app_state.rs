use api::catalog::Catalog;
use api::prefs::store_prefs::StorePrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: StorePrefs,
    pub catalog: Catalog,
}

/// Settings and catalog, fixed for the lifetime of the app.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: StorePrefs, catalog: Catalog) -> Self {
        Self(Arc::new(AppStateData { prefs, catalog }))
    }
}

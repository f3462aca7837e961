pub mod store_prefs;

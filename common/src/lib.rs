//! Shared model and logic of the site admin panel.
//!
//! - [`model`]: the canonical [`model::site::SiteDocument`] and its parts.
//! - [`normalize`]: legacy-tolerant mapping from raw JSON onto the model.
//! - [`loader`]: the remote → cache → built-in fallback chain.
//! - [`binder`]: the editable form projection with list add/delete.
//! - [`save`]: cache + export of a collected document.

pub mod binder;
pub mod config;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod requests;
pub mod save;
pub mod storage;

//! Properties for the `SiteEditor` component.

use common::config::AdminConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteEditorProps {
    /// Data file URL, cache slot, export name and publish endpoint.
    ///
    /// Read once, on the first render, to load the document; read again on
    /// every save.
    #[prop_or_default]
    pub config: AdminConfig,
}

//! Component state for the site editor.

use common::binder::SiteForm;
use common::loader::SourceKind;
use yew::prelude::*;

/// Main state container for the `SiteEditor` component.
///
/// The form is the only copy of the document being edited; the view reads it
/// and `update` mutates it. Fields are `pub` because they are accessed by the
/// `view` and `update` modules.
pub struct SiteEditor {
    /// Scalar values and list sections currently shown.
    pub form: SiteForm,

    /// Where the shown document came from, once loading has finished.
    pub source: Option<SourceKind>,

    /// Guard to avoid running first-render loading more than once.
    pub loaded: bool,

    /// Reference to the dialog explaining how to deploy an exported file.
    pub export_notice_ref: NodeRef,
}

impl SiteEditor {
    pub fn new() -> Self {
        Self {
            form: SiteForm::new(),
            source: None,
            loaded: false,
            export_notice_ref: Default::default(),
        }
    }
}

use common::binder::{ItemId, ListKind};
use common::loader::Resolution;
use common::model::field::ScalarField;
use common::model::news::NewsField;
use common::model::product::ProductField;

#[derive(Clone)]
pub enum Msg {
    Loaded(Resolution),
    SetField(ScalarField, String),
    SetProductField(ItemId, ProductField, String),
    SetNewsField(ItemId, NewsField, String),
    AddItem(ListKind),
    DeleteItem(ListKind, ItemId),
    Save,
    CloseExportNotice,
}

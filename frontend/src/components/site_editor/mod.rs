//! Site editor: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering and browser helpers.
//!
//! On first render the document is resolved through the remote → local cache →
//! built-in chain and rendered into the form. Everything after that is driven
//! by `Msg`s handled in `update.rs`.

use common::loader::{resolve_document, CachedSource, FetchedSource};
use gloo_console::{log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

mod browser;
mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use browser::{fetch_site_data, LocalStorage};
pub use messages::Msg;
pub use props::SiteEditorProps;
pub use state::SiteEditor;

impl Component for SiteEditor {
    type Message = Msg;
    type Properties = SiteEditorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SiteEditor::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            spawn_local(async move {
                let remote =
                    FetchedSource(fetch_site_data(&config.data_url, config.fetch_timeout_ms).await);
                let cache = CachedSource {
                    store: &LocalStorage,
                    key: &config.cache_key,
                };
                let resolution = resolve_document(&[&remote, &cache]);

                for failure in &resolution.failures {
                    warn!(format!("无法加载数据 ({})", failure));
                }
                log!(format!("数据来源: {}", resolution.source));
                link.send_message(Msg::Loaded(resolution));
            });
        }
    }
}

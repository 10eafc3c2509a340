//! Update function for the site editor component.
//!
//! Elm-style: receives the current `SiteEditor` state, the `Context` and a
//! `Msg`, mutates the form, and returns whether the view should re-render.
//!
//! Saving caches the collected document in localStorage, offers it as a
//! download and, when a publish endpoint is configured, posts it to the server.
//! Failures of any of these steps are logged to the console only; the user
//! always sees the success toast, since the cached copy is enough to recover.

use common::save::save_document;
use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::browser::{publish_site_data, BlobDownload, LocalStorage};
use super::helpers::{show_toast, today_iso};
use super::messages::Msg;
use super::state::SiteEditor;

pub fn update(component: &mut SiteEditor, ctx: &Context<SiteEditor>, msg: Msg) -> bool {
    match msg {
        Msg::Loaded(resolution) => {
            component.form.render(&resolution.document);
            component.source = Some(resolution.source);
            true
        }
        Msg::SetField(field, value) => {
            component.form.set_field(field, value);
            // The input already shows the value.
            false
        }
        Msg::SetProductField(id, field, value) => {
            if let Err(e) = component.form.set_product_field(id, field, value) {
                warn!(e.to_string());
            }
            false
        }
        Msg::SetNewsField(id, field, value) => {
            if let Err(e) = component.form.set_news_field(id, field, value) {
                warn!(e.to_string());
            }
            false
        }
        Msg::AddItem(kind) => {
            component.form.add_item(kind, &today_iso());
            true
        }
        Msg::DeleteItem(kind, id) => match component.form.delete_item_by_id(kind, id) {
            Ok(()) => true,
            Err(e) => {
                warn!(e.to_string());
                false
            }
        },
        Msg::Save => {
            let config = &ctx.props().config;
            let doc = component.form.collect();

            let report = save_document(
                &doc,
                &LocalStorage,
                &config.cache_key,
                &BlobDownload,
                &config.export_file_name,
            );
            if let Some(e) = &report.cache_error {
                error!(format!("保存到本地缓存失败: {}", e));
            }
            match &report.export_error {
                Some(e) => error!(format!("无法保存到文件: {}", e)),
                None => open_top_sheet(&component.export_notice_ref),
            }

            if let Some(url) = config.publish_url.clone() {
                spawn_local(async move {
                    match publish_site_data(&url, &doc).await {
                        Ok(revision) => log!(format!("已发布到服务器, 版本 {}", revision)),
                        Err(e) => warn!(format!("发布到服务器失败: {}", e)),
                    }
                });
            }

            show_toast("保存成功！");
            false
        }
        Msg::CloseExportNotice => {
            close_top_sheet(&component.export_notice_ref);
            false
        }
    }
}

//! Browser implementations of the storage, export and fetch collaborators.

use common::model::site::SiteDocument;
use common::requests::SaveSiteDataResponse;
use common::save::Exporter;
use common::storage::KeyValueStore;
use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage, Url};

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn local_storage() -> Result<Storage, String> {
    web_sys::window()
        .ok_or("no window")?
        .local_storage()
        .map_err(js_err)?
        .ok_or_else(|| "localStorage is unavailable".to_string())
}

/// `window.localStorage`.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        local_storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        local_storage()?.set_item(key, value).map_err(js_err)
    }
}

/// Offers the contents as a file download through a temporary object URL.
pub struct BlobDownload;

impl Exporter for BlobDownload {
    fn export(&self, file_name: &str, contents: &str) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let body = document.body().ok_or("document has no body")?;

        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type("text/plain");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "could not create download link".to_string())?;
        link.set_href(&url);
        link.set_download(file_name);

        let clicked = body.append_child(&link).map(|_| link.click());
        body.remove_child(&link).ok();
        Url::revoke_object_url(&url).ok();
        clicked.map_err(js_err)
    }
}

/// Fetches the data file as text. Non-success statuses and timeouts are
/// reported as errors.
pub async fn fetch_site_data(url: &str, timeout_ms: u32) -> Result<String, String> {
    let request = Box::pin(async {
        let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(format!("{} {}", response.status(), response.status_text()));
        }
        response.text().await.map_err(|e| e.to_string())
    });
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(format!("no response after {} ms", timeout_ms)),
    }
}

/// Posts the document to the server-side write endpoint.
pub async fn publish_site_data(url: &str, doc: &SiteDocument) -> Result<String, String> {
    let response = Request::post(url)
        .json(doc)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("{} {}", response.status(), detail));
    }
    response
        .json::<SaveSiteDataResponse>()
        .await
        .map(|saved| saved.revision)
        .map_err(|e| e.to_string())
}

//! Browser Bindings
//!
//! Thin wrappers over the web APIs the admin panel touches directly:
//! local storage, dialogs, file reading and rich-text formatting.

use js_sys::Uint8Array;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use site_config::FallbackStorage;

/// Characters escaped when an upload path becomes a link
const PATH_ESCAPE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'?').add(b'%');

// ========================
// Local storage
// ========================

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl FallbackStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

// ========================
// Dialogs
// ========================

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

// ========================
// Files
// ========================

/// Read a picked file into memory
pub async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(|e| format!("{:?}", e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// First file of an `<input type="file">` change event
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Site-relative link to an uploaded file
pub fn file_link(file_path: &str) -> String {
    format!("/{}", utf8_percent_encode(file_path.trim_start_matches('/'), PATH_ESCAPE))
}

// ========================
// Rich text
// ========================

/// Apply `bold`, `italic`, `underline`, ... to the current selection
pub fn format_selection(command: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() {
        if let Err(e) = html.exec_command(command) {
            log::warn!("formatting command {} failed: {:?}", command, e);
        }
    }
}

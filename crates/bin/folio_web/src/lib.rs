//! # folio-web — browser entry point
//!
//! Composition root that wires the browser adapter to the page controllers.
//!
//! ## Responsibilities
//! - Install the panic hook and the console log subscriber
//! - Load configuration (embedded `folio.toml`, optional inline override)
//! - Construct the browser [`Platform`] and mount the [`PageSession`]
//!
//! ## Dependency rule
//! This is the **only** crate that depends on the browser adapter.
//! It is the wiring layer — no page behaviour belongs here.

pub mod config;
pub mod logging;

use folio_adapter_web_sys::WebPlatform;
use folio_app::page::PageSession;
use folio_app::ports::Platform;
use wasm_bindgen::prelude::*;

use crate::config::{Config, OVERRIDE_SCRIPT};

/// Mount the page session on `platform`.
pub fn mount<P: Platform>(platform: &P, config: &Config) -> PageSession<P> {
    let session = PageSession::mount(platform, &config.page);
    tracing::debug!(
        gallery = session.gallery.is_some(),
        widgets = ?session.widgets,
        reveal_targets = session.reveal_targets,
        "page ready"
    );
    session
}

/// Module entry point, run by the browser as soon as the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let platform = match WebPlatform::current() {
        Ok(platform) => platform,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            return;
        }
    };

    let page_override = platform.document().text_of(OVERRIDE_SCRIPT);
    let (config, rejected) = match Config::load(page_override.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = rejected {
        tracing::error!(error = %err, "page configuration rejected, using defaults");
    }

    // Registered handlers keep their own references to the controllers.
    mount(&platform, &config);
}

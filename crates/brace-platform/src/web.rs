//! Browser backends (wasm32): `localStorage` cache and `window.location`
//! redirects.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use brace_pages::SharedPlayer;
use brace_sizing::{KeyValueStore, StoreError};
use wasm_bindgen::prelude::*;

use crate::redirect::Redirector;
use crate::{LandingConfig, LogPlayer, Shell};

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self, StoreError> {
        let storage = window()
            .ok_or_else(|| StoreError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}

#[derive(Debug, Default)]
pub struct WebRedirector;

impl Redirector for WebRedirector {
    fn redirect(&mut self, url: &str) -> anyhow::Result<()> {
        let win = window().ok_or_else(|| anyhow!("no window"))?;
        win.location()
            .set_href(url)
            .map_err(|e| anyhow!("navigation to {url} failed: {e:?}"))
    }
}

/// JS entry point: installs logging and the panic hook, then builds the
/// browser shell and keeps it for the page's lifetime.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = LandingConfig::default();
    crate::logging::init_logging(&config.log_filter);
    let player: SharedPlayer = Rc::new(RefCell::new(LogPlayer::default()));
    let shell = Shell::web(config, player).map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
    crate::install(shell);
    log::info!("landing shell loaded");
    Ok(())
}

//! Outer shell: turns config into live collaborators (cache, clock, player,
//! redirector) and carries out the effects pages ask for.

pub mod config;
pub mod logging;
pub mod redirect;
pub mod store;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use brace_core::{SharedClock, system_clock};
use brace_pages::{PageContext, PageEffect, SharedPlayer, SharedResolver, shared_resolver};
use brace_sizing::{KeyValueStore, MemoryStore};
use brace_ui::{EmbedId, EmbedPlayer};

pub use config::{ConfigError, LandingConfig};
pub use logging::init_logging;
pub use redirect::{LogRedirector, Redirector};
pub use store::{JsonFileStore, Prefixed};

/// Native player stand-in; logs what a browser would mount.
#[derive(Debug, Default)]
pub struct LogPlayer {
    mounted: Option<(usize, EmbedId)>,
}

impl LogPlayer {
    pub fn mounted(&self) -> Option<&EmbedId> {
        self.mounted.as_ref().map(|(_, e)| e)
    }
}

impl EmbedPlayer for LogPlayer {
    fn mount(&mut self, slide: usize, embed: &EmbedId) {
        log::info!("player: mount slide {slide} -> {}", embed.src());
        self.mounted = Some((slide, embed.clone()));
    }

    fn unmount(&mut self, slide: usize, embed: &EmbedId) {
        log::info!("player: unmount slide {slide} ({embed})");
        self.mounted = None;
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<Shell>> = const { RefCell::new(None) };
}

/// Keeps `shell` alive for the rest of the page, replacing any earlier one.
pub fn install(shell: Shell) {
    INSTALLED.with(|slot| {
        if slot.borrow_mut().replace(shell).is_some() {
            log::warn!("shell: replacing an installed shell");
        }
    });
}

/// Runs `f` against the installed shell, if any.
pub fn with_shell<R>(f: impl FnOnce(&mut Shell) -> R) -> Option<R> {
    INSTALLED.with(|slot| slot.borrow_mut().as_mut().map(f))
}

pub struct Shell {
    pub config: LandingConfig,
    pub resolver: SharedResolver,
    pub clock: SharedClock,
    pub player: SharedPlayer,
    redirector: Box<dyn Redirector>,
}

impl Shell {
    pub fn new(
        config: LandingConfig,
        store: Box<dyn KeyValueStore>,
        player: SharedPlayer,
        redirector: Box<dyn Redirector>,
    ) -> Self {
        let resolver = shared_resolver(store, config.cart());
        Self {
            config,
            resolver,
            clock: system_clock(),
            player,
            redirector,
        }
    }

    /// Native wiring: JSON file cache when configured, otherwise in-memory.
    pub fn native(config: LandingConfig) -> anyhow::Result<Self> {
        let store: Box<dyn KeyValueStore> = match &config.store_path {
            Some(path) => {
                let file = JsonFileStore::open(path)
                    .with_context(|| format!("opening cache {}", path.display()))?;
                Box::new(Prefixed::new(file, config.storage_prefix.clone()))
            }
            None => Box::new(Prefixed::new(MemoryStore::new(), config.storage_prefix.clone())),
        };
        let player: SharedPlayer = Rc::new(RefCell::new(LogPlayer::default()));
        Ok(Self::new(config, store, player, Box::new(LogRedirector::new())))
    }

    /// Browser wiring: prefixed `localStorage` and `window.location`.
    #[cfg(target_arch = "wasm32")]
    pub fn web(config: LandingConfig, player: SharedPlayer) -> anyhow::Result<Self> {
        let storage = web::LocalStorageStore::new().context("opening localStorage")?;
        let store = Box::new(Prefixed::new(storage, config.storage_prefix.clone()));
        Ok(Self::new(config, store, player, Box::new(web::WebRedirector)))
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn context(&self) -> PageContext {
        PageContext {
            resolver: self.resolver.clone(),
            clock: self.clock.clone(),
            player: self.player.clone(),
            hero_interval: self.config.hero_interval(),
        }
    }

    pub fn perform(&mut self, effect: PageEffect) -> anyhow::Result<()> {
        match effect {
            PageEffect::None => Ok(()),
            PageEffect::ScrollToOrder => {
                log::debug!("shell: scroll to order section");
                Ok(())
            }
            PageEffect::Opened(kind) => {
                log::debug!("shell: dialog {kind:?} open");
                Ok(())
            }
            PageEffect::Redirect(order) => {
                log::info!("shell: ordering {} (variant {})", order.selection, order.variant);
                self.redirector
                    .redirect(&order.url)
                    .with_context(|| format!("redirecting to {}", order.url))
            }
            PageEffect::OpenUrl(url) => self.redirector.redirect(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brace_core::ManualClock;
    use brace_pages::HybridPage;
    use brace_sizing::Field;

    struct Shared(Rc<RefCell<Vec<String>>>);

    impl Redirector for Shared {
        fn redirect(&mut self, url: &str) -> anyhow::Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn order_effect_redirects_to_cart() {
        let visited = Rc::new(RefCell::new(Vec::new()));
        let config = LandingConfig {
            cart_base_url: "https://shop.test/cart".into(),
            ..LandingConfig::default()
        };
        let mut shell = Shell::new(
            config,
            Box::new(MemoryStore::new()),
            Rc::new(RefCell::new(LogPlayer::default())),
            Box::new(Shared(visited.clone())),
        )
        .with_clock(ManualClock::new().shared());

        let page = HybridPage::new(&shell.context()).unwrap();
        page.order.input(Field::A, "21");
        page.order.input(Field::B, "21");
        shell.perform(page.add_to_cart()).unwrap();
        assert_eq!(*visited.borrow(), vec!["https://shop.test/cart/34867137216677:1"]);
    }

    #[test]
    fn native_shell_persists_to_prefixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let config = LandingConfig {
            store_path: Some(path.clone()),
            ..LandingConfig::default()
        };
        let shell = Shell::native(config).unwrap();
        shell.resolver.borrow_mut().update(Field::A, "17");
        shell.resolver.borrow_mut().update(Field::B, "23");

        let file = JsonFileStore::open(&path).unwrap();
        assert_eq!(file.get("fl-measurement-b").as_deref(), Some("23"));
        assert_eq!(file.get("fl-strap-size").as_deref(), Some("Long"));
    }

    #[test]
    fn installed_shell_outlives_its_builder() {
        assert_eq!(with_shell(|_| ()), None);

        let visited = Rc::new(RefCell::new(Vec::new()));
        let store = Prefixed::new(MemoryStore::new(), "fl");
        install(
            Shell::new(
                LandingConfig::default(),
                Box::new(store),
                Rc::new(RefCell::new(LogPlayer::default())),
                Box::new(Shared(visited.clone())),
            )
            .with_clock(ManualClock::new().shared()),
        );

        with_shell(|shell| {
            let page = HybridPage::new(&shell.context()).unwrap();
            page.order.input(Field::A, "21");
            page.order.input(Field::B, "21");
            shell.perform(page.add_to_cart()).unwrap();
        })
        .unwrap();
        assert_eq!(visited.borrow().len(), 1);

        let restored = with_shell(|shell| shell.resolver.borrow().raw(Field::A).to_string());
        assert_eq!(restored.as_deref(), Some("21"));
    }
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

pub const KEY_MEASUREMENT_A: &str = "measurement-a";
pub const KEY_MEASUREMENT_B: &str = "measurement-b";
pub const KEY_BRACE_SIZE: &str = "brace-size";
pub const KEY_STRAP_SIZE: &str = "strap-size";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cache i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache contents are malformed: {0}")]
    Malformed(String),
    #[error("cache is unavailable: {0}")]
    Unavailable(String),
}

/// String key-value cache that outlives a session (browser storage, a JSON
/// file). No expiry; last write wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what a resolver wrote, or hand it to a second resolver.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

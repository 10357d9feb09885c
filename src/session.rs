use std::collections::HashMap;
use std::sync::Mutex;

pub const COUNTED_FLAG: &str = "counted";

pub trait SessionStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counted() -> Self {
        let store = Self::default();
        store.set(COUNTED_FLAG, "true");
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, name: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("session store poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.entries
            .lock()
            .expect("session store poisoned")
            .insert(name.to_string(), value.to_string());
    }
}

pub struct SessionGuard<S> {
    store: S,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // The first call per session is the durable transition: answering true
    // marks the session counted.
    pub fn should_increment(&self) -> bool {
        if self.store.get(COUNTED_FLAG).is_some() {
            return false;
        }
        self.mark_counted();
        true
    }

    pub fn mark_counted(&self) {
        self.store.set(COUNTED_FLAG, "true");
    }

    pub fn is_counted(&self) -> bool {
        self.store.get(COUNTED_FLAG).is_some()
    }
}

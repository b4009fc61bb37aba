// Cross-module command forwarding.
//
// A placeholder command in one module can hand its invocation to the real
// implementation in another module. Targets are looked up by module name at
// call time, because module load order is not guaranteed.

use dashmap::DashMap;
use std::sync::Arc;

/// Result of resolving a forwarding target.
pub enum Delegation<T: ?Sized> {
    Target(Arc<T>),
    Fallback(&'static str),
}

pub struct ForwardingTable<T: ?Sized> {
    targets: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Send + Sync> ForwardingTable<T> {
    pub fn new() -> Self {
        Self {
            targets: DashMap::new(),
        }
    }

    /// Register (or replace) the target exposed by `module`.
    pub fn insert(&self, module: &str, target: Arc<T>) {
        self.targets.insert(module.to_string(), target);
    }

    pub fn remove(&self, module: &str) -> bool {
        self.targets.remove(module).is_some()
    }

    #[cfg(test)]
    pub fn contains(&self, module: &str) -> bool {
        self.targets.contains_key(module)
    }

    pub fn route(&self, module: &str, fallback: &'static str) -> Delegation<T> {
        match self.targets.get(module) {
            Some(entry) => Delegation::Target(Arc::clone(entry.value())),
            None => Delegation::Fallback(fallback),
        }
    }
}

impl<T: ?Sized + Send + Sync> Default for ForwardingTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

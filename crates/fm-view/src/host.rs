//! View Host
//!
//! Activation of view components by id.

use std::collections::HashMap;

use crate::component::ViewComponent;
use crate::error::ActivationError;
use crate::signals::ViewSignals;

/// Runtime that turns a component id into a live component
pub trait ViewHost {
    fn activate(&self, iid: &str, signals: ViewSignals) -> Result<ViewComponent, ActivationError>;
}

/// Builds a component, wiring it to its signals
pub type ComponentFactory = Box<dyn Fn(ViewSignals) -> Result<ViewComponent, ActivationError>>;

/// Host backed by statically registered factories
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory; replaces any previous one for `iid`
    pub fn register<F>(&mut self, iid: &str, factory: F)
    where
        F: Fn(ViewSignals) -> Result<ViewComponent, ActivationError> + 'static,
    {
        if self
            .factories
            .insert(iid.to_string(), Box::new(factory))
            .is_some()
        {
            tracing::debug!("Replaced component factory {}", iid);
        }
    }

    pub fn unregister(&mut self, iid: &str) -> bool {
        self.factories.remove(iid).is_some()
    }

    pub fn is_registered(&self, iid: &str) -> bool {
        self.factories.contains_key(iid)
    }

    /// Registered ids, sorted
    pub fn iids(&self) -> Vec<&str> {
        let mut iids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        iids.sort_unstable();
        iids
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl ViewHost for ComponentRegistry {
    fn activate(&self, iid: &str, signals: ViewSignals) -> Result<ViewComponent, ActivationError> {
        let factory = self
            .factories
            .get(iid)
            .ok_or_else(|| ActivationError::NotRegistered(iid.to_string()))?;
        factory(signals)
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("iids", &self.iids())
            .finish()
    }
}

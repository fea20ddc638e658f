//! Synchronized service registry shared by pipeline stages.

use crate::errors::InvalidArgumentError;
use parking_lot::Mutex;
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::sync::Arc;

/// A shared service value.
pub type Service = Arc<dyn Any + Send + Sync>;

/// A string-keyed registry of opaque services, guarded by a mutex.
///
/// Stages running in parallel within a turn may call [`get`](Self::get) and
/// [`set`](Self::set) concurrently; both take the lock for one lookup or
/// insert. Keys are case-sensitive and last write wins. Prefer the typed
/// slots ([`insert`](Self::insert) / [`resolve`](Self::resolve)) when the
/// service type is known at compile time; the string keyspace remains for
/// plugin-supplied services resolved dynamically.
#[derive(Default)]
pub struct ServiceRegistry {
    services: Mutex<HashMap<String, Service>>,
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Service values are opaque; show the keyspace only.
        f.debug_struct("ServiceRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl ServiceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the service under `service_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `service_id` is empty or blank.
    pub fn set(&self, service_id: &str, service: Service) -> Result<(), InvalidArgumentError> {
        Self::validate_id(service_id)?;
        tracing::trace!(service_id = %service_id, "registering service");
        self.services.lock().insert(service_id.to_owned(), service);
        Ok(())
    }

    /// Looks up the service under `service_id`.
    ///
    /// A missing key is not an error; it yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] if `service_id` is empty or blank.
    pub fn get(&self, service_id: &str) -> Result<Option<Service>, InvalidArgumentError> {
        Self::validate_id(service_id)?;
        Ok(self.services.lock().get(service_id).cloned())
    }

    /// Inserts a typed service under its compile-time type name.
    pub fn insert<T: Any + Send + Sync>(&self, service: T) {
        self.services
            .lock()
            .insert(type_name::<T>().to_owned(), Arc::new(service));
    }

    /// Resolves a typed service previously stored with [`insert`](Self::insert).
    ///
    /// Returns `None` when the slot is empty or holds a different type.
    #[must_use]
    pub fn resolve<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.services
            .lock()
            .get(type_name::<T>())
            .cloned()
            .and_then(|service| service.downcast::<T>().ok())
    }

    /// Checks whether a key is registered.
    #[must_use]
    pub fn contains(&self, service_id: &str) -> bool {
        self.services.lock().contains_key(service_id)
    }

    /// Returns all registered keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.services.lock().keys().cloned().collect()
    }

    /// Returns the number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.lock().len()
    }

    /// Returns true if no services are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.lock().is_empty()
    }

    fn validate_id(service_id: &str) -> Result<(), InvalidArgumentError> {
        if service_id.trim().is_empty() {
            return Err(InvalidArgumentError::blank_service_id("service_id"));
        }
        Ok(())
    }
}

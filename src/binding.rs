//! A piece of state bound to one query parameter.
//!
//! `QueryBinding` reads its initial value from the location, and every
//! accepted change runs a synchronization step: re-read the query, set or
//! remove the bound key, then replace the URL in place. Observers registered
//! with [`QueryBinding::subscribe`] are called after each successful step.

use std::fmt;

use crate::config::BindingConfig;
use crate::error::{QueryError, QueryResult};
use crate::location::LocationStore;

/// Handle returned by [`QueryBinding::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&str)>;

pub struct QueryBinding<L: LocationStore> {
    location: L,
    name: String,
    default_value: String,
    value: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<L: LocationStore> QueryBinding<L> {
    /// Bind `name` on `location`.
    ///
    /// The initial value is the parameter's current value when present and
    /// non-empty, otherwise `default_value`. The URL is synchronized once
    /// before returning.
    pub fn new(
        location: L,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> QueryResult<Self> {
        let name = name.into();
        let default_value = default_value.into();
        let value = initial_value(&location, &name, &default_value)?;

        let binding = Self {
            location,
            name,
            default_value,
            value,
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        binding.synchronize()?;
        Ok(binding)
    }

    pub fn from_config(location: L, config: BindingConfig) -> QueryResult<Self> {
        Self::new(location, config.name, config.default_value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Store `value`, write it to the URL and notify subscribers.
    ///
    /// Any string is accepted. An empty string removes the parameter. If the
    /// location rejects the write the new value is still kept, but
    /// subscribers are not called.
    pub fn set_value(&mut self, value: impl Into<String>) -> QueryResult<()> {
        self.value = value.into();
        self.synchronize()?;

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.value);
        }
        Ok(())
    }

    /// Bind to a different key, carrying the current value over.
    ///
    /// The old key is removed in the same write that adds the new one.
    pub fn rename(&mut self, name: impl Into<String>) -> QueryResult<()> {
        let name = name.into();
        validate_name(&name)?;
        if name == self.name {
            return self.synchronize();
        }

        let previous = std::mem::replace(&mut self.name, name);
        tracing::debug!(from = %previous, to = %self.name, "Renaming query binding");
        sync_location(&self.location, &self.name, &self.value, Some(&previous))
    }

    /// Run the synchronization step for the current value.
    pub fn synchronize(&self) -> QueryResult<()> {
        synchronize(&self.location, &self.name, &self.value)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Drop the binding and return the location. The URL is left as written.
    pub fn into_location(self) -> L {
        self.location
    }
}

impl<L: LocationStore + fmt::Debug> fmt::Debug for QueryBinding<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBinding")
            .field("location", &self.location)
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Read the value `name` should start with.
pub fn initial_value<L: LocationStore + ?Sized>(
    location: &L,
    name: &str,
    default_value: &str,
) -> QueryResult<String> {
    validate_name(name)?;
    let query = location.read()?;
    let value = match query.get(name) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default_value.to_string(),
    };
    tracing::trace!(name, value = %value, "Read initial query value");
    Ok(value)
}

/// Write `value` under `name`, leaving every other parameter as it is now.
pub fn synchronize<L: LocationStore + ?Sized>(
    location: &L,
    name: &str,
    value: &str,
) -> QueryResult<()> {
    sync_location(location, name, value, None)
}

/// Like [`synchronize`], also removing `stale` when it is a different key.
pub fn synchronize_renamed<L: LocationStore + ?Sized>(
    location: &L,
    stale: &str,
    name: &str,
    value: &str,
) -> QueryResult<()> {
    sync_location(location, name, value, Some(stale))
}

fn sync_location<L: LocationStore + ?Sized>(
    location: &L,
    name: &str,
    value: &str,
    stale: Option<&str>,
) -> QueryResult<()> {
    validate_name(name)?;
    // Re-read so changes to other keys since the last step survive.
    let mut query = location.read()?;

    if let Some(stale) = stale.filter(|stale| *stale != name) {
        query.remove(stale);
    }

    if value.is_empty() {
        query.remove(name);
    } else {
        query.set(name, value);
    }

    tracing::debug!(
        name,
        removed = value.is_empty(),
        query = %query,
        "Synchronizing query parameter"
    );
    location.replace(&query)
}

fn validate_name(name: &str) -> QueryResult<()> {
    if name.is_empty() {
        return Err(QueryError::EmptyName);
    }
    Ok(())
}

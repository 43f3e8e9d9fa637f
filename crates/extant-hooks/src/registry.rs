//! The priority-ordered callback registry.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::HookError;

/// Priority used when a caller has no ordering requirement.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Type alias for registered callback functions.
///
/// Callbacks receive mutable access to the argument passed to
/// [`CallbackRegistry::fire`]. A callback that returns an error stops the
/// remaining callbacks for that firing.
pub type CallbackFn<A> = Rc<dyn Fn(&mut A) -> Result<(), HookError>>;

/// Opaque handle returned by [`CallbackRegistry::register`], used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallbackId(u64);

struct Entry<A> {
    id: CallbackId,
    priority: i32,
    callback: CallbackFn<A>,
}

impl<A> Clone for Entry<A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            priority: self.priority,
            callback: Rc::clone(&self.callback),
        }
    }
}

/// Maps event names to callbacks kept sorted by `(priority, insertion order)`.
///
/// Registration and execution are split: code declares what should happen at
/// a named point, and whoever owns the registry decides when that point is
/// reached by calling [`fire`](Self::fire).
///
/// # Ordering
///
/// Lower priorities run first. Callbacks sharing a priority run in the order
/// they were registered. Each per-event list is kept sorted on insert, so
/// firing never sorts.
///
/// # Example
///
/// ```rust
/// use extant_hooks::CallbackRegistry;
///
/// let mut registry: CallbackRegistry<Vec<&'static str>> = CallbackRegistry::new();
/// registry.register("init", 10, |log| {
///     log.push("late");
///     Ok(())
/// });
/// registry.register("init", 0, |log| {
///     log.push("early");
///     Ok(())
/// });
///
/// let mut log = Vec::new();
/// registry.fire("init", &mut log).unwrap();
/// assert_eq!(log, vec!["early", "late"]);
/// ```
pub struct CallbackRegistry<A> {
    events: HashMap<String, Vec<Entry<A>>>,
    next_id: u64,
}

impl<A> CallbackRegistry<A> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            events: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers `callback` to run when `event` fires.
    ///
    /// The callback is placed after every existing callback whose priority is
    /// less than or equal to `priority`.
    pub fn register<F>(&mut self, event: impl Into<String>, priority: i32, callback: F) -> CallbackId
    where
        F: Fn(&mut A) -> Result<(), HookError> + 'static,
    {
        self.register_rc(event, priority, Rc::new(callback))
    }

    /// Registers an already shared callback. Useful when the same function is
    /// attached to more than one event.
    pub fn register_rc(
        &mut self,
        event: impl Into<String>,
        priority: i32,
        callback: CallbackFn<A>,
    ) -> CallbackId {
        let event = event.into();
        let id = CallbackId(self.next_id);
        self.next_id += 1;

        let list = self.events.entry(event.clone()).or_default();
        let pos = list.partition_point(|e| e.priority <= priority);
        list.insert(
            pos,
            Entry {
                id,
                priority,
                callback,
            },
        );

        log::debug!("registered callback #{} on '{}' at priority {}", id.0, event, priority);
        id
    }

    /// Removes a previously registered callback. Returns false if the id is
    /// unknown or was already removed.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        for list in self.events.values_mut() {
            if let Some(pos) = list.iter().position(|e| e.id == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Runs every callback registered for `event` in order.
    ///
    /// Returns the number of callbacks that ran. Firing an event with no
    /// callbacks is not an error and returns `Ok(0)`.
    ///
    /// The callback list is snapshotted before the first call, so the order
    /// observed by one firing is fixed when it starts.
    pub fn fire(&self, event: &str, arg: &mut A) -> Result<usize, HookError> {
        let Some(list) = self.events.get(event) else {
            log::debug!("fired '{}' with no callbacks", event);
            return Ok(0);
        };

        let snapshot: Vec<Entry<A>> = list.clone();
        log::debug!("firing '{}' ({} callbacks)", event, snapshot.len());

        for entry in &snapshot {
            (entry.callback)(arg).map_err(|e| e.in_event(event))?;
        }
        Ok(snapshot.len())
    }

    /// Returns true if at least one callback is registered for `event`.
    pub fn has_callbacks(&self, event: &str) -> bool {
        self.events.get(event).is_some_and(|l| !l.is_empty())
    }

    /// Number of callbacks registered for `event`.
    pub fn len(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    /// Returns true if no callbacks are registered for any event.
    pub fn is_empty(&self) -> bool {
        self.events.values().all(Vec::is_empty)
    }

    /// Priorities for `event`, in execution order.
    pub fn priorities(&self, event: &str) -> Vec<i32> {
        self.events
            .get(event)
            .map(|l| l.iter().map(|e| e.priority).collect())
            .unwrap_or_default()
    }

    /// Names of all events with at least one callback, sorted.
    pub fn events(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .events
            .iter()
            .filter(|(_, l)| !l.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl<A> Default for CallbackRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for CallbackRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .events
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        f.debug_struct("CallbackRegistry")
            .field("events", &counts)
            .finish()
    }
}

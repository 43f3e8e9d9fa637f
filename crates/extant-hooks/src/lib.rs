//! # Extant Hooks - Deferred Callback Registry
//!
//! `extant-hooks` provides [`CallbackRegistry`], a string-keyed registry of
//! deferred callbacks. Code registers intent to run at a named lifecycle point
//! and the owner of the registry fires that point later.
//!
//! ```text
//! register("init", 10, register_menus)
//! register("init", 10, register_image_sizes)
//! register("after-setup", 5, theme_setup)
//!   ...
//! fire("after-setup")  → theme_setup
//! fire("init")         → register_menus, register_image_sizes
//! ```
//!
//! Ordering is fully determined by `(priority, registration order)`: lower
//! priorities run first and ties keep insertion order.
//!
//! The registry is single-threaded. Callbacks are stored as `Rc<dyn Fn>` and
//! receive `&mut A`, where `A` is whatever the firing side passes in.

mod error;
mod registry;

pub use error::HookError;
pub use registry::{CallbackFn, CallbackId, CallbackRegistry, DEFAULT_PRIORITY};

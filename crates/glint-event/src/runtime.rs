//! Runtime type registration.
//!
//! Value types that participate in generic runtime machinery register
//! a [`TypeDescriptor`] with the process-wide [`TypeRegistry`] and
//! receive a stable [`TypeId`] back. Registration is one-way: there
//! is no unregister, so an id stays valid for the life of the
//! process.
//!
//! The polymorphic behaviors themselves are **not** registered as
//! callbacks. They live on the [`RuntimeValue`] trait and dispatch
//! statically; the registry only records identity (name ↔ id).
//!
//! # Concurrency
//!
//! `TypeRegistry::global()` and each type's `register_type()` are
//! guarded by `OnceLock`, so first use from any number of threads
//! performs exactly one registration. `register()` itself takes the
//! descriptor list's write lock, so ids are allocated without gaps
//! even under concurrent registration of different types.

use std::sync::OnceLock;

use glint_types::TypeId;
use parking_lot::RwLock;

/// The registered record of a value type: its display name.
///
/// Behaviors are carried by the [`RuntimeValue`] trait rather than
/// by function pointers in the descriptor, so the descriptor reduces
/// to identity data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Display name used in descriptions and diagnostics.
    pub name: &'static str,
}

impl TypeDescriptor {
    /// Creates a descriptor with the given display name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Process-wide registry of value-type descriptors.
///
/// Identifiers start at 1; id 0 is never allocated and acts as the
/// "not a type" value.
///
/// # Example
///
/// ```
/// use glint_event::runtime::{TypeDescriptor, TypeRegistry};
///
/// let registry = TypeRegistry::global();
/// let id = registry.register(TypeDescriptor::new("Sample"));
/// assert_eq!(registry.name_of(id), Some("Sample"));
/// ```
pub struct TypeRegistry {
    names: RwLock<Vec<&'static str>>,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            names: RwLock::new(Vec::new()),
        }
    }

    /// Returns the process-wide registry, initializing it on first
    /// use. Never torn down.
    #[must_use]
    pub fn global() -> &'static TypeRegistry {
        static GLOBAL: OnceLock<TypeRegistry> = OnceLock::new();
        GLOBAL.get_or_init(TypeRegistry::new)
    }

    /// Registers a descriptor and allocates its [`TypeId`].
    ///
    /// Every call allocates a fresh id; idempotence per type is the
    /// caller's concern (see [`RuntimeValue::register_type`], which
    /// caches the id behind a `OnceLock`).
    pub fn register(&self, descriptor: TypeDescriptor) -> TypeId {
        let mut names = self.names.write();
        names.push(descriptor.name);
        let id = TypeId(names.len() as u64);
        tracing::debug!(name = descriptor.name, %id, "registered runtime type");
        id
    }

    /// Returns the display name registered for `id`, or `None` for
    /// ids this registry never allocated.
    #[must_use]
    pub fn name_of(&self, id: TypeId) -> Option<&'static str> {
        let names = self.names.read();
        let index = usize::try_from(id.raw()).ok()?.checked_sub(1)?;
        names.get(index).copied()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    /// Returns `true` if nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The closed capability set generic runtime machinery invokes on a
/// registered value type.
///
/// Runtime machinery may hold a *nullable* reference to a value when
/// it invokes a behavior (during debugging or introspection), so
/// every behavior is total over `Option<&Self>`:
///
/// - [`copy_value`](Self::copy_value): `None` in, `None` out
/// - [`equal_values`](Self::equal_values): `false` if either side is
///   `None`, including both
/// - [`describe`](Self::describe): a null sentinel string for `None`
///
/// # Example
///
/// ```
/// use glint_event::{InputEvent, RuntimeValue};
///
/// // Null inputs never fail, they yield the documented defaults.
/// assert!(InputEvent::copy_value(None).is_none());
/// assert!(!InputEvent::equal_values(None, None));
/// assert!(InputEvent::describe(None).contains("null"));
/// ```
pub trait RuntimeValue: Sized {
    /// Display name carried by this type's descriptor.
    const NAME: &'static str;

    /// Registers this type with the global registry, exactly once
    /// per process, and returns its stable [`TypeId`]. Later calls
    /// return the cached id without re-registering.
    fn register_type() -> TypeId;

    /// Returns this type's [`TypeId`], registering on first use.
    ///
    /// Routing through [`register_type`](Self::register_type) means
    /// there is no "queried before registration" ordering to get
    /// wrong.
    #[must_use]
    fn type_id() -> TypeId {
        Self::register_type()
    }

    /// Copies a value. `None` yields `None`.
    fn copy_value(value: Option<&Self>) -> Option<Self>;

    /// Structural equality. `false` if either side is `None`.
    fn equal_values(a: Option<&Self>, b: Option<&Self>) -> bool;

    /// Human-readable description, total over null input.
    fn describe(value: Option<&Self>) -> String;
}

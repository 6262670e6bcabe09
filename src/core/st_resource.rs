use std::{
    rc::Rc,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` wraps a value in `Rc<RwLock<T>>`. The interaction core runs on a single
/// game-state thread, so the handle is `!Send`.
///
/// # Examples
///
/// ```
/// use voxel_interaction::core::StResource;
///
/// let resource = StResource::new(vec![1, 2, 3]);
/// let shared = resource.clone();
///
/// shared.get_mut().push(4);
/// assert_eq!(resource.get().len(), 4);
/// assert!(resource.ptr_eq(&shared));
/// ```
///
/// # Panics
/// - Panics if the lock is poisoned
/// - Panics (or deadlocks) if a write guard is requested while another guard from the
///   same handle is still alive on this thread
pub struct StResource<T> {
    pub resource: Rc<RwLock<T>>,
}

impl<T> StResource<T> {
    /// Creates a new `StResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Rc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard for the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap()
    }

    /// Returns a mutable guard for the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap()
    }

    /// Whether two handles point at the same resource.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.resource, &other.resource)
    }

    /// Number of live handles to this resource.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.resource)
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

use crate::boxed::TypedBox;
use crate::error::BoxError;
use std::any::Any;
use std::sync::{Arc, Mutex};

/// A thread-safe, shareable [`TypedBox`].
///
/// `SharedBox` wraps a `TypedBox` in `Arc<Mutex<_>>` so one slot can be
/// shared between components and threads. Cloning a `SharedBox` produces
/// another handle to the *same* slot; to get an independent deep copy of the
/// contents, clone the inner [`TypedBox`] via [`snapshot`].
///
/// [`snapshot`]: SharedBox::snapshot
///
/// # Examples
///
/// ```
/// use typed_box::{SharedBox, BoxError};
/// use std::thread;
///
/// let shared = SharedBox::new();
/// shared.store(0i32)?;
///
/// let writer = shared.clone();
/// thread::spawn(move || {
///     writer.with_mut(|n: &mut i32| *n += 1).unwrap();
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.get::<i32>()?, 1);
/// # Ok::<(), BoxError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedBox {
    inner: Arc<Mutex<TypedBox>>,
}

impl SharedBox {
    /// Creates a new, empty shared box.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TypedBox::new())),
        }
    }

    /// Stores a value, replacing whatever the slot held before.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::LockError` if the internal lock cannot be acquired.
    pub fn store<T: Any + Send + Sync + Clone>(&self, value: T) -> Result<(), BoxError> {
        let mut boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.store(value);
        Ok(())
    }

    /// Retrieves a clone of the stored value as type `T`.
    ///
    /// # Errors
    ///
    /// - Returns `BoxError::LockError` if the internal lock cannot be acquired
    /// - Returns `BoxError::TypeMismatch` if the slot is empty or holds a
    ///   different type
    pub fn get<T: Any + Send + Sync + Clone>(&self) -> Result<T, BoxError> {
        let boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.get::<T>()
    }

    /// Accesses the stored value with a read-only closure, without cloning.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](SharedBox::get).
    pub fn with<T: 'static, F, R>(&self, f: F) -> Result<R, BoxError>
    where
        F: FnOnce(&T) -> R,
    {
        let boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.with(f)
    }

    /// Accesses the stored value with a read-write closure. The lock is held
    /// for the duration of the closure, so concurrent updates serialize.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](SharedBox::get).
    pub fn with_mut<T: 'static, F, R>(&self, f: F) -> Result<R, BoxError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.with_mut(f)
    }

    /// Moves the stored value out, leaving the slot empty. On a type
    /// mismatch the value is left in place.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](SharedBox::get).
    pub fn take<T: Any + Send + Sync>(&self) -> Result<T, BoxError> {
        let mut boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.take::<T>()
    }

    /// Drops the stored value, if any. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::LockError` if the internal lock cannot be acquired.
    pub fn clear(&self) -> Result<(), BoxError> {
        let mut boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        boxed.clear();
        Ok(())
    }

    /// Returns true if a value is currently stored.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::LockError` if the internal lock cannot be acquired.
    pub fn has_value(&self) -> Result<bool, BoxError> {
        let boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        Ok(boxed.has_value())
    }

    /// Returns the type name of the stored value, or `None` if the slot is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::LockError` if the internal lock cannot be acquired.
    pub fn stored_type(&self) -> Result<Option<&'static str>, BoxError> {
        let boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        Ok(boxed.stored_type())
    }

    /// Returns an independent deep copy of the slot as a plain [`TypedBox`].
    /// Later changes through this handle do not affect the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::LockError` if the internal lock cannot be acquired.
    pub fn snapshot(&self) -> Result<TypedBox, BoxError> {
        let boxed = self.inner.lock().map_err(|_| BoxError::LockError)?;
        Ok(boxed.clone())
    }
}

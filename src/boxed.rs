use crate::error::{BoxError, EMPTY_CONTAINER};
use crate::payload::Payload;
use std::any::{type_name, Any};
use std::fmt;

/// A single-slot container that holds one value of an arbitrary type,
/// checked at retrieval time.
///
/// Unlike a typemap, a `TypedBox` has no keys: it holds at most one value,
/// and the same box can hold values of different types over its lifetime.
/// The type tag is recorded when a value is stored, so retrieval can reject
/// a mismatched type assertion with a descriptive error instead of
/// corrupting memory or panicking.
///
/// `TypedBox` is a plain single-owner value; it is not internally
/// synchronized. To share one across threads, use [`SharedBox`] or add your
/// own locking.
///
/// [`SharedBox`]: crate::SharedBox
///
/// # Examples
///
/// ```
/// use typed_box::{TypedBox, BoxError};
///
/// let mut container = TypedBox::new();
/// container.store(100i32);
///
/// assert_eq!(container.get::<i32>()?, 100);
///
/// // Asking for the wrong type fails, and the value stays put
/// assert!(container.get::<f64>().is_err());
/// assert_eq!(container.get::<i32>()?, 100);
/// # Ok::<(), BoxError>(())
/// ```
#[derive(Clone, Default)]
pub struct TypedBox {
    slot: Option<Payload>,
}

impl TypedBox {
    /// Creates a new, empty box.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Stores a value, replacing and dropping whatever the box held before.
    ///
    /// The value's runtime type is recorded alongside it; a later [`get`]
    /// must name the same type to succeed. Storing never fails.
    ///
    /// [`get`]: TypedBox::get
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_box::TypedBox;
    ///
    /// let mut container = TypedBox::new();
    /// container.store(42i32);
    /// container.store("replaced".to_string()); // the i32 is gone
    /// assert_eq!(container.stored_type(), Some("alloc::string::String"));
    /// ```
    pub fn store<T: Any + Send + Sync + Clone>(&mut self, value: T) {
        self.slot = Some(Payload::new(value));
    }

    /// Retrieves a clone of the stored value as type `T`.
    ///
    /// The box is not modified, so the value can be retrieved again.
    ///
    /// # Errors
    ///
    /// Returns `BoxError::TypeMismatch` if the box is empty (the actual type
    /// reads `"empty container"`), or if the stored value is not a `T`.
    pub fn get<T: Any + Send + Sync + Clone>(&self) -> Result<T, BoxError> {
        let payload = self
            .slot
            .as_ref()
            .ok_or_else(|| BoxError::empty(type_name::<T>()))?;

        payload
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| BoxError::mismatch(type_name::<T>(), payload.type_name()))
    }

    /// Accesses the stored value with a read-only closure, without cloning.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_box::{TypedBox, BoxError};
    ///
    /// let mut container = TypedBox::new();
    /// container.store(vec![1, 2, 3]);
    ///
    /// // Inspect without cloning the vector
    /// let len = container.with(|v: &Vec<i32>| v.len())?;
    /// assert_eq!(len, 3);
    /// # Ok::<(), BoxError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](TypedBox::get).
    pub fn with<T: 'static, F, R>(&self, f: F) -> Result<R, BoxError>
    where
        F: FnOnce(&T) -> R,
    {
        let payload = self
            .slot
            .as_ref()
            .ok_or_else(|| BoxError::empty(type_name::<T>()))?;

        match payload.downcast_ref::<T>() {
            Some(value) => Ok(f(value)),
            None => Err(BoxError::mismatch(type_name::<T>(), payload.type_name())),
        }
    }

    /// Accesses the stored value with a read-write closure, modifying it in
    /// place.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_box::{TypedBox, BoxError};
    ///
    /// let mut container = TypedBox::new();
    /// container.store(vec![1, 2, 3]);
    ///
    /// container.with_mut(|v: &mut Vec<i32>| v.push(4))?;
    /// assert_eq!(container.get::<Vec<i32>>()?, vec![1, 2, 3, 4]);
    /// # Ok::<(), BoxError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](TypedBox::get).
    pub fn with_mut<T: 'static, F, R>(&mut self, f: F) -> Result<R, BoxError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let payload = self
            .slot
            .as_mut()
            .ok_or_else(|| BoxError::empty(type_name::<T>()))?;

        let actual = payload.type_name();
        match payload.downcast_mut::<T>() {
            Some(value) => Ok(f(value)),
            None => Err(BoxError::mismatch(type_name::<T>(), actual)),
        }
    }

    /// Moves the stored value out of the box, leaving it empty.
    ///
    /// On a type mismatch the value is left in place, still retrievable with
    /// the correct type.
    ///
    /// # Errors
    ///
    /// Same conditions as [`get`](TypedBox::get).
    pub fn take<T: Any + Send + Sync>(&mut self) -> Result<T, BoxError> {
        match self.slot.as_ref() {
            None => Err(BoxError::empty(type_name::<T>())),
            Some(payload) if !payload.is_type::<T>() => {
                Err(BoxError::mismatch(type_name::<T>(), payload.type_name()))
            }
            Some(_) => {
                // Tag already checked, into_inner cannot miss.
                let payload = self
                    .slot
                    .take()
                    .ok_or_else(|| BoxError::empty(type_name::<T>()))?;
                payload
                    .into_inner::<T>()
                    .ok_or_else(|| BoxError::empty(type_name::<T>()))
            }
        }
    }

    /// Drops the stored value, if any, returning the box to the empty state.
    /// Idempotent.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns true if a value is currently stored.
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns the type name of the stored value, or `None` if the box is
    /// empty. Intended for diagnostics; type checks always compare `TypeId`s,
    /// never names.
    pub fn stored_type(&self) -> Option<&'static str> {
        self.slot.as_ref().map(|payload| payload.type_name())
    }
}

impl fmt::Debug for TypedBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TypedBox")
            .field("holding", &self.stored_type().unwrap_or(EMPTY_CONTAINER))
            .finish()
    }
}

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Object-safe capability set every storable value provides: duplicate itself
/// behind the erased pointer, and expose itself as `Any` for downcasting.
/// Release is `Drop` on the owning `Box`.
pub(crate) trait PayloadClone: Any + Send + Sync {
    fn clone_boxed(&self) -> Box<dyn PayloadClone>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> PayloadClone for T
where
    T: Any + Send + Sync + Clone,
{
    fn clone_boxed(&self) -> Box<dyn PayloadClone> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A type-erased value paired with its runtime type tag. The tag is recorded
/// when the payload is created, so it always describes the value it travels
/// with.
pub(crate) struct Payload {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn PayloadClone>,
}

impl Payload {
    /// Wrap a value, recording its `TypeId` and human-readable type name.
    pub(crate) fn new<T: Any + Send + Sync + Clone>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Check if the contained value is of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Consume the payload and recover the concrete value. The caller must
    /// have already checked the tag; a mismatch here is unreachable.
    pub(crate) fn into_inner<T: 'static>(self) -> Option<T> {
        self.value.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl Clone for Payload {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            value: self.value.clone_boxed(),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Payload")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

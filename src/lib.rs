//! # typed-box
//!
//! A single-slot, type-safe value container.
//!
//! `typed-box` provides a container that can hold one value of any type at a
//! time, discovered and checked at the point of retrieval. The box records
//! the runtime type of whatever it holds, so asking for the wrong type back
//! produces a descriptive error instead of undefined behavior or a panic.
//! This is useful anywhere a component needs to carry an opaque value on
//! behalf of code that does know the concrete type: plugin slots, user-data
//! fields, deferred configuration, and the like.
//!
//! ## Key Features
//!
//! - **Type-safe**: retrieval is checked at runtime against the stored type
//! - **Self-describing errors**: mismatches report both the expected and the
//!   actual type name
//! - **Owning**: the box exclusively owns its payload; cloning a box deep-
//!   copies the payload, so clones never alias
//! - **Optional sharing**: [`SharedBox`] wraps the same slot in
//!   `Arc<Mutex<_>>` for cross-thread use
//! - **No macros**: pure runtime solution built on `std::any`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use typed_box::{TypedBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     let mut container = TypedBox::new();
//!
//!     // Store a value; any previous content is dropped
//!     container.store(100i32);
//!
//!     // Retrieve it by asserting the expected type
//!     let n = container.get::<i32>()?;
//!     println!("Stored int: {}", n);
//!
//!     // Asserting the wrong type fails, and the value stays available
//!     match container.get::<f64>() {
//!         Ok(value) => println!("Value: {}", value),
//!         Err(BoxError::TypeMismatch { expected, actual }) => {
//!             println!("Wanted {} but the box holds {}", expected, actual)
//!         }
//!         Err(e) => println!("Other error: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Reusing One Box Across Types
//!
//! The type tag travels with the payload, not the box, so the same box can
//! hold different types over its lifetime:
//!
//! ```rust
//! use typed_box::{TypedBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     let mut container = TypedBox::new();
//!
//!     container.store(42i32);
//!     assert_eq!(container.get::<i32>()?, 42);
//!
//!     container.store("hello".to_string());
//!     assert_eq!(container.get::<String>()?, "hello");
//!
//!     container.clear();
//!     assert!(!container.has_value());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Using with_mut to Modify the Payload In-Place
//!
//! ```rust
//! use typed_box::{TypedBox, BoxError};
//! use std::collections::HashMap;
//!
//! fn main() -> Result<(), BoxError> {
//!     let mut container = TypedBox::new();
//!
//!     let mut counters = HashMap::new();
//!     counters.insert("visits".to_string(), 0);
//!     container.store(counters);
//!
//!     // Update a counter in-place, no clone of the map
//!     container.with_mut(|counters: &mut HashMap<String, i32>| {
//!         let visits = counters.entry("visits".to_string()).or_insert(0);
//!         *visits += 1;
//!     })?;
//!
//!     let visits = container.with(|counters: &HashMap<String, i32>| {
//!         counters.get("visits").copied().unwrap_or(0)
//!     })?;
//!     println!("Visit count: {}", visits);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Deep Copies
//!
//! Cloning a box duplicates the payload; the clone and the original never
//! alias:
//!
//! ```rust
//! use typed_box::{TypedBox, BoxError};
//!
//! fn main() -> Result<(), BoxError> {
//!     let mut original = TypedBox::new();
//!     original.store("x".to_string());
//!
//!     let copy = original.clone();
//!     original.clear();
//!
//!     // The copy still holds its own duplicate
//!     assert_eq!(copy.get::<String>()?, "x");
//!     Ok(())
//! }
//! ```
//!
//! ### Sharing a Slot Between Threads
//!
//! `TypedBox` itself is single-owner; for shared use, [`SharedBox`] puts the
//! slot behind a lock:
//!
//! ```rust
//! use typed_box::{SharedBox, BoxError};
//! use std::thread;
//!
//! fn main() -> Result<(), BoxError> {
//!     let shared = SharedBox::new();
//!     shared.store(0i64)?;
//!
//!     let mut handles = vec![];
//!     for _ in 0..4 {
//!         let slot = shared.clone();
//!         handles.push(thread::spawn(move || {
//!             for _ in 0..100 {
//!                 slot.with_mut(|n: &mut i64| *n += 1).unwrap();
//!             }
//!         }));
//!     }
//!     for handle in handles {
//!         handle.join().unwrap();
//!     }
//!
//!     assert_eq!(shared.get::<i64>()?, 400);
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use typed_box::{TypedBox, BoxError};
//!
//! let container = TypedBox::new();
//!
//! // Retrieval from an empty box reports "empty container" as the actual type
//! match container.get::<i32>() {
//!     Ok(value) => println!("Value: {}", value),
//!     Err(BoxError::TypeMismatch { expected, actual }) => {
//!         println!("Expected {}, box holds {}", expected, actual)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

mod boxed;
mod error;
mod payload;
mod shared;

pub use boxed::TypedBox;
pub use error::BoxError;
pub use shared::SharedBox;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};

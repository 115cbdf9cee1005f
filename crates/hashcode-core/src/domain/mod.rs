//! Domain model for descriptor-driven hashing
//!
//! - `FieldDescriptor` / `EntityDescriptor`: compile-time field metadata
//! - `HashFields`: types that expose an ordered field list
//! - `HashCode`: entities that compute their own hash code
//! - `FieldAccessor` / `FieldSelection`: ordered field reads

mod accessor;
mod descriptor;
mod traits;


pub use accessor::{FieldAccessor, FieldEntry, FieldSelection};
pub use descriptor::{EntityDescriptor, FieldDescriptor, FieldGetter};
pub use traits::{HashCode, HashFields};

//! Per-value hash contract for fields that take part in hash combining.

use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

use super::fnv::fnv1a_32;

/// Hash contribution of an absent value.
pub const NULL_HASH: i32 = 0;

/// A value that yields a deterministic 32-bit hash.
///
/// Unlike [`std::hash::Hash`], the result does not depend on a hasher
/// implementation or a per-process random key: the same value always
/// produces the same `i32`. This is what makes hash codes comparable
/// between two separately constructed entities.
///
/// # Examples
///
/// ```
/// use hashcode_core::{FieldHash, NULL_HASH};
///
/// assert_eq!(42i32.field_hash(), 42);
/// assert_eq!(true.field_hash(), 1);
/// assert_eq!(None::<i32>.field_hash(), NULL_HASH);
/// assert_eq!("Gerhard".field_hash(), String::from("Gerhard").field_hash());
/// ```
pub trait FieldHash: Debug {
    /// Returns the hash of this value.
    fn field_hash(&self) -> i32;
}

macro_rules! impl_field_hash_widening {
    ($($t:ty),*) => {
        $(
            impl FieldHash for $t {
                #[inline]
                fn field_hash(&self) -> i32 {
                    i32::from(*self)
                }
            }
        )*
    };
}

impl_field_hash_widening!(i8, i16, i32, u8, u16);

impl FieldHash for u32 {
    #[inline]
    fn field_hash(&self) -> i32 {
        *self as i32
    }
}

impl FieldHash for i64 {
    #[inline]
    fn field_hash(&self) -> i32 {
        fold_u64(*self as u64)
    }
}

impl FieldHash for u64 {
    #[inline]
    fn field_hash(&self) -> i32 {
        fold_u64(*self)
    }
}

impl FieldHash for isize {
    #[inline]
    fn field_hash(&self) -> i32 {
        (*self as i64).field_hash()
    }
}

impl FieldHash for usize {
    #[inline]
    fn field_hash(&self) -> i32 {
        (*self as u64).field_hash()
    }
}

impl FieldHash for bool {
    #[inline]
    fn field_hash(&self) -> i32 {
        i32::from(*self)
    }
}

impl FieldHash for char {
    #[inline]
    fn field_hash(&self) -> i32 {
        u32::from(*self) as i32
    }
}

// Positive and negative zero compare equal, so they must hash equal.
impl FieldHash for f32 {
    fn field_hash(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            self.to_bits() as i32
        }
    }
}

impl FieldHash for f64 {
    fn field_hash(&self) -> i32 {
        if *self == 0.0 {
            0
        } else {
            fold_u64(self.to_bits())
        }
    }
}

impl FieldHash for str {
    #[inline]
    fn field_hash(&self) -> i32 {
        fnv1a_32(self.as_bytes()) as i32
    }
}

impl FieldHash for String {
    #[inline]
    fn field_hash(&self) -> i32 {
        self.as_str().field_hash()
    }
}

impl<T: FieldHash + ?Sized> FieldHash for &T {
    #[inline]
    fn field_hash(&self) -> i32 {
        (**self).field_hash()
    }
}

impl<T: FieldHash + ?Sized> FieldHash for Box<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        (**self).field_hash()
    }
}

impl<T: FieldHash + ?Sized> FieldHash for Rc<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        (**self).field_hash()
    }
}

impl<T: FieldHash + ?Sized> FieldHash for Arc<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        (**self).field_hash()
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    #[inline]
    fn field_hash(&self) -> i32 {
        match self {
            Some(value) => value.field_hash(),
            None => NULL_HASH,
        }
    }
}

// Low and high halves xor-ed together.
#[inline]
fn fold_u64(value: u64) -> i32 {
    (value as i32) ^ ((value >> 32) as i32)
}

//! Index types for mesh elements.
//!
//! This module provides type-safe index wrappers for vertices, directed
//! edges, and triangles. All indices are `u32` with `u32::MAX` reserved as
//! the invalid sentinel.
//!
//! Edge and face indices are coupled: the directed edges of triangle `t`
//! occupy slots `3t`, `3t + 1`, `3t + 2` of the edge array, so the owning
//! triangle of an edge is recovered by integer division and never stored.

use std::fmt::{self, Debug};

/// The sentinel value representing an invalid/null index.
pub const INVALID_INDEX: u32 = u32::MAX;

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe directed-edge index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId(u32);

/// A type-safe triangle index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < INVALID_INDEX as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Create an invalid/null index.
            #[inline]
            pub fn invalid() -> Self {
                Self(INVALID_INDEX)
            }

            /// Get the index as a usize.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw `u32` value.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }

            /// Check if this is a valid (non-null) index.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != INVALID_INDEX
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(EdgeId, "E");
impl_index_type!(FaceId, "F");

impl EdgeId {
    /// The triangle this edge belongs to (`edge / 3`).
    #[inline]
    pub fn face(self) -> FaceId {
        FaceId(self.0 / 3)
    }

    /// The corner slot of this edge within its triangle (0, 1, or 2).
    #[inline]
    pub fn corner(self) -> usize {
        (self.0 % 3) as usize
    }
}

impl FaceId {
    /// The directed edge at corner `k` of this triangle (`3 * face + k`).
    ///
    /// # Panics
    /// Panics in debug builds if `k >= 3`.
    #[inline]
    pub fn edge(self, k: usize) -> EdgeId {
        debug_assert!(k < 3, "corner {} out of range", k);
        EdgeId(3 * self.0 + k as u32)
    }

    /// All three directed edges of this triangle.
    #[inline]
    pub fn edges(self) -> [EdgeId; 3] {
        [self.edge(0), self.edge(1), self.edge(2)]
    }
}

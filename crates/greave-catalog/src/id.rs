// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Strongly Typed Catalog Ids
//!
//! Phantom-typed wrappers around the catalog's `u32` ids. `TypedId<T>`
//! carries a tag type `T: IdTag` that encodes which entity kind the id names,
//! while compiling down to a transparent `u32` (no runtime overhead).
//!
//! Catalog ids are opaque keys assigned by the data files — unlike dense
//! indices they are never offset or iterated arithmetically, so no arithmetic
//! operators are provided. Ids serialize transparently as plain numbers, the
//! way the catalog data files spell them.

use std::marker::PhantomData;

/// A trait to tag typed ids with a name for debugging and display purposes.
pub trait IdTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed id associated with a specific tag type `T`.
///
/// This struct wraps a `u32` id and uses a phantom type parameter `T`
/// to prevent mixing ids of different catalog entity kinds.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedId<T> {
    id: u32,
    _marker: PhantomData<T>,
}

impl<T> TypedId<T> {
    /// Creates a new `TypedId` with the given raw `u32` id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// Returns the raw `u32` id.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.id
    }
}

impl<T: IdTag> std::fmt::Display for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.id)
    }
}

impl<T: IdTag> std::fmt::Debug for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.id)
    }
}

impl<T> From<u32> for TypedId<T> {
    #[inline]
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl<T> From<TypedId<T>> for u32 {
    #[inline]
    fn from(id: TypedId<T>) -> Self {
        id.get()
    }
}

impl<T> serde::Serialize for TypedId<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.id)
    }
}

impl<'de, T> serde::Deserialize<'de> for TypedId<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::new)
    }
}

macro_rules! declare_id {
    ($kind:literal, $tag:ident, $alias:ident, $name:literal) => {
        #[doc = concat!("A tag type for ", $kind, " ids.")]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub struct $tag;

        impl IdTag for $tag {
            const NAME: &'static str = $name;
        }

        #[doc = concat!("A typed id for ", $kind, " records.")]
        pub type $alias = TypedId<$tag>;
    };
}

declare_id!("skill", SkillIdTag, SkillId, "SkillId");
declare_id!("armor-piece", ArmorIdTag, ArmorId, "ArmorId");
declare_id!("armor-set", SetIdTag, SetId, "SetId");
declare_id!("set-bonus", BonusIdTag, BonusId, "BonusId");
declare_id!("charm", CharmIdTag, CharmId, "CharmId");
declare_id!("jewel", JewelIdTag, JewelId, "JewelId");

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

//! # Greave Catalog
//!
//! **The static equipment catalog consumed by the Greave loadout solver.**
//!
//! This crate models the externally-supplied, already-validated game catalog
//! — skills, armor pieces, armor sets with their bonuses, charms, and jewels
//! — and builds the read-only lookup index the model generator and solution
//! decoder work against.
//!
//! ## Architecture
//!
//! * **`id`**: Phantom-tagged `u32` ids (`SkillId`, `ArmorId`, ...) so an
//!   armor id can never be used to look up a charm.
//! * **`entity`**: The catalog records, deserialized with the exact field
//!   names of the upstream data files.
//! * **`index`**: `CatalogIndex` — id→record maps plus the derived merged
//!   set-bonus records.
//! * **`loading`**: JSON loading with a structured error type.
//!
//! ## Lifecycle
//!
//! A catalog is loaded once per process, indexed once, and read-only from
//! then on. `CatalogIndex` borrows the catalog and is safe to share across
//! threads for concurrent reads.

pub mod entity;
pub mod id;
pub mod index;
pub mod loading;

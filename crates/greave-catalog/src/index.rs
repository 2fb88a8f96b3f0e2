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

//! The read-only lookup index over one loaded catalog.
//!
//! Built once, then shared by reference into the model generator and the
//! solution decoder. Besides the plain id→record maps, the index derives the
//! **merged set-bonus records**: armor sets that share one `SetBonus` id are
//! folded into a single record carrying the union of their member piece ids,
//! so the bonus can be modeled (and its progress reported) across all sets
//! that contribute to it.

use crate::entity::{ArmorPiece, ArmorSet, BonusRank, Catalog, Charm, Jewel, Skill};
use crate::id::{ArmorId, BonusId, CharmId, JewelId, SetId, SkillId};
use rustc_hash::{FxHashMap, FxHashSet};

/// A set bonus aggregated over every armor set that carries it.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedBonus {
    pub id: BonusId,
    /// The bonus definition's threshold tiers (shared by all carrying sets).
    pub ranks: Vec<BonusRank>,
    /// The carrying sets, in catalog order.
    pub set_ids: Vec<SetId>,
    /// Union of the carrying sets' member piece ids, first-appearance order.
    pub piece_ids: Vec<ArmorId>,
}

impl MergedBonus {
    /// Counts how many of `worn` belong to this bonus's piece union.
    pub fn worn_pieces(&self, worn: &FxHashSet<ArmorId>) -> usize {
        self.piece_ids.iter().filter(|id| worn.contains(id)).count()
    }
}

/// Id→record maps over one catalog, plus the derived merged bonuses.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    catalog: &'a Catalog,
    skills: FxHashMap<SkillId, &'a Skill>,
    armors: FxHashMap<ArmorId, &'a ArmorPiece>,
    sets: FxHashMap<SetId, &'a ArmorSet>,
    charms: FxHashMap<CharmId, &'a Charm>,
    jewels: FxHashMap<JewelId, &'a Jewel>,
    merged_bonuses: Vec<MergedBonus>,
    bonus_slots: FxHashMap<BonusId, usize>,
}

impl<'a> CatalogIndex<'a> {
    /// Indexes `catalog`. The catalog is externally validated; duplicate ids
    /// within one entity kind are a data defect and the last record wins.
    pub fn new(catalog: &'a Catalog) -> Self {
        let skills = catalog.skills.iter().map(|s| (s.id, s)).collect();
        let armors = catalog.armors.iter().map(|a| (a.id, a)).collect();
        let sets = catalog.sets.iter().map(|s| (s.id, s)).collect();
        let charms = catalog.charms.iter().map(|c| (c.id, c)).collect();
        let jewels = catalog.jewels.iter().map(|j| (j.id, j)).collect();

        let mut merged_bonuses: Vec<MergedBonus> = Vec::new();
        let mut bonus_slots: FxHashMap<BonusId, usize> = FxHashMap::default();
        let mut seen_pieces: FxHashMap<BonusId, FxHashSet<ArmorId>> = FxHashMap::default();

        for set in &catalog.sets {
            let Some(bonus) = &set.bonus else { continue };

            let slot = *bonus_slots.entry(bonus.id).or_insert_with(|| {
                merged_bonuses.push(MergedBonus {
                    id: bonus.id,
                    ranks: bonus.ranks.clone(),
                    set_ids: Vec::new(),
                    piece_ids: Vec::new(),
                });
                merged_bonuses.len() - 1
            });

            let merged = &mut merged_bonuses[slot];
            merged.set_ids.push(set.id);

            let seen = seen_pieces.entry(bonus.id).or_default();
            for piece in &set.pieces {
                if seen.insert(piece.id) {
                    merged.piece_ids.push(piece.id);
                }
            }
        }

        Self {
            catalog,
            skills,
            armors,
            sets,
            charms,
            jewels,
            merged_bonuses,
            bonus_slots,
        }
    }

    /// Returns the indexed catalog.
    #[inline]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Looks up a skill by id.
    #[inline]
    pub fn skill(&self, id: SkillId) -> Option<&'a Skill> {
        self.skills.get(&id).copied()
    }

    /// Looks up an armor piece by id.
    #[inline]
    pub fn armor(&self, id: ArmorId) -> Option<&'a ArmorPiece> {
        self.armors.get(&id).copied()
    }

    /// Looks up an armor set by id.
    #[inline]
    pub fn set(&self, id: SetId) -> Option<&'a ArmorSet> {
        self.sets.get(&id).copied()
    }

    /// Looks up a charm by id.
    #[inline]
    pub fn charm(&self, id: CharmId) -> Option<&'a Charm> {
        self.charms.get(&id).copied()
    }

    /// Looks up a jewel by id.
    #[inline]
    pub fn jewel(&self, id: JewelId) -> Option<&'a Jewel> {
        self.jewels.get(&id).copied()
    }

    /// The merged set bonuses, in first-appearance catalog order.
    #[inline]
    pub fn merged_bonuses(&self) -> &[MergedBonus] {
        &self.merged_bonuses
    }

    /// Looks up a merged bonus by bonus id.
    #[inline]
    pub fn merged_bonus(&self, id: BonusId) -> Option<&MergedBonus> {
        self.bonus_slots.get(&id).map(|&slot| &self.merged_bonuses[slot])
    }
}

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

//! The catalog records, shaped exactly like the upstream data files.
//!
//! Field names and nesting are part of the external data contract
//! (`armorSet`, `armours`, lowercase slot kinds): existing catalog files must
//! deserialize unchanged. Unknown fields in the data are ignored.

use crate::id::{ArmorId, BonusId, CharmId, JewelId, SetId, SkillId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The size category of an equipment socket, and the minimum size a jewel
/// needs to fit it. Rank 1 is the smallest.
pub type SocketRank = u8;

/// One `(skill, level)` grant as it appears throughout the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGrant {
    pub skill: SkillId,
    pub level: i64,
}

/// The equipment slot an armor piece occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Head,
    Chest,
    Arms,
    Waist,
    Legs,
}

impl SlotKind {
    /// All slot kinds, in the order the catalog data lists them.
    pub const ALL: [SlotKind; 5] = [
        SlotKind::Head,
        SlotKind::Chest,
        SlotKind::Arms,
        SlotKind::Waist,
        SlotKind::Legs,
    ];

    /// The slot's lowercase name as spelled in the data files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::Head => "head",
            SlotKind::Chest => "chest",
            SlotKind::Arms => "arms",
            SlotKind::Waist => "waist",
            SlotKind::Legs => "legs",
        }
    }
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One rank of a skill: a level with descriptive text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRank {
    pub level: i64,
    #[serde(default)]
    pub description: String,
}

/// A skill. Only the id and the number of ranks matter to the model; the
/// rest is presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    pub ranks: Vec<SkillRank>,
}

impl Skill {
    /// The highest level this skill can reach.
    #[inline]
    pub fn level_cap(&self) -> usize {
        self.ranks.len()
    }
}

/// Reference to the armor set a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRef {
    pub id: SetId,
}

/// One wearable armor piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorPiece {
    pub id: ArmorId,
    pub name: String,
    #[serde(rename = "type")]
    pub slot: SlotKind,
    pub skills: SmallVec<[SkillGrant; 2]>,
    /// The socket ranks this piece carries, e.g. `[1, 2]`.
    pub slots: SmallVec<[SocketRank; 3]>,
    #[serde(rename = "armorSet")]
    pub armor_set: SetRef,
}

impl ArmorPiece {
    /// Number of sockets on this piece.
    #[inline]
    pub fn socket_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of sockets of exactly `rank` on this piece.
    #[inline]
    pub fn sockets_of_rank(&self, rank: SocketRank) -> usize {
        self.slots.iter().filter(|&&r| r == rank).count()
    }

    /// Total direct grant this piece provides for `skill`, 0 when none.
    pub fn granted_level(&self, skill: SkillId) -> i64 {
        self.skills
            .iter()
            .filter(|g| g.skill == skill)
            .map(|g| g.level)
            .sum()
    }
}

/// Reference to a member piece of an armor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRef {
    pub id: ArmorId,
}

/// One threshold tier of a set bonus: wear at least `pieces` pieces of the
/// set and `skill` is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRank {
    pub pieces: usize,
    pub skill: SkillGrant,
}

/// A set bonus definition. Multiple armor sets may share one bonus id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetBonus {
    pub id: BonusId,
    pub ranks: Vec<BonusRank>,
}

/// An armor set: an ordered list of member pieces plus an optional bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorSet {
    pub id: SetId,
    pub name: String,
    pub pieces: Vec<PieceRef>,
    #[serde(default)]
    pub bonus: Option<SetBonus>,
}

/// One rank of a charm. Ranks are cumulative upgrades, not stackable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharmRank {
    #[serde(default)]
    pub level: i64,
    pub skills: SmallVec<[SkillGrant; 2]>,
}

/// An upgradeable charm. Only the highest rank's grants are ever active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charm {
    pub id: CharmId,
    pub name: String,
    pub ranks: Vec<CharmRank>,
}

impl Charm {
    /// The rank whose grants are in effect when the charm is worn: the
    /// highest one.
    #[inline]
    pub fn active_rank(&self) -> Option<&CharmRank> {
        self.ranks.last()
    }

    /// Grant this charm's active rank provides for `skill`, 0 when none.
    pub fn granted_level(&self, skill: SkillId) -> i64 {
        self.active_rank()
            .map(|rank| {
                rank.skills
                    .iter()
                    .filter(|g| g.skill == skill)
                    .map(|g| g.level)
                    .sum()
            })
            .unwrap_or(0)
    }
}

/// A socketable jewel. `slot` is the minimum socket rank it fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jewel {
    pub id: JewelId,
    pub name: String,
    pub slot: SocketRank,
    pub skills: SmallVec<[SkillGrant; 2]>,
}

impl Jewel {
    /// Grant this jewel provides for `skill`, 0 when none.
    pub fn granted_level(&self, skill: SkillId) -> i64 {
        self.skills
            .iter()
            .filter(|g| g.skill == skill)
            .map(|g| g.level)
            .sum()
    }
}

/// The full static catalog, as one deserializable document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub skills: Vec<Skill>,
    #[serde(rename = "armours")]
    pub armors: Vec<ArmorPiece>,
    pub sets: Vec<ArmorSet>,
    pub charms: Vec<Charm>,
    pub jewels: Vec<Jewel>,
}

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

//! The structured loadout report produced by decoding a solution.
//!
//! Everything here is presentation-independent data; the `Display`
//! implementation renders the classic grouped text view (items, set bonus
//! progress, socket usage, aggregated skills) but callers are free to render
//! the fields any way they like.

use greave_catalog::entity::{SkillGrant, SlotKind, SocketRank};
use greave_catalog::id::{ArmorId, BonusId, CharmId, JewelId, SkillId};

/// One worn armor piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WornPiece {
    pub id: ArmorId,
    pub name: String,
    pub slot: SlotKind,
}

/// The worn charm, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WornCharm {
    pub id: CharmId,
    pub name: String,
}

/// `quantity` copies of one jewel placed in sockets of `socket_rank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JewelPlacement {
    pub jewel: JewelId,
    pub name: String,
    pub socket_rank: SocketRank,
    pub quantity: i64,
}

/// Progress toward one rank of a set bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankProgress {
    /// Pieces required by this rank.
    pub required_pieces: usize,
    /// Pieces of the bonus's union actually worn.
    pub worn_pieces: usize,
    /// Whether the rank's grant is in effect.
    pub active: bool,
    /// The skill the rank grants when active.
    pub grant: SkillGrant,
}

/// Progress of one merged set bonus touched by the worn pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusProgress {
    pub bonus: BonusId,
    /// Names of the armor sets carrying this bonus, in catalog order.
    pub set_names: Vec<String>,
    pub ranks: Vec<RankProgress>,
}

/// Socket supply and demand at one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketUsage {
    pub rank: SocketRank,
    /// Sockets of this rank offered by the worn armor.
    pub offered: usize,
    /// Jewels placed at this rank.
    pub filled: i64,
}

/// Aggregated level of one skill across all sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTotal {
    pub skill: SkillId,
    pub name: String,
    pub level: i64,
}

/// The decoded loadout: what to wear, what to socket, and what it adds up to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadoutReport {
    /// Worn armor pieces, ordered by id.
    pub pieces: Vec<WornPiece>,
    /// The worn charm, at most one.
    pub charm: Option<WornCharm>,
    /// Jewel placements, ordered by (jewel id, socket rank).
    pub jewels: Vec<JewelPlacement>,
    /// Bonus progress for every set bonus a worn piece contributes to.
    pub bonuses: Vec<BonusProgress>,
    /// Socket usage per rank with any supply or demand.
    pub sockets: Vec<SocketUsage>,
    /// Skill totals, ordered by skill id.
    pub skills: Vec<SkillTotal>,
}

impl LoadoutReport {
    /// Returns `true` when the loadout wears nothing and sockets nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty() && self.charm.is_none() && self.jewels.is_empty()
    }

    /// Returns the aggregated level for `skill`, 0 when absent.
    pub fn skill_level(&self, skill: SkillId) -> i64 {
        self.skills
            .iter()
            .find(|t| t.skill == skill)
            .map(|t| t.level)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for LoadoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.pieces.is_empty() || self.charm.is_some() {
            writeln!(f, "ITEMS")?;
            for piece in &self.pieces {
                writeln!(f, "  {} ({})", piece.name, piece.slot)?;
            }
            if let Some(charm) = &self.charm {
                writeln!(f, "  {}", charm.name)?;
            }
        }

        if !self.jewels.is_empty() {
            writeln!(f, "JEWELS")?;
            for placement in &self.jewels {
                writeln!(
                    f,
                    "  {}x {} @ rank {}",
                    placement.quantity, placement.name, placement.socket_rank
                )?;
            }
        }

        if !self.bonuses.is_empty() {
            writeln!(f, "ARMOUR SETS")?;
            for bonus in &self.bonuses {
                write!(f, "  {}:", bonus.set_names.join(" + "))?;
                for (rank, progress) in bonus.ranks.iter().enumerate() {
                    write!(
                        f,
                        " R{}[{}/{}]",
                        rank + 1,
                        progress.worn_pieces,
                        progress.required_pieces
                    )?;
                }
                writeln!(f)?;
            }
        }

        if !self.sockets.is_empty() {
            writeln!(f, "SOCKETS")?;
            for usage in &self.sockets {
                writeln!(
                    f,
                    "  rank {}: {}/{} filled",
                    usage.rank, usage.filled, usage.offered
                )?;
            }
        }

        if !self.skills.is_empty() {
            writeln!(f, "SKILLS")?;
            for total in &self.skills {
                writeln!(f, "  [{}] {}: {}", total.skill.get(), total.name, total.level)?;
            }
        }

        Ok(())
    }
}

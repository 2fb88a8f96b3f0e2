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

use greave_catalog::entity::SocketRank;
use greave_catalog::id::{ArmorId, BonusId, CharmId, JewelId, SkillId};

/// One required `(skill, minimum level)` pair of a loadout query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRequirement {
    pub skill: SkillId,
    pub level: i64,
}

impl SkillRequirement {
    /// Creates a requirement for `skill` at least at `level`.
    #[inline]
    pub fn new(skill: SkillId, level: i64) -> Self {
        Self { skill, level }
    }
}

/// What a model variable stands for.
///
/// Serialized variable names use a compact prefix format (`a{id}`, `c{id}`,
/// `sb{bonus}r{rank}`, `j{id}s{rank}`) for the external engine's benefit,
/// but decoding never parses those strings: every variable carries its kind,
/// and the decoder branches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Binary: the armor piece is worn.
    Armor(ArmorId),
    /// Binary: the charm is worn.
    Charm(CharmId),
    /// Binary: the given rank of a merged set bonus is active.
    BonusRank { bonus: BonusId, rank: usize },
    /// Non-negative integer: how many of the jewel sit in sockets of the
    /// given rank.
    Jewel { jewel: JewelId, socket: SocketRank },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_constructor() {
        let req = SkillRequirement::new(SkillId::new(3), 2);
        assert_eq!(req.skill, SkillId::new(3));
        assert_eq!(req.level, 2);
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let armor = VarKind::Armor(ArmorId::new(1));
        let jewel = VarKind::Jewel {
            jewel: JewelId::new(1),
            socket: 1,
        };
        assert_ne!(armor, jewel);
        assert!(matches!(armor, VarKind::Armor(id) if id.get() == 1));
    }
}

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

//! Decoding a raw variable assignment back into a loadout report.
//!
//! The decoder trusts the variable *kinds*, never the variable *names*: each
//! model variable was tagged at generation time, so recovering the worn items
//! is a map walk, not a string parse.
//!
//! Skill totals and bonus activation are **recomputed from the worn pieces**
//! rather than read off the solver's activation variables. Activation
//! variables can carry numeric slack at the threshold; counting worn set
//! members is exact and keeps the report honest regardless of how the engine
//! rounded.

use crate::generator::LoadoutModel;
use crate::kind::VarKind;
use crate::report::{
    BonusProgress, JewelPlacement, LoadoutReport, RankProgress, SkillTotal, SocketUsage,
    WornCharm, WornPiece,
};
use greave_catalog::entity::SocketRank;
use greave_catalog::id::{ArmorId, CharmId, JewelId, SkillId};
use greave_catalog::index::CatalogIndex;
use greave_mip::result::SolveResult;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// The error type for solution decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A variable referenced a catalog id that no longer resolves.
    MissingCatalogEntry { kind: &'static str, id: u32 },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCatalogEntry { kind, id } => {
                write!(f, "missing catalog entry: {} {}", kind, id)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

fn missing(kind: &'static str, id: u32) -> DecodeError {
    DecodeError::MissingCatalogEntry { kind, id }
}

/// Recovers the loadout encoded by a solved model's variable assignment.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDecoder<'a> {
    index: &'a CatalogIndex<'a>,
}

impl<'a> SolutionDecoder<'a> {
    /// Creates a decoder over `index`.
    #[inline]
    pub fn new(index: &'a CatalogIndex<'a>) -> Self {
        Self { index }
    }

    /// Decodes `result` against the model it came from.
    ///
    /// Worn variables are read as truthy when nonzero (binaries arrive as
    /// 0/1 up to engine rounding); jewel quantities are rounded to the
    /// nearest integer and kept when positive.
    pub fn decode(
        &self,
        loadout: &LoadoutModel,
        result: &SolveResult,
    ) -> Result<LoadoutReport, DecodeError> {
        let mut worn_armor: Vec<ArmorId> = Vec::new();
        let mut worn_charms: Vec<CharmId> = Vec::new();
        let mut placements: Vec<(JewelId, SocketRank, i64)> = Vec::new();

        for (name, kind) in loadout.kinds() {
            let value = result.variable(name);
            match *kind {
                VarKind::Armor(id) => {
                    if value > 0.5 {
                        worn_armor.push(id);
                    }
                }
                VarKind::Charm(id) => {
                    if value > 0.5 {
                        worn_charms.push(id);
                    }
                }
                VarKind::Jewel { jewel, socket } => {
                    let quantity = value.round() as i64;
                    if quantity > 0 {
                        placements.push((jewel, socket, quantity));
                    }
                }
                // Recomputed from worn pieces below.
                VarKind::BonusRank { .. } => {}
            }
        }

        worn_armor.sort();
        worn_charms.sort();
        placements.sort_by_key(|&(jewel, socket, _)| (jewel, socket));

        debug_assert!(
            worn_charms.len() <= 1,
            "called `SolutionDecoder::decode` on an assignment wearing {} charms",
            worn_charms.len()
        );

        let mut pieces = Vec::with_capacity(worn_armor.len());
        for &id in &worn_armor {
            let piece = self
                .index
                .armor(id)
                .ok_or_else(|| missing("armor piece", id.get()))?;
            pieces.push(WornPiece {
                id,
                name: piece.name.clone(),
                slot: piece.slot,
            });
        }

        let charm = match worn_charms.first().copied() {
            Some(id) => {
                let charm = self
                    .index
                    .charm(id)
                    .ok_or_else(|| missing("charm", id.get()))?;
                Some(WornCharm {
                    id,
                    name: charm.name.clone(),
                })
            }
            None => None,
        };

        let mut jewels = Vec::with_capacity(placements.len());
        for &(id, socket_rank, quantity) in &placements {
            let jewel = self
                .index
                .jewel(id)
                .ok_or_else(|| missing("jewel", id.get()))?;
            jewels.push(JewelPlacement {
                jewel: id,
                name: jewel.name.clone(),
                socket_rank,
                quantity,
            });
        }

        // Skill totals, recomputed from scratch.
        let mut totals: BTreeMap<SkillId, i64> = BTreeMap::new();

        for &id in &worn_armor {
            let piece = self.index.armor(id).expect("resolved above");
            for grant in &piece.skills {
                *totals.entry(grant.skill).or_insert(0) += grant.level;
            }
        }

        if let Some(worn) = &charm {
            let charm = self.index.charm(worn.id).expect("resolved above");
            if let Some(rank) = charm.active_rank() {
                for grant in &rank.skills {
                    *totals.entry(grant.skill).or_insert(0) += grant.level;
                }
            }
        }

        let worn_set: FxHashSet<ArmorId> = worn_armor.iter().copied().collect();
        let mut bonuses = Vec::new();
        for merged in self.index.merged_bonuses() {
            let worn_pieces = merged.worn_pieces(&worn_set);
            if worn_pieces == 0 {
                continue;
            }

            let mut ranks = Vec::with_capacity(merged.ranks.len());
            for rank in &merged.ranks {
                let active = worn_pieces >= rank.pieces;
                if active {
                    *totals.entry(rank.skill.skill).or_insert(0) += rank.skill.level;
                }
                ranks.push(RankProgress {
                    required_pieces: rank.pieces,
                    worn_pieces,
                    active,
                    grant: rank.skill,
                });
            }

            let mut set_names = Vec::with_capacity(merged.set_ids.len());
            for &set_id in &merged.set_ids {
                let set = self
                    .index
                    .set(set_id)
                    .ok_or_else(|| missing("armor set", set_id.get()))?;
                set_names.push(set.name.clone());
            }

            bonuses.push(BonusProgress {
                bonus: merged.id,
                set_names,
                ranks,
            });
        }

        for placement in &jewels {
            let jewel = self.index.jewel(placement.jewel).expect("resolved above");
            for grant in &jewel.skills {
                *totals.entry(grant.skill).or_insert(0) += grant.level * placement.quantity;
            }
        }

        // Socket supply vs. demand per rank.
        let max_rank = pieces
            .iter()
            .filter_map(|p| {
                self.index
                    .armor(p.id)
                    .and_then(|a| a.slots.iter().copied().max())
            })
            .chain(jewels.iter().map(|j| j.socket_rank))
            .max()
            .unwrap_or(0);
        let mut sockets = Vec::new();
        for rank in 1..=max_rank {
            let offered: usize = worn_armor
                .iter()
                .filter_map(|&id| self.index.armor(id))
                .map(|a| a.sockets_of_rank(rank))
                .sum();
            let filled: i64 = jewels
                .iter()
                .filter(|j| j.socket_rank == rank)
                .map(|j| j.quantity)
                .sum();
            if offered > 0 || filled > 0 {
                sockets.push(SocketUsage {
                    rank,
                    offered,
                    filled,
                });
            }
        }

        let mut skills = Vec::with_capacity(totals.len());
        for (skill_id, level) in totals {
            let skill = self
                .index
                .skill(skill_id)
                .ok_or_else(|| missing("skill", skill_id.get()))?;
            skills.push(SkillTotal {
                skill: skill_id,
                name: skill.name.clone(),
                level,
            });
        }

        Ok(LoadoutReport {
            pieces,
            charm,
            jewels,
            bonuses,
            sockets,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::LoadoutModelGenerator;
    use crate::kind::SkillRequirement;
    use greave_catalog::entity::{
        ArmorPiece, ArmorSet, BonusRank, Catalog, Charm, CharmRank, Jewel, PieceRef, SetBonus,
        SetRef, Skill, SkillGrant, SkillRank, SlotKind,
    };
    use greave_catalog::id::{BonusId, SetId};
    use greave_mip::status::PrimalStatus;
    use rustc_hash::FxHashMap;
    use smallvec::smallvec;

    fn fixture() -> Catalog {
        Catalog {
            skills: vec![
                Skill {
                    id: SkillId::new(1),
                    name: "Attack Boost".to_string(),
                    ranks: vec![SkillRank {
                        level: 1,
                        description: String::new(),
                    }],
                },
                Skill {
                    id: SkillId::new(3),
                    name: "Guardian Spirit".to_string(),
                    ranks: vec![SkillRank {
                        level: 1,
                        description: String::new(),
                    }],
                },
            ],
            armors: vec![
                ArmorPiece {
                    id: ArmorId::new(1),
                    name: "Anja Helm".to_string(),
                    slot: SlotKind::Head,
                    skills: smallvec![SkillGrant {
                        skill: SkillId::new(1),
                        level: 2,
                    }],
                    slots: smallvec![1, 1],
                    armor_set: SetRef {
                        id: SetId::new(100),
                    },
                },
                ArmorPiece {
                    id: ArmorId::new(2),
                    name: "Anja Mail".to_string(),
                    slot: SlotKind::Chest,
                    skills: smallvec![],
                    slots: smallvec![2],
                    armor_set: SetRef {
                        id: SetId::new(100),
                    },
                },
            ],
            sets: vec![ArmorSet {
                id: SetId::new(100),
                name: "Anja".to_string(),
                pieces: vec![
                    PieceRef { id: ArmorId::new(1) },
                    PieceRef { id: ArmorId::new(2) },
                ],
                bonus: Some(SetBonus {
                    id: BonusId::new(50),
                    ranks: vec![BonusRank {
                        pieces: 2,
                        skill: SkillGrant {
                            skill: SkillId::new(3),
                            level: 1,
                        },
                    }],
                }),
            }],
            charms: vec![Charm {
                id: CharmId::new(20),
                name: "Attack Charm".to_string(),
                ranks: vec![
                    CharmRank {
                        level: 1,
                        skills: smallvec![SkillGrant {
                            skill: SkillId::new(1),
                            level: 1,
                        }],
                    },
                    CharmRank {
                        level: 2,
                        skills: smallvec![SkillGrant {
                            skill: SkillId::new(1),
                            level: 2,
                        }],
                    },
                ],
            }],
            jewels: vec![Jewel {
                id: JewelId::new(30),
                name: "Attack Jewel 1".to_string(),
                slot: 1,
                skills: smallvec![SkillGrant {
                    skill: SkillId::new(1),
                    level: 1,
                }],
            }],
        }
    }

    /// A `SolveResult` as an engine would report it for a hand-picked
    /// assignment.
    fn assignment(values: &[(&str, f64)]) -> SolveResult {
        let variables: FxHashMap<String, f64> = values
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect();
        SolveResult {
            solved: true,
            status_text: PrimalStatus::Optimal.status_text().to_string(),
            objective: 0.0,
            variables,
            constraints: FxHashMap::default(),
        }
    }

    #[test]
    fn test_hand_constructed_assignment_round_trips() {
        let catalog = fixture();
        let index = CatalogIndex::new(&catalog);
        let loadout = LoadoutModelGenerator::new(&index, GeneratorConfig::default()).generate(&[
            SkillRequirement::new(SkillId::new(1), 4),
            SkillRequirement::new(SkillId::new(3), 1),
        ]);

        let result = assignment(&[
            ("a1", 1.0),
            ("a2", 1.0),
            ("c20", 1.0),
            ("sb50r0", 1.0),
            ("j30s1", 2.0),
        ]);

        let report = SolutionDecoder::new(&index)
            .decode(&loadout, &result)
            .expect("decode should succeed");

        assert_eq!(
            report.pieces.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![ArmorId::new(1), ArmorId::new(2)]
        );
        assert_eq!(report.charm.as_ref().map(|c| c.id), Some(CharmId::new(20)));
        assert_eq!(report.jewels.len(), 1);
        assert_eq!(report.jewels[0].jewel, JewelId::new(30));
        assert_eq!(report.jewels[0].socket_rank, 1);
        assert_eq!(report.jewels[0].quantity, 2);

        // 2 (helm) + 2 (charm highest rank) + 2 (two jewels) = 6 attack;
        // both pieces worn activates the bonus for guardian 1.
        assert_eq!(report.skill_level(SkillId::new(1)), 6);
        assert_eq!(report.skill_level(SkillId::new(3)), 1);

        // Bonus progress is recomputed from worn pieces.
        assert_eq!(report.bonuses.len(), 1);
        let progress = &report.bonuses[0].ranks[0];
        assert!(progress.active);
        assert_eq!(progress.worn_pieces, 2);
        assert_eq!(progress.required_pieces, 2);

        // Two rank-1 sockets on the helm, one rank-2 socket on the mail.
        assert_eq!(
            report.sockets,
            vec![
                SocketUsage {
                    rank: 1,
                    offered: 2,
                    filled: 2,
                },
                SocketUsage {
                    rank: 2,
                    offered: 1,
                    filled: 0,
                },
            ]
        );
    }

    #[test]
    fn test_bonus_activation_ignores_solver_activation_variable() {
        // The engine claims the bonus is active, but only one piece is worn:
        // the recomputation must say inactive and grant nothing.
        let catalog = fixture();
        let index = CatalogIndex::new(&catalog);
        let loadout = LoadoutModelGenerator::new(&index, GeneratorConfig::default())
            .generate(&[SkillRequirement::new(SkillId::new(3), 1)]);

        let result = assignment(&[("a1", 1.0), ("sb50r0", 1.0)]);
        let report = SolutionDecoder::new(&index)
            .decode(&loadout, &result)
            .unwrap();

        assert_eq!(report.skill_level(SkillId::new(3)), 0);
        assert!(!report.bonuses[0].ranks[0].active);
        assert_eq!(report.bonuses[0].ranks[0].worn_pieces, 1);
    }

    #[test]
    fn test_stale_id_reports_missing_catalog_entry() {
        let catalog = fixture();
        let index = CatalogIndex::new(&catalog);
        let loadout = LoadoutModelGenerator::new(&index, GeneratorConfig::default())
            .generate(&[SkillRequirement::new(SkillId::new(1), 1)]);

        // Decode against an index built over a catalog missing the armor.
        let mut stripped = catalog.clone();
        stripped.armors.clear();
        let stale_index = CatalogIndex::new(&stripped);

        let result = assignment(&[("a1", 1.0)]);
        let err = SolutionDecoder::new(&stale_index)
            .decode(&loadout, &result)
            .unwrap_err();

        assert_eq!(
            err,
            DecodeError::MissingCatalogEntry {
                kind: "armor piece",
                id: 1
            }
        );
        assert_eq!(format!("{}", err), "missing catalog entry: armor piece 1");
    }

    #[test]
    fn test_empty_assignment_decodes_to_empty_report() {
        let catalog = fixture();
        let index = CatalogIndex::new(&catalog);
        let loadout = LoadoutModelGenerator::new(&index, GeneratorConfig::default())
            .generate(&[SkillRequirement::new(SkillId::new(1), 1)]);

        let report = SolutionDecoder::new(&index)
            .decode(&loadout, &assignment(&[]))
            .unwrap();

        assert!(report.is_empty());
        assert!(report.bonuses.is_empty());
        assert!(report.sockets.is_empty());
        assert!(report.skills.is_empty());
    }
}

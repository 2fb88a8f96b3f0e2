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

//! Loadout model generation: from skill requirements to a MIP instance.
//!
//! The generator filters the catalog down to the items that can matter to the
//! query, then emits variables and constraints into a fresh `ModelBuilder`:
//!
//! 1. **Relevance filtering.** A set bonus is relevant iff one of its ranks
//!    grants a required skill; an armor piece iff it belongs to a relevant
//!    bonus's piece union, carries more than one socket, or directly grants a
//!    required skill; a charm iff its highest rank grants one; a jewel iff it
//!    grants one. Irrelevant items are excluded from the model entirely and
//!    can never appear in a solution. This is a deliberate tractability
//!    policy, not an accident: an optimal loadout under this policy only uses
//!    items that are interesting for the query.
//! 2. **Variables.** One binary "worn" variable per relevant armor piece and
//!    charm, one binary "activated" variable per (relevant bonus, rank), and
//!    one integer quantity variable per (relevant jewel, eligible socket
//!    rank). A socket rank is eligible when it is at least the jewel's
//!    required rank and no larger than the largest socket any armor piece in
//!    the catalog carries; a jewel with no eligible rank gets no variables.
//! 3. **Constraints.** Slot exclusivity, big-M bonus activation, one
//!    `skill{id}` row per requirement, and (when enabled) per-rank socket
//!    capacity.
//! 4. **Objective.** Reward spare sockets, penalize worn items, penalize
//!    jewels by size.
//!
//! Pathological queries still produce well-formed models: zero requirements
//! yield a trivial model whose optimum is the empty loadout, and a
//! requirement nothing can contribute to yields an empty constraint row that
//! no assignment satisfies. The generator never fails; infeasibility is the
//! engine's verdict to report.

use crate::config::GeneratorConfig;
use crate::kind::{SkillRequirement, VarKind};
use greave_catalog::entity::{ArmorPiece, Charm, Jewel, SocketRank};
use greave_catalog::id::{ArmorId, SkillId};
use greave_catalog::index::{CatalogIndex, MergedBonus};
use greave_mip::constraint::CmpOp;
use greave_mip::engine::SolverEngine;
use greave_mip::linear::LinearCombination;
use greave_mip::model::ModelBuilder;
use greave_mip::result::SolveResult;
use greave_mip::variable::VarHandle;
use rustc_hash::{FxHashMap, FxHashSet};

/// One generated loadout model: the MIP instance plus the kind of every
/// variable in it. Single-use, like the `ModelBuilder` it wraps.
#[derive(Debug)]
pub struct LoadoutModel {
    model: ModelBuilder,
    kinds: FxHashMap<String, VarKind>,
}

impl LoadoutModel {
    /// Returns the underlying MIP instance.
    #[inline]
    pub fn model(&self) -> &ModelBuilder {
        &self.model
    }

    /// Returns the kind of every declared variable, by name.
    #[inline]
    pub fn kinds(&self) -> &FxHashMap<String, VarKind> {
        &self.kinds
    }

    /// Returns what the named variable stands for.
    #[inline]
    pub fn kind_of(&self, name: &str) -> Option<VarKind> {
        self.kinds.get(name).copied()
    }

    /// Renders the model in the engine text format.
    #[inline]
    pub fn serialize(&self) -> String {
        self.model.serialize()
    }

    /// Hands the model to `engine` and returns the uniform result.
    #[inline]
    pub fn solve<E>(&self, engine: &E) -> SolveResult
    where
        E: SolverEngine + ?Sized,
    {
        self.model.solve(engine)
    }
}

/// Builds one `LoadoutModel` per query against a shared, read-only
/// `CatalogIndex`.
#[derive(Debug, Clone, Copy)]
pub struct LoadoutModelGenerator<'a> {
    index: &'a CatalogIndex<'a>,
    config: GeneratorConfig,
}

impl<'a> LoadoutModelGenerator<'a> {
    /// Creates a generator over `index` with the given configuration.
    #[inline]
    pub fn new(index: &'a CatalogIndex<'a>, config: GeneratorConfig) -> Self {
        Self { index, config }
    }

    /// Returns the generator's configuration.
    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Encodes `requirements` into a fresh model. Never fails; see the
    /// module docs for how degenerate queries degrade.
    pub fn generate(&self, requirements: &[SkillRequirement]) -> LoadoutModel {
        let catalog = self.index.catalog();
        let required: FxHashSet<SkillId> = requirements.iter().map(|r| r.skill).collect();

        // Relevance filtering.
        let bonuses: Vec<&MergedBonus> = self
            .index
            .merged_bonuses()
            .iter()
            .filter(|b| {
                !b.ranks.is_empty() && b.ranks.iter().any(|r| required.contains(&r.skill.skill))
            })
            .collect();
        let bonus_piece_ids: FxHashSet<ArmorId> = bonuses
            .iter()
            .flat_map(|b| b.piece_ids.iter().copied())
            .collect();
        let armors: Vec<&ArmorPiece> = catalog
            .armors
            .iter()
            .filter(|a| {
                bonus_piece_ids.contains(&a.id)
                    || a.socket_count() > 1
                    || a.skills.iter().any(|g| required.contains(&g.skill))
            })
            .collect();
        let charms: Vec<&Charm> = catalog
            .charms
            .iter()
            .filter(|c| {
                c.active_rank()
                    .is_some_and(|r| r.skills.iter().any(|g| required.contains(&g.skill)))
            })
            .collect();
        let jewels: Vec<&Jewel> = catalog
            .jewels
            .iter()
            .filter(|j| j.skills.iter().any(|g| required.contains(&g.skill)))
            .collect();

        // The largest socket that physically exists in the catalog bounds
        // which ranks a jewel can be placed at.
        let max_socket_rank: SocketRank = catalog
            .armors
            .iter()
            .flat_map(|a| a.slots.iter().copied())
            .max()
            .unwrap_or(0);

        let mut model = ModelBuilder::new();
        let mut kinds: FxHashMap<String, VarKind> = FxHashMap::default();

        // Worn variables.
        let mut armor_vars: FxHashMap<ArmorId, VarHandle> = FxHashMap::default();
        for a in &armors {
            let handle = model.add_binary_variable(format!("a{}", a.id.get()));
            kinds.insert(handle.name().to_string(), VarKind::Armor(a.id));
            armor_vars.insert(a.id, handle);
        }
        let mut charm_vars: Vec<(&Charm, VarHandle)> = Vec::with_capacity(charms.len());
        for c in &charms {
            let handle = model.add_binary_variable(format!("c{}", c.id.get()));
            kinds.insert(handle.name().to_string(), VarKind::Charm(c.id));
            charm_vars.push((*c, handle));
        }

        // Activation variables, one per (bonus, rank).
        let mut bonus_vars: Vec<(&MergedBonus, Vec<VarHandle>)> = Vec::with_capacity(bonuses.len());
        for b in &bonuses {
            let mut rank_vars = Vec::with_capacity(b.ranks.len());
            for rank in 0..b.ranks.len() {
                let handle = model.add_binary_variable(format!("sb{}r{}", b.id.get(), rank));
                kinds.insert(
                    handle.name().to_string(),
                    VarKind::BonusRank { bonus: b.id, rank },
                );
                rank_vars.push(handle);
            }
            bonus_vars.push((*b, rank_vars));
        }

        // Jewel quantity variables, one per (jewel, eligible socket rank).
        let mut jewel_vars: Vec<(&Jewel, SocketRank, VarHandle)> = Vec::new();
        for j in &jewels {
            for rank in j.slot..=max_socket_rank {
                let handle = model.add_integer_variable(format!("j{}s{}", j.id.get(), rank));
                kinds.insert(
                    handle.name().to_string(),
                    VarKind::Jewel {
                        jewel: j.id,
                        socket: rank,
                    },
                );
                jewel_vars.push((*j, rank, handle));
            }
        }

        // At most one piece per equipment slot; the charm slot is its own
        // exclusivity group.
        for slot in greave_catalog::entity::SlotKind::ALL {
            let mut row = LinearCombination::new();
            for a in armors.iter().filter(|a| a.slot == slot) {
                row.add_term(armor_vars[&a.id].name(), 1.0);
            }
            if row.is_empty() {
                continue;
            }
            model.add_constraint(format!("single{}", slot.as_str()), row, CmpOp::Le, 1.0);
        }
        if !charm_vars.is_empty() {
            let mut row = LinearCombination::new();
            for (_, handle) in &charm_vars {
                row.add_term(handle.name(), 1.0);
            }
            model.add_constraint("singlecharms", row, CmpOp::Le, 1.0);
        }

        // Big-M activation linearization, per bonus rank requiring P pieces:
        //   force:    sum(worn) - M*act < P      (act cannot stay 0 once P pieces are worn)
        //   restrict: M*act - sum(worn) < M - P  (act cannot be 1 below P pieces)
        // LP text consumers read the strict operator as its non-strict form.
        for (b, rank_vars) in &bonus_vars {
            for (rank, handle) in rank_vars.iter().enumerate() {
                let threshold = b.ranks[rank].pieces as f64;
                let mut force = LinearCombination::new();
                let mut restrict = LinearCombination::new();
                for piece_id in &b.piece_ids {
                    if let Some(worn) = armor_vars.get(piece_id) {
                        force.add_term(worn.name(), 1.0);
                        restrict.add_term(worn.name(), -1.0);
                    }
                }
                force.add_term(handle.name(), -self.config.big_m);
                restrict.add_term(handle.name(), self.config.big_m);

                model.add_constraint(format!("{}force", handle.name()), force, CmpOp::Lt, threshold);
                model.add_constraint(
                    format!("{}restrict", handle.name()),
                    restrict,
                    CmpOp::Lt,
                    self.config.big_m - threshold,
                );
            }
        }

        // One row per required skill, over every source that grants it. A
        // requirement no relevant item contributes to produces an empty row
        // that no assignment satisfies.
        for req in requirements {
            let mut row = LinearCombination::new();
            for a in &armors {
                let level = a.granted_level(req.skill);
                if level != 0 {
                    row.add_term(armor_vars[&a.id].name(), level as f64);
                }
            }
            for (c, handle) in &charm_vars {
                let level = c.granted_level(req.skill);
                if level != 0 {
                    row.add_term(handle.name(), level as f64);
                }
            }
            for (b, rank_vars) in &bonus_vars {
                for (rank, handle) in rank_vars.iter().enumerate() {
                    let grant = b.ranks[rank].skill;
                    if grant.skill == req.skill {
                        row.add_term(handle.name(), grant.level as f64);
                    }
                }
            }
            for (j, _, handle) in &jewel_vars {
                let level = j.granted_level(req.skill);
                if level != 0 {
                    row.add_term(handle.name(), level as f64);
                }
            }
            model.add_constraint(
                format!("skill{}", req.skill.get()),
                row,
                CmpOp::Ge,
                req.level as f64,
            );
        }

        // Jewels placed at a rank may not exceed the sockets of that rank
        // offered by worn armor.
        if self.config.enforce_socket_capacity {
            for rank in 1..=max_socket_rank {
                let mut row = LinearCombination::new();
                for (_, placed_rank, handle) in &jewel_vars {
                    if *placed_rank == rank {
                        row.add_term(handle.name(), 1.0);
                    }
                }
                if row.is_empty() {
                    continue;
                }
                for a in &armors {
                    let offered = a.sockets_of_rank(rank);
                    if offered > 0 {
                        row.add_term(armor_vars[&a.id].name(), -(offered as f64));
                    }
                }
                model.add_constraint(format!("sockets{}", rank), row, CmpOp::Le, 0.0);
            }
        }

        // Objective: reward spare sockets, penalize item count, penalize
        // jewel usage by size.
        let weights = self.config.weights;
        let mut objective = LinearCombination::new();
        for a in &armors {
            if a.socket_count() > 0 {
                objective.add_term(
                    armor_vars[&a.id].name(),
                    weights.slot_weight * a.socket_count() as f64,
                );
            }
        }
        for a in &armors {
            objective.add_term(armor_vars[&a.id].name(), -weights.equipment_weight);
        }
        for (_, handle) in &charm_vars {
            objective.add_term(handle.name(), -weights.equipment_weight);
        }
        for (_, rank, handle) in &jewel_vars {
            objective.add_term(handle.name(), -weights.jewel_weight * *rank as f64);
        }
        model.add_to_objective(&objective);

        LoadoutModel { model, kinds }
    }
}

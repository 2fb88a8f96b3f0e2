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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use greave_catalog::entity::{
    ArmorPiece, ArmorSet, BonusRank, Catalog, Charm, CharmRank, Jewel, PieceRef, SetBonus,
    SetRef, Skill, SkillGrant, SkillRank, SlotKind,
};
use greave_catalog::id::{ArmorId, BonusId, CharmId, JewelId, SetId, SkillId};
use greave_catalog::index::CatalogIndex;
use greave_solver::config::GeneratorConfig;
use greave_solver::generator::LoadoutModelGenerator;
use greave_solver::kind::SkillRequirement;
use std::hint::black_box;

/// Builds a synthetic catalog with `num_sets` five-piece sets. Every third
/// set carries a bonus, skills cycle over a fixed pool, and each skill gets
/// one charm and one jewel.
fn synthetic_catalog(num_sets: u32) -> Catalog {
    const NUM_SKILLS: u32 = 40;

    let skills = (1..=NUM_SKILLS)
        .map(|id| Skill {
            id: SkillId::new(id),
            name: format!("Skill {}", id),
            ranks: (1..=5)
                .map(|level| SkillRank {
                    level,
                    description: String::new(),
                })
                .collect(),
        })
        .collect();

    let mut armors = Vec::new();
    let mut sets = Vec::new();
    for set in 0..num_sets {
        let base = set * 5;
        let pieces: Vec<PieceRef> = (0..5)
            .map(|slot| PieceRef {
                id: ArmorId::new(base + slot + 1),
            })
            .collect();

        for (slot_index, slot) in SlotKind::ALL.into_iter().enumerate() {
            let id = base + slot_index as u32 + 1;
            armors.push(ArmorPiece {
                id: ArmorId::new(id),
                name: format!("Set {} {}", set, slot),
                slot,
                skills: [SkillGrant {
                    skill: SkillId::new(id % NUM_SKILLS + 1),
                    level: (id % 3 + 1) as i64,
                }]
                .into_iter()
                .collect(),
                slots: (0..(id % 4)).map(|s| (s % 3 + 1) as u8).collect(),
                armor_set: SetRef {
                    id: SetId::new(set + 1),
                },
            });
        }

        let bonus = (set % 3 == 0).then(|| SetBonus {
            id: BonusId::new(set / 3 + 1),
            ranks: vec![BonusRank {
                pieces: 2 + (set % 3) as usize,
                skill: SkillGrant {
                    skill: SkillId::new(set % NUM_SKILLS + 1),
                    level: 1,
                },
            }],
        });

        sets.push(ArmorSet {
            id: SetId::new(set + 1),
            name: format!("Set {}", set),
            pieces,
            bonus,
        });
    }

    let charms = (1..=NUM_SKILLS)
        .map(|id| Charm {
            id: CharmId::new(id),
            name: format!("Charm {}", id),
            ranks: (1..=3)
                .map(|level| CharmRank {
                    level,
                    skills: [SkillGrant {
                        skill: SkillId::new(id),
                        level,
                    }]
                    .into_iter()
                    .collect(),
                })
                .collect(),
        })
        .collect();

    let jewels = (1..=NUM_SKILLS)
        .map(|id| Jewel {
            id: JewelId::new(id),
            name: format!("Jewel {}", id),
            slot: (id % 3 + 1) as u8,
            skills: [SkillGrant {
                skill: SkillId::new(id),
                level: 1,
            }]
            .into_iter()
            .collect(),
        })
        .collect();

    Catalog {
        skills,
        armors,
        sets,
        charms,
        jewels,
    }
}

fn bench_generate_and_serialize(c: &mut Criterion) {
    let requirements = [
        SkillRequirement::new(SkillId::new(1), 3),
        SkillRequirement::new(SkillId::new(7), 2),
        SkillRequirement::new(SkillId::new(13), 1),
    ];

    let mut group = c.benchmark_group("generator_benchmark");
    for num_sets in [20u32, 60, 180] {
        let catalog = synthetic_catalog(num_sets);
        let index = CatalogIndex::new(&catalog);
        let generator = LoadoutModelGenerator::new(&index, GeneratorConfig::default());

        group.throughput(Throughput::Elements(catalog.armors.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("generate", num_sets),
            &num_sets,
            |b, _| b.iter(|| generator.generate(black_box(&requirements))),
        );

        let loadout = generator.generate(&requirements);
        group.bench_with_input(
            BenchmarkId::new("serialize", num_sets),
            &num_sets,
            |b, _| b.iter(|| black_box(&loadout).serialize()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate_and_serialize);
criterion_main!(benches);

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use domlens::format::render_outline;
use domlens::mirror::build;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `mirror.build`, `mirror.outline`
// - Case IDs: `small`, `medium_wide`, `large_deep`.
fn benches_mirror(c: &mut Criterion) {
    let cases = [
        ("small", fixtures::fixture(fixtures::Case::Small)),
        ("medium_wide", fixtures::fixture(fixtures::Case::MediumWide)),
        ("large_deep", fixtures::fixture(fixtures::Case::LargeDeep)),
    ];

    {
        let mut group = c.benchmark_group("mirror.build");

        for (case_id, doc) in &cases {
            group.throughput(Throughput::Elements(doc.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let tree = build(black_box(doc), doc.root());
                    black_box(tree.len())
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("mirror.outline");

        for (case_id, doc) in &cases {
            let tree = build(doc, doc.root());
            group.throughput(Throughput::Elements(tree.len() as u64));
            group.bench_function(*case_id, move |b| {
                b.iter(|| black_box(render_outline(black_box(&tree), None).len()))
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_mirror
}
criterion_main!(benches);

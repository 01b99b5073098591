// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for scroll-derived state.
//!
//! Measures the performance of:
//! - Deriving navbar, active section and back-to-top state on a long page
//! - A burst of scroll notifications going through the controller

use criterion::{criterion_group, criterion_main, Criterion};
use folio::domain::clock::ManualClock;
use folio::domain::scroll::{self, stack_sections, NavSection, ScrollState, ScrollThresholds};
use folio::effects::{Controller, Event, HeroText, PageLayout, Settings};
use std::hint::black_box;
use std::time::Duration;

const SECTION_COUNT: usize = 500;
const SECTION_HEIGHT: u32 = 600;

fn long_page() -> Vec<NavSection> {
    let ids: Vec<String> = (0..SECTION_COUNT).map(|i| format!("section-{i}")).collect();
    stack_sections(0, ids.iter().map(|id| (id.as_str(), SECTION_HEIGHT)))
}

/// Benchmark deriving visual state from a single scroll offset.
fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_derivation");
    let sections = long_page();
    let thresholds = ScrollThresholds::default();
    let middle = ScrollState::from_raw((SECTION_COUNT as u32 * SECTION_HEIGHT / 2) as f32);

    group.bench_function("derive_long_page", |b| {
        b.iter(|| {
            let derived = scroll::derive(black_box(middle), &sections, &thresholds);
            black_box(derived);
        });
    });

    group.finish();
}

/// Benchmark a frame's worth of scroll events followed by the tick that applies them.
fn bench_controller_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_derivation");
    let clock = ManualClock::new();
    let mut controller = Controller::new(
        PageLayout::bare(long_page()),
        Settings::default(),
        clock.clone(),
    );
    controller.handle(Event::Activate {
        hero: HeroText {
            lead_in: String::new(),
            name: String::new(),
        },
        viewport_height: 800.0,
    });

    let mut offset = 0.0_f32;
    group.bench_function("controller_scroll_burst", |b| {
        b.iter(|| {
            for _ in 0..8 {
                offset = (offset + 37.0) % (SECTION_COUNT as f32 * SECTION_HEIGHT as f32);
                controller.handle(Event::Scrolled {
                    offset_y: offset,
                    viewport_height: 800.0,
                });
                clock.advance(Duration::from_millis(2));
                controller.handle(Event::Tick);
            }
            black_box(controller.derived());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_derive, bench_controller_burst);
criterion_main!(benches);

//! Benchmarks for inquiry validation and active-section tracking.
//!
//! Both run on every key press or tick, so they should stay well below a
//! frame budget.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inexia_tui::inquiry::{validate, Budget, InquiryForm, ProjectType, Timeline};
use inexia_tui::site::PAGE_ORDER;
use inexia_tui::state::{PageViewport, SectionSlot};
use inexia_tui::tracker::{SectionId, SectionRegistry, SectionTracker, TrackerConfig};

fn complete_form() -> InquiryForm {
    InquiryForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        project_type: Some(ProjectType::Prototype),
        budget: Some(Budget::ALL[0]),
        timeline: Some(Timeline::Asap),
        requirements: "A multiplayer training scenario for warehouse safety drills.".to_string(),
    }
}

fn bench_validate(c: &mut Criterion) {
    let complete = complete_form();
    let empty = InquiryForm::default();

    c.bench_function("validate_complete_form", |b| {
        b.iter(|| validate(black_box(&complete)))
    });
    c.bench_function("validate_empty_form", |b| {
        b.iter(|| validate(black_box(&empty)))
    });
}

fn page() -> PageViewport {
    let mut page = PageViewport::default();
    let slots = PAGE_ORDER
        .iter()
        .enumerate()
        .map(|(index, id)| SectionSlot {
            id: SectionId::new(id),
            top: index * 40,
            height: 39,
        })
        .collect();
    page.set_layout(slots);
    page.set_height(30);
    page
}

fn bench_tracker_refresh(c: &mut Criterion) {
    let registry = SectionRegistry::new(
        ["about", "projects", "technology", "team", "contact"]
            .iter()
            .map(|id| SectionId::new(id))
            .collect(),
    );

    c.bench_function("tracker_scroll_through_page", |b| {
        b.iter(|| {
            let mut page = page();
            let mut tracker = SectionTracker::new(TrackerConfig::default());
            tracker.mount(registry.clone(), &page);
            for _ in 0..PAGE_ORDER.len() * 40 {
                page.scroll_by(1);
                black_box(tracker.refresh(&page));
            }
            tracker.active().cloned()
        })
    });
}

criterion_group!(benches, bench_validate, bench_tracker_refresh);
criterion_main!(benches);

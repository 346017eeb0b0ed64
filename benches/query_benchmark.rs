//! Query pipeline benchmarks.
//!
//! Filter, sort and paginate over a large synthetic ticket collection, the
//! work done on every keystroke of the list screen.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use helpdesk::model::directory::ROSTER;
use helpdesk::model::{Category, Severity, Status, Ticket, TicketId};
use helpdesk::query::{self, FilterCriteria, SortKey, SortSpec};

/// Generate `count` tickets cycling through every category, severity, status and owner.
fn generate_tickets(count: usize) -> Vec<Ticket> {
    (0..count)
        .map(|i| Ticket {
            id: TicketId::new(i as u64 + 1).expect("valid ticket id"),
            title: format!("Falha na sincronização do caixa {i}"),
            owner: ROSTER[i % ROSTER.len()].name.to_string(),
            customer: format!("Drogaria Unidade {}", i % 97),
            created_at: format!("2025-{:02}-{:02} 09:00", i % 12 + 1, i % 28 + 1),
            interaction_count: (i % 9) as u32,
            last_interaction_at: format!("2025-{:02}-{:02} 17:30", i % 12 + 1, i % 28 + 1),
            category: Category::ALL[i % Category::ALL.len()],
            severity: Severity::ALL[i % Severity::ALL.len()],
            status: Status::ALL[i % Status::ALL.len()],
            tool: (i % 4 != 0).then(|| "geolab".to_string()),
            internal_status: None,
            delivery_date: None,
            description: None,
        })
        .collect()
}

fn benchmark_query(c: &mut Criterion) {
    let tickets = generate_tickets(50_000);
    println!("Benchmark collection: {} tickets", tickets.len());

    c.bench_function("filter_search_common_term", |b| {
        let criteria = FilterCriteria::default().with_search("caixa");
        b.iter(|| black_box(query::filter(black_box(&tickets), &criteria)))
    });

    c.bench_function("filter_search_no_match", |b| {
        let criteria = FilterCriteria::default().with_search("XYZNONEXISTENT");
        b.iter(|| black_box(query::filter(black_box(&tickets), &criteria)))
    });

    c.bench_function("sort_by_title_collated", |b| {
        b.iter(|| black_box(query::sort(black_box(&tickets), SortSpec::ascending(SortKey::Title))))
    });

    c.bench_function("sort_by_tool_with_absent_values", |b| {
        b.iter(|| black_box(query::sort(black_box(&tickets), SortSpec::descending(SortKey::Tool))))
    });

    c.bench_function("run_pipeline_first_page", |b| {
        let criteria = FilterCriteria::default()
            .with_severity(Severity::High)
            .with_search("unidade 4");
        b.iter(|| {
            black_box(query::run(
                black_box(&tickets),
                &criteria,
                Some(SortSpec::descending(SortKey::CreatedAt)),
                1,
                20,
            ))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_query
}

criterion_main!(benches);

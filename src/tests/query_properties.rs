//! Property-based tests for the filter → sort → paginate pipeline.
//!
//! Properties under test:
//! - unconstrained criteria are the identity
//! - filter output is an order-preserving subsequence of its input
//! - sorting is a permutation, ordered, stable, with absent values last
//! - descending order reverses ascending order for distinct keys
//! - pagination is a prefix of length `min(len, page * per_page)` and idempotent

use crate::model::directory::{ROSTER, TOOLS};
use crate::model::{Category, Severity, Status, Ticket, TicketId};
use crate::query::{compare, filter, paginate, sort, FilterCriteria, SortKey, SortSpec};
use proptest::prelude::*;
use std::cmp::Ordering;

// ===== Arbitrary Strategies =====

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Bug),
        Just(Category::Support),
        Just(Category::Integration),
        Just(Category::Customization),
        Just(Category::Improvement),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::High), Just(Severity::Medium), Just(Severity::Low)]
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Open), Just(Status::Closed), Just(Status::Pending)]
}

fn arb_owner() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(ROSTER.map(|m| m.name).to_vec()).prop_map(str::to_string),
    ]
}

fn arb_tool() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(TOOLS.map(|t| t.value).to_vec()).prop_map(str::to_string))
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

/// Tickets with unique ids 1..=n in a shuffled order.
fn arb_tickets(max_len: usize) -> impl Strategy<Value = Vec<Ticket>> {
    prop::collection::vec(
        (
            "[A-Za-zÀ-ú0-9 ]{1,12}",
            arb_owner(),
            "[A-Za-z ]{0,10}",
            0u32..20,
            arb_category(),
            arb_severity(),
            arb_status(),
            arb_tool(),
            prop::option::of("2025-0[1-9]-[12][0-9]"),
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(
                |(i, (title, owner, customer, count, category, severity, status, tool, delivery))| {
                    Ticket {
                        id: TicketId::new(i as u64 + 1).expect("ids start at 1"),
                        title,
                        owner,
                        customer,
                        created_at: format!("2025-01-{:02} 09:00", i % 28 + 1),
                        interaction_count: count,
                        last_interaction_at: format!("2025-02-{:02} 10:00", (i * 7) % 28 + 1),
                        category,
                        severity,
                        status,
                        tool,
                        internal_status: None,
                        delivery_date: delivery,
                        description: None,
                    }
                },
            )
            .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), "[a-z0-9]{1,3}"],
        prop::option::of(arb_category()),
        prop::option::of(arb_severity()),
        prop::option::of(arb_status()),
    )
        .prop_map(|(search, category, severity, status)| FilterCriteria {
            search,
            category,
            severity,
            status,
        })
}

/// Suffix titles and customers with the id so no two tickets share either.
fn with_distinct_text(records: Vec<Ticket>) -> Vec<Ticket> {
    records
        .into_iter()
        .map(|mut t| {
            t.title = format!("{} #{}", t.title, t.id);
            t.customer = format!("{}-{}", t.customer, t.id);
            t
        })
        .collect()
}

fn ids<T: AsRef<Ticket>>(records: &[T]) -> Vec<u64> {
    records.iter().map(|r| r.as_ref().id.get()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn unconstrained_filter_is_identity(records in arb_tickets(40)) {
        let out = filter(&records, &FilterCriteria::unconstrained());
        prop_assert_eq!(ids(&out), ids(&records));
    }

    #[test]
    fn filter_is_order_preserving_subset(records in arb_tickets(40), criteria in arb_criteria()) {
        let out = filter(&records, &criteria);
        let expected: Vec<u64> = records
            .iter()
            .filter(|t| criteria.matches(t))
            .map(|t| t.id.get())
            .collect();
        prop_assert_eq!(ids(&out), expected);
    }

    #[test]
    fn sort_is_ordered_permutation(records in arb_tickets(40), key in arb_key(), desc in any::<bool>()) {
        let spec = if desc { SortSpec::descending(key) } else { SortSpec::ascending(key) };
        let sorted = sort(&records, spec);

        let mut before = ids(&records);
        let mut after = ids(&sorted);
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        for pair in sorted.windows(2) {
            prop_assert_ne!(compare(&pair[0], &pair[1], spec), Ordering::Greater);
        }
    }

    #[test]
    fn sort_is_stable(records in arb_tickets(40), key in arb_key()) {
        let spec = SortSpec::ascending(key);
        let sorted = sort(&records, spec);
        let position = |id: TicketId| records.iter().position(|t| t.id == id);

        for pair in sorted.windows(2) {
            if compare(&pair[0], &pair[1], spec) == Ordering::Equal {
                prop_assert!(position(pair[0].id) < position(pair[1].id));
            }
        }
    }

    #[test]
    fn absent_values_sort_last_both_ways(records in arb_tickets(40), desc in any::<bool>()) {
        let spec = if desc {
            SortSpec::descending(SortKey::Tool)
        } else {
            SortSpec::ascending(SortKey::Tool)
        };
        let sorted = sort(&records, spec);
        let first_absent = sorted.iter().position(|t| t.tool.is_none()).unwrap_or(sorted.len());
        prop_assert!(sorted[first_absent..].iter().all(|t| t.tool.is_none()));
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys(
        records in arb_tickets(40),
        key in prop::sample::select(vec![SortKey::Id, SortKey::Title, SortKey::Customer]),
    ) {
        let records = with_distinct_text(records);
        let asc = ids(&sort(&records, SortSpec::ascending(key)));
        let mut desc = ids(&sort(&records, SortSpec::descending(key)));
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    #[test]
    fn paginate_is_prefix_of_expected_length(
        records in arb_tickets(60),
        page in 0usize..8,
        per_page in 0usize..15,
    ) {
        let visible = paginate(&records, page, per_page);
        let expected = records.len().min(page * per_page);
        prop_assert_eq!(visible.len(), expected);
        prop_assert_eq!(ids(visible), ids(&records[..expected]));
    }

    #[test]
    fn paginate_is_idempotent(records in arb_tickets(60), page in 0usize..8, per_page in 0usize..15) {
        let once = paginate(&records, page, per_page);
        let twice = paginate(once, page, per_page);
        prop_assert_eq!(ids(once), ids(twice));
    }
}

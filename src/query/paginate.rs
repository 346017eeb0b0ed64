//! Cumulative "load more" pagination.

/// The first `page * per_page` items.
///
/// This is a growing prefix, not a window: page 3 includes pages 1 and 2.
/// A zero page or page size yields nothing; a prefix longer than the input
/// yields the whole input.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let end = page.saturating_mul(per_page).min(items.len());
    &items[..end]
}

/// Whether `paginate(items, page, per_page)` leaves anything out.
pub fn has_more<T>(items: &[T], page: usize, per_page: usize) -> bool {
    paginate(items, page, per_page).len() < items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_twenty_five() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10).len(), 10);
        assert!(has_more(&items, 1, 10));
    }

    #[test]
    fn later_page_is_cumulative_prefix() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.len(), 20);
        assert_eq!(page[0], 1);
        assert_eq!(page[19], 20);
    }

    #[test]
    fn page_past_end_is_clamped() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &items[..]);
        assert!(!has_more(&items, 3, 10));
    }

    #[test]
    fn zero_page_or_size_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(has_more(&items, 0, 10));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, usize::MAX, usize::MAX), &items);
    }

    #[test]
    fn empty_input_has_no_more() {
        let items: [u8; 0] = [];
        assert!(paginate(&items, 1, 10).is_empty());
        assert!(!has_more(&items, 1, 10));
    }
}

use std::num::NonZeroUsize;

use crate::Record;

/// One page of a filtered sequence plus its position metadata.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, always within `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Stable, case-insensitive substring filter. The empty query keeps every record.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    matching_positions(records, query)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Positions in `records` of the entries matching `query`, ascending.
pub(crate) fn matching_positions(records: &[Record], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.matches(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slices out the requested page, clamping the request into range.
///
/// Out-of-range requests (zero, negative, past the end) are never an error.
pub fn paginate<T>(filtered: &[T], page_size: NonZeroUsize, requested_page: i64) -> Page<'_, T> {
    let total_pages = total_pages(filtered.len(), page_size);
    let page = clamp_page(requested_page, total_pages);
    let start = ((page - 1) * page_size.get()).min(filtered.len());
    let end = start.saturating_add(page_size.get()).min(filtered.len());
    Page {
        items: &filtered[start..end],
        page,
        total_pages,
        total_items: filtered.len(),
    }
}

pub(crate) fn clamp_page(requested_page: i64, total_pages: usize) -> usize {
    let last = i64::try_from(total_pages).unwrap_or(i64::MAX);
    // `last` is at least 1, so the clamped value is positive.
    requested_page.clamp(1, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn records(n: i64) -> Vec<Record> {
        (1..=n)
            .map(|id| Record::new(id, format!("Person {id}"), "Engineer"))
            .collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let all = records(5);
        let filtered = filter(&all, "");
        let expected: Vec<&Record> = all.iter().collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_is_case_insensitive_and_stable() {
        let mut all = records(4);
        all[1].title = "Staff ENGINEER".to_string();
        all[3].skills = vec!["Go".to_string(), "Rust".to_string()];
        for record in &mut all {
            if record.id != 2 {
                record.title = "Designer".to_string();
            }
        }

        let ids: Vec<_> = filter(&all, "engineer").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);

        let ids: Vec<_> = filter(&all, "RUST").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);

        let ids: Vec<_> = filter(&all, "person").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn total_pages_has_floor_of_one() {
        assert_eq!(total_pages(0, size(6)), 1);
        assert_eq!(total_pages(6, size(6)), 1);
        assert_eq!(total_pages(7, size(6)), 2);
        assert_eq!(total_pages(12, size(6)), 2);
        assert_eq!(total_pages(13, size(6)), 3);
    }

    #[test]
    fn paginate_slices_pages() {
        let items: Vec<u32> = (1..=8).collect();

        let first = paginate(&items, size(6), 1);
        assert_eq!(first.items, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(first.page, 1);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_items, 8);

        let second = paginate(&items, size(6), 2);
        assert_eq!(second.items, &[7, 8]);
        assert_eq!(second.page, 2);
    }

    #[test]
    fn paginate_clamps_out_of_range_requests() {
        let items: Vec<u32> = (1..=8).collect();

        for requested in [i64::MIN, -3, 0] {
            let page = paginate(&items, size(6), requested);
            assert_eq!(page.page, 1);
            assert_eq!(page.items, &[1, 2, 3, 4, 5, 6]);
        }
        for requested in [3, 999, i64::MAX] {
            let page = paginate(&items, size(6), requested);
            assert_eq!(page.page, 2);
            assert_eq!(page.items, &[7, 8]);
        }
    }

    #[test]
    fn paginate_empty_input() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, size(6), 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_size_one_yields_one_item_per_page() {
        let items: Vec<u32> = (1..=3).collect();
        for requested in 1..=3 {
            let page = paginate(&items, size(1), requested);
            assert_eq!(page.items, &[requested as u32]);
            assert_eq!(page.total_pages, 3);
        }
    }
}

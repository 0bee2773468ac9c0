use crate::domain::entities::query::QueryState;
use crate::domain::entities::record::{find_range_filter, Record};

pub fn matches_search<R: Record>(record: &R, search_term: &str) -> bool {
    let needle = search_term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// A filter name the record does not declare is ignored. A declared filter fails
/// records that lack the underlying field.
pub fn matches_ranges<R: Record>(record: &R, query: &QueryState) -> bool {
    query.filters.iter().all(|(name, limit)| {
        let Some(filter) = find_range_filter::<R>(name) else {
            return true;
        };
        record
            .numeric_field(filter.field)
            .is_some_and(|value| filter.accepts(value, *limit))
    })
}

pub fn matches_status<R: Record>(record: &R, query: &QueryState) -> bool {
    query.status.matches(&record.status_key())
}

pub fn matches_query<R: Record>(record: &R, query: &QueryState) -> bool {
    matches_search(record, &query.search_term)
        && matches_ranges(record, query)
        && matches_status(record, query)
}

/// Filters the working set without touching it. Record order is preserved.
pub fn apply_query<R: Record>(working_set: &[R], query: &QueryState) -> Vec<R> {
    if query.is_unfiltered() {
        return working_set.to_vec();
    }
    working_set
        .iter()
        .filter(|record| matches_query(*record, query))
        .cloned()
        .collect()
}

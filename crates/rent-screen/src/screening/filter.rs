//! Case-insensitive substring search shared by every list page.

/// Reads one designated text field; `None` stands for a field that is not yet on file.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Record kinds that declare which of their fields a page search covers.
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [FieldAccessor<Self>];
}

/// Stable subsequence of `records` where any designated field contains `query`,
/// ignoring case. An empty query keeps every record.
pub fn filter_records<'a, T>(
    records: &'a [T],
    query: &str,
    fields: &[FieldAccessor<T>],
) -> Vec<&'a T> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| any_field_contains(*record, &needle, fields))
        .collect()
}

/// Filters with the fields the record type designates for its page.
pub fn filter_searchable<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    filter_records(records, query, T::search_fields())
}

fn any_field_contains<T>(record: &T, needle: &str, fields: &[FieldAccessor<T>]) -> bool {
    fields.iter().any(|field| {
        field(record)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

/// Reusable filter bound to a fixed field set.
pub struct RecordFilter<T> {
    fields: Vec<FieldAccessor<T>>,
}

impl<T> RecordFilter<T> {
    pub fn new(fields: Vec<FieldAccessor<T>>) -> Self {
        Self { fields }
    }

    pub fn matches(&self, record: &T, query: &str) -> bool {
        query.is_empty() || any_field_contains(record, &query.to_lowercase(), &self.fields)
    }

    pub fn apply<'a>(&self, records: &'a [T], query: &str) -> Vec<&'a T> {
        filter_records(records, query, &self.fields)
    }
}

impl<T: Searchable> Default for RecordFilter<T> {
    fn default() -> Self {
        Self::new(T::search_fields().to_vec())
    }
}

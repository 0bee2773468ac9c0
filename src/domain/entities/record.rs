/// Direction of a numeric range filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Passes when `field <= value`.
    AtMost,
    /// Passes when `field >= value`.
    AtLeast,
}

/// A named range filter bound to one numeric field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub name: &'static str,
    pub field: &'static str,
    pub bound: Bound,
}

impl RangeFilter {
    pub const fn at_most(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            bound: Bound::AtMost,
        }
    }

    pub const fn at_least(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            bound: Bound::AtLeast,
        }
    }

    pub fn accepts(&self, field_value: f64, limit: f64) -> bool {
        match self.bound {
            Bound::AtMost => field_value <= limit,
            Bound::AtLeast => field_value >= limit,
        }
    }
}

/// A backend entity that can be listed, searched and filtered on the client.
///
/// Implementors describe their filterable surface statically: which text fields take
/// part in search, which named range filters exist, and how the record maps onto the
/// single categorical status selector of a list screen.
pub trait Record: Clone + PartialEq + 'static {
    /// Collection path on the backend, relative to the API base url.
    const COLLECTION: &'static str;

    fn id(&self) -> i64;

    /// Text fields matched by the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Named range filters this record supports.
    fn range_filters() -> &'static [RangeFilter];

    fn numeric_field(&self, field: &str) -> Option<f64>;

    /// Value compared against the status selector.
    fn status_key(&self) -> String;

    /// Status values offered by the selector, wildcard excluded.
    fn status_options() -> &'static [&'static str];
}

pub fn find_range_filter<R: Record>(name: &str) -> Option<&'static RangeFilter> {
    R::range_filters().iter().find(|filter| filter.name == name)
}

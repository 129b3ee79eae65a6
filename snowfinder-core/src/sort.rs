//! Sort engine shared by the ranking and peak-info tables.
//!
//! Each table owns one `SortState`. Activating a header either flips the
//! direction (same column) or starts ascending (new column), and the rows are
//! then fully re-sorted with a stable sort. Descending is the reversed
//! comparator under the same stable sort, so tied rows keep their relative
//! order whichever way the column is sorted.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort key used for absent numeric values; below any real measurement.
pub const MISSING: f64 = -1.0;

static MISSING_KEY: SortKey = SortKey::Number(MISSING);

/// How a column's keys are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Text,
    Numeric,
}

/// A sortable column of one table.
pub trait TableColumn: Copy + Eq + Ord + Debug + 'static {
    /// Every column, in header order.
    fn all() -> &'static [Self];
    /// Stable identifier, also used by the CLI `--sort` flag.
    fn id(self) -> &'static str;
    /// Header text.
    fn label(self) -> &'static str;
    fn kind(self) -> ColumnKind;

    fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.id() == id)
    }
}

/// The typed value a row is compared on, distinct from its display string.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
}

impl SortKey {
    /// Text key; lower-cased so ordering is case-insensitive.
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Numeric key; `None` becomes the `MISSING` sentinel.
    pub fn number(value: Option<f64>) -> Self {
        SortKey::Number(value.unwrap_or(MISSING))
    }
}

/// Locale-aware text comparison.
///
/// Accents are ignored on the first pass ("é" sorts with "e"), the raw strings
/// decide between keys that only differ in accents.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.nfd().filter(|c| !is_combining_mark(*c)).collect::<Vec<char>>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Compare two keys under the column's kind.
pub fn compare_keys(kind: ColumnKind, a: &SortKey, b: &SortKey) -> Ordering {
    match (kind, a, b) {
        (ColumnKind::Text, SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
        (ColumnKind::Numeric, SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
        // A key of the wrong type never comes out of the mappers; order numbers first.
        (_, SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (_, SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (_, SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
        (_, SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Header glyph.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }

    /// Header CSS class.
    pub fn class(self) -> &'static str {
        match self {
            SortDirection::Ascending => "sort-asc",
            SortDirection::Descending => "sort-desc",
        }
    }
}

/// Table-scoped sort bookkeeping: which column is active and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    column: Option<C>,
    ascending: bool,
}

impl<C: TableColumn> Default for SortState<C> {
    fn default() -> Self {
        SortState {
            column: None,
            ascending: true,
        }
    }
}

impl<C: TableColumn> SortState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a header activation and return the direction to sort in.
    pub fn activate(&mut self, column: C) -> SortDirection {
        let ascending = if self.column == Some(column) {
            !self.ascending
        } else {
            true
        };
        self.column = Some(column);
        self.ascending = ascending;
        SortDirection::from_ascending(ascending)
    }

    /// Forget the active column; used when a table gets new data.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current(&self) -> Option<(C, SortDirection)> {
        self.column
            .map(|column| (column, SortDirection::from_ascending(self.ascending)))
    }

    /// The indicator a header should show; `None` for every inactive column.
    pub fn indicator(&self, column: C) -> Option<SortDirection> {
        match self.current() {
            Some((active, direction)) if active == column => Some(direction),
            _ => None,
        }
    }
}

/// A rendered row plus its typed sort keys, one per column of its table.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableRow<C: TableColumn, D> {
    pub display: D,
    keys: BTreeMap<C, SortKey>,
}

impl<C: TableColumn, D> SortableRow<C, D> {
    pub fn new(display: D, keys: impl IntoIterator<Item = (C, SortKey)>) -> Self {
        let keys: BTreeMap<C, SortKey> = keys.into_iter().collect();
        debug_assert!(
            C::all().iter().all(|c| keys.contains_key(c)),
            "every column needs a sort key"
        );
        SortableRow { display, keys }
    }

    /// Key for `column`; a missing entry reads as the numeric sentinel.
    pub fn key(&self, column: C) -> &SortKey {
        self.keys.get(&column).unwrap_or(&MISSING_KEY)
    }
}

/// Stable re-sort of `rows` on `column`.
pub fn sort_rows<C: TableColumn, D>(
    rows: &mut [SortableRow<C, D>],
    column: C,
    direction: SortDirection,
) {
    let kind = column.kind();
    rows.sort_by(|a, b| {
        let ordering = compare_keys(kind, a.key(column), b.key(column));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

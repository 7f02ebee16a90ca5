//! Client-side table querying: search, sort and pagination
//!
//! Every admin list runs its rows through a [`TableQuery`]. Rows describe
//! themselves through [`TableRow`]; screen-specific filters (status,
//! category) are passed to [`TableQuery::apply`] as a predicate.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::models::{ActivityEntry, Domain, Payment, Plan};

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page sizes offered in the UI
pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// A row that can be searched and sorted
pub trait TableRow {
    type Column: Copy + PartialEq;

    /// Fields matched by free-text search
    fn search_fields(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Search, sort and page state for one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery<C> {
    pub search: String,
    pub sort: Option<(C, SortDirection)>,
    /// Zero-based
    pub page: usize,
    pub page_size: usize,
}

impl<C: Copy + PartialEq> Default for TableQuery<C> {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<C: Copy + PartialEq> TableQuery<C> {
    pub fn sorted_by(column: C, direction: SortDirection) -> Self {
        Self {
            sort: Some((column, direction)),
            ..Self::default()
        }
    }

    /// Click on a column header: sort ascending, or flip if already sorted by it
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => Some((column, direction.toggled())),
            _ => Some((column, SortDirection::Asc)),
        };
        self.page = 0;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn sort_direction(&self, column: C) -> Option<SortDirection> {
        self.sort
            .filter(|(current, _)| *current == column)
            .map(|(_, direction)| direction)
    }

    /// Filter, sort and cut one page out of `rows`
    pub fn apply<T>(&self, rows: &[T], filter: impl Fn(&T) -> bool) -> Page<T>
    where
        T: TableRow<Column = C> + Clone,
    {
        let needle = self.search.trim().to_lowercase();

        let mut matched: Vec<&T> = rows
            .iter()
            .filter(|row| filter(row))
            .filter(|row| {
                needle.is_empty()
                    || row
                        .search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect();

        if let Some((column, direction)) = self.sort {
            matched.sort_by(|a, b| {
                let ordering = a.compare_by(b, column);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let total = matched.len();
        let page_size = self.page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        let page = self.page.min(page_count - 1);
        let start = page * page_size;

        let rows: Vec<T> = matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Page {
            first_row: if rows.is_empty() { 0 } else { start + 1 },
            last_row: start + rows.len(),
            rows,
            page,
            page_count,
            total,
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// Zero-based, clamped to the last page
    pub page: usize,
    pub page_count: usize,
    /// Rows matching search and filter, across all pages
    pub total: usize,
    /// One-based position of the first row shown, 0 when empty
    pub first_row: usize,
    pub last_row: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }
}

// ============================================================================
// Row implementations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanColumn {
    Name,
    Price,
    Students,
    Created,
}

impl TableRow for Plan {
    type Column = PlanColumn;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }

    fn compare_by(&self, other: &Self, column: PlanColumn) -> Ordering {
        match column {
            PlanColumn::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            PlanColumn::Price => self.monthly_price_cents.cmp(&other.monthly_price_cents),
            // Unlimited sorts after every finite limit
            PlanColumn::Students => self
                .max_students
                .unwrap_or(u32::MAX)
                .cmp(&other.max_students.unwrap_or(u32::MAX)),
            PlanColumn::Created => self.created_at.cmp(&other.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainColumn {
    Hostname,
    Tenant,
    Added,
}

impl TableRow for Domain {
    type Column = DomainColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.hostname.as_str(), self.tenant_id.as_str()]
    }

    fn compare_by(&self, other: &Self, column: DomainColumn) -> Ordering {
        match column {
            DomainColumn::Hostname => self.hostname.cmp(&other.hostname),
            DomainColumn::Tenant => self.tenant_id.cmp(&other.tenant_id),
            DomainColumn::Added => self.added_at.cmp(&other.added_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentColumn {
    Invoice,
    Tenant,
    Amount,
    Date,
}

impl TableRow for Payment {
    type Column = PaymentColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.invoice.as_str(), self.tenant_id.as_str()]
    }

    fn compare_by(&self, other: &Self, column: PaymentColumn) -> Ordering {
        match column {
            PaymentColumn::Invoice => self.invoice.cmp(&other.invoice),
            PaymentColumn::Tenant => self.tenant_id.cmp(&other.tenant_id),
            PaymentColumn::Amount => self.amount_cents.cmp(&other.amount_cents),
            PaymentColumn::Date => self.created_at.cmp(&other.created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityColumn {
    Time,
    Actor,
}

impl TableRow for ActivityEntry {
    type Column = ActivityColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.actor.as_str(), self.message.as_str()]
    }

    fn compare_by(&self, other: &Self, column: ActivityColumn) -> Ordering {
        match column {
            ActivityColumn::Time => self.at.cmp(&other.at).then(self.id.cmp(&other.id)),
            ActivityColumn::Actor => self.actor.cmp(&other.actor),
        }
    }
}

/// `YYYY-MM-DD` for table cells
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DD HH:MM` for table cells
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::admin::models::PaymentMethod;
    use crate::core::admin::models::PaymentStatus;

    fn payment(invoice: &str, tenant: &str, amount: u64, status: PaymentStatus) -> Payment {
        Payment {
            id: invoice.to_lowercase(),
            tenant_id: tenant.to_string(),
            invoice: invoice.to_string(),
            amount_cents: amount,
            currency: "USD".to_string(),
            status,
            method: PaymentMethod::Card,
            attempts: 1,
            created_at: DateTime::default(),
        }
    }

    fn rows() -> Vec<Payment> {
        (1..=23)
            .map(|i| {
                let status = if i % 4 == 0 {
                    PaymentStatus::Failed
                } else {
                    PaymentStatus::Paid
                };
                let tenant = if i % 2 == 0 { "oakridge" } else { "riverside" };
                payment(&format!("INV-{i:03}"), tenant, i * 100, status)
            })
            .collect()
    }

    #[test]
    fn test_default_query_returns_first_page() {
        let page = TableQuery::<PaymentColumn>::default().apply(&rows(), |_| true);

        assert_eq!(page.total, 23);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.rows.len(), 10);
        assert_eq!((page.first_row, page.last_row), (1, 10));
        assert!(!page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_last_page_is_partial() {
        let query = TableQuery::<PaymentColumn> {
            page: 2,
            ..Default::default()
        };
        let page = query.apply(&rows(), |_| true);

        assert_eq!(page.rows.len(), 3);
        assert_eq!((page.first_row, page.last_row), (21, 23));
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_beyond_end_is_clamped() {
        let query = TableQuery::<PaymentColumn> {
            page: 99,
            ..Default::default()
        };
        let page = query.apply(&rows(), |_| true);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut query = TableQuery::<PaymentColumn>::default();
        query.set_search("  OAKRIDGE ");
        let page = query.apply(&rows(), |_| true);

        assert_eq!(page.total, 11);
        assert!(page.rows.iter().all(|p| p.tenant_id == "oakridge"));
    }

    #[test]
    fn test_filter_predicate_combines_with_search() {
        let mut query = TableQuery::<PaymentColumn>::default();
        query.set_search("riverside");
        let page = query.apply(&rows(), |p| p.status == PaymentStatus::Failed);

        // Failed rows are multiples of 4, which are all even -> oakridge
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.first_row, 0);
    }

    #[test]
    fn test_sort_descending_by_amount() {
        let query = TableQuery::sorted_by(PaymentColumn::Amount, SortDirection::Desc);
        let page = query.apply(&rows(), |_| true);

        assert_eq!(page.rows[0].amount_cents, 2_300);
        assert_eq!(page.rows[9].amount_cents, 1_400);
    }

    #[test]
    fn test_toggle_sort_flips_direction_and_resets_page() {
        let mut query = TableQuery::<PaymentColumn> {
            page: 2,
            ..Default::default()
        };

        query.toggle_sort(PaymentColumn::Amount);
        assert_eq!(query.sort_direction(PaymentColumn::Amount), Some(SortDirection::Asc));
        assert_eq!(query.page, 0);

        query.toggle_sort(PaymentColumn::Amount);
        assert_eq!(query.sort_direction(PaymentColumn::Amount), Some(SortDirection::Desc));

        query.toggle_sort(PaymentColumn::Invoice);
        assert_eq!(query.sort_direction(PaymentColumn::Amount), None);
        assert_eq!(query.sort_direction(PaymentColumn::Invoice), Some(SortDirection::Asc));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let mut query = TableQuery::<PaymentColumn>::default();
        query.set_page_size(0);
        let page = query.apply(&rows(), |_| true);

        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.page_count, 23);
    }

    #[test]
    fn test_empty_input() {
        let page = TableQuery::<PaymentColumn>::default().apply(&[] as &[Payment], |_| true);
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 0);
        assert!(!page.has_next());
    }
}

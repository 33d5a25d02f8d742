//! Filter/sort/paginate pipeline.
//!
//! The list view never stores its own copy of the products. Every render derives
//! a [`Listing`] from the store contents, the current [`FilterCriteria`] and the
//! [`Pager`], so the displayed page always reflects the latest state.

use super::Product;
use crate::utils::text_processing::collation_key;
use std::cmp::Ordering;
use std::ops::Range;

/// Page sizes selectable from the list view.
pub const PAGE_SIZES: [usize; 4] = [3, 6, 9, 12];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Specifying the sort key of the product list.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    CreatedAt,
    Stock,
}

impl SortBy {
    /// Return the next sort key in the cycle name → date → stock.
    ///
    pub fn next(self) -> Self {
        match self {
            SortBy::Name => SortBy::CreatedAt,
            SortBy::CreatedAt => SortBy::Stock,
            SortBy::Stock => SortBy::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Name => "Por Nombre",
            SortBy::CreatedAt => "Por Fecha",
            SortBy::Stock => "Por Stock",
        }
    }
}

/// Specifying the sort direction of the product list.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

/// Criteria applied to the store before pagination.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            search_term: String::new(),
            sort_by: SortBy::CreatedAt,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Page window over the filtered products.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize, // 1-indexed
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    /// Return a pager on the first page with the given size, falling back to
    /// the default size when it is not one of [`PAGE_SIZES`].
    ///
    pub fn with_page_size(page_size: usize) -> Self {
        let mut pager = Pager::default();
        pager.set_page_size(page_size);
        pager
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed for `total` items. Zero when there are no items.
    ///
    pub fn page_count(&self, total: usize) -> usize {
        (total + self.page_size - 1) / self.page_size
    }

    /// Change the page size and go back to the first page. Returns false and
    /// leaves the pager untouched for unsupported sizes.
    ///
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZES.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    /// Switch to the next supported page size, wrapping around.
    ///
    pub fn cycle_page_size(&mut self) -> usize {
        let index = PAGE_SIZES
            .iter()
            .position(|size| *size == self.page_size)
            .unwrap_or(0);
        let next = PAGE_SIZES[(index + 1) % PAGE_SIZES.len()];
        self.set_page_size(next);
        next
    }

    /// Jump to `page`, clamped to `1..=page_count` for `total` items.
    ///
    pub fn set_page(&mut self, page: usize, total: usize) {
        let last = self.page_count(total).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn next_page(&mut self, total: usize) {
        self.set_page(self.page + 1, total);
    }

    pub fn prev_page(&mut self, total: usize) {
        self.set_page(self.page.saturating_sub(1), total);
    }

    /// Index range of the current page over `total` items.
    ///
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (self.page * self.page_size).min(total);
        start..end
    }
}

/// Result of running the pipeline once.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Keep the products whose name or description contains `term`, ignoring
/// case. An empty term keeps everything in store order.
///
pub fn filter<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    if term.is_empty() {
        return products.iter().collect();
    }
    let term = term.to_lowercase();
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Sort products in place by the given key and order. The sort is stable.
///
pub fn sort(products: &mut [&Product], sort_by: SortBy, sort_order: SortOrder) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Product, b: &Product, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => collation_key(&a.name)
            .cmp(&collation_key(&b.name))
            .then_with(|| a.name.cmp(&b.name)),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
        SortBy::Stock => f64::from(a.quantity).total_cmp(&f64::from(b.quantity)),
    }
}

/// Coerce stock text to a number, treating anything non-numeric as zero.
///
pub fn numeric_or_zero(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => number,
        _ => 0.0,
    }
}

/// Run filter, sort and paginate over `products`. When the pager points past
/// the last page the listing shows the last page instead.
///
pub fn derive<'a>(products: &'a [Product], criteria: &FilterCriteria, pager: &Pager) -> Listing<'a> {
    let mut matched = filter(products, &criteria.search_term);
    sort(&mut matched, criteria.sort_by, criteria.sort_order);

    let total = matched.len();
    let page_count = pager.page_count(total);
    let mut effective = *pager;
    effective.set_page(pager.page, total);

    let window = effective.window(total);
    let items = matched.drain(window).collect();
    Listing {
        items,
        page: effective.page,
        page_count,
        total,
    }
}

//! Category filter and fixed-size paging over an already-fetched product list.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::catalog::models::CatalogProduct;
use crate::features::categories::models::Category;
use crate::shared::constants::CATALOG_PAGE_SIZE;

/// Which category the visitor is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Uuid),
}

impl CategoryFilter {
    pub fn matches(&self, category_id: Uuid) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => *id == category_id,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }

        Uuid::parse_str(value)
            .map(CategoryFilter::Category)
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid category '{}': expected 'all' or a category id",
                    value
                ))
            })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{}", id),
        }
    }
}

/// Browsing state for one catalog view.
///
/// Holds the fetched products and categories plus the current filter and
/// page. Changing the filter returns to page 1; the page is always kept
/// within `[1, page_count]`.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    products: Vec<CatalogProduct>,
    categories: Vec<Category>,
    show_pagination: bool,
    filter: CategoryFilter,
    current_page: usize,
}

impl CatalogBrowser {
    pub fn new(
        products: Vec<CatalogProduct>,
        categories: Vec<Category>,
        show_pagination: bool,
    ) -> Self {
        Self {
            products,
            categories,
            show_pagination,
            filter: CategoryFilter::All,
            current_page: 1,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn show_pagination(&self) -> bool {
        self.show_pagination
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.current_page = 1;
        }
    }

    /// Jump to `page`, clamped into range
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count());
    }

    pub fn current_page(&self) -> usize {
        self.current_page.clamp(1, self.page_count())
    }

    /// Products in the selected category, input order kept
    pub fn filtered(&self) -> Vec<&CatalogProduct> {
        self.products
            .iter()
            .filter(|p| self.filter.matches(p.product.category_id))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| self.filter.matches(p.product.category_id))
            .count()
    }

    /// At least one page, even when nothing matches
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(CATALOG_PAGE_SIZE).max(1)
    }

    /// What to render: the current page, or everything when paging is off
    pub fn visible(&self) -> Vec<&CatalogProduct> {
        let filtered = self.filtered();
        if !self.show_pagination {
            return filtered;
        }

        let start = (self.current_page() - 1) * CATALOG_PAGE_SIZE;
        filtered
            .into_iter()
            .skip(start)
            .take(CATALOG_PAGE_SIZE)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::store::memory_store::{category, product};

    fn catalog(per_category: &[(Uuid, usize)]) -> Vec<CatalogProduct> {
        let mut minutes = 1000;
        let mut rows = Vec::new();
        for (category_id, count) in per_category {
            for i in 0..*count {
                minutes -= 1;
                rows.push(CatalogProduct {
                    product: product(*category_id, &format!("{}-{}", category_id, i), minutes),
                    category_name: None,
                    category_slug: None,
                });
            }
        }
        rows
    }

    #[test]
    fn test_category_filter_parsing() {
        let id = Uuid::new_v4();
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            id.to_string().parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Category(id)
        );
        assert!("gift-boxes".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Category(id).to_string(), id.to_string());
    }

    #[test]
    fn test_page_count_is_ceiling_with_minimum_one() {
        let a = Uuid::new_v4();
        for (n, pages) in [(0, 1), (1, 1), (10, 1), (11, 2), (20, 2), (25, 3)] {
            let browser = CatalogBrowser::new(catalog(&[(a, n)]), Vec::new(), true);
            assert_eq!(browser.page_count(), pages, "n = {}", n);
        }
    }

    #[test]
    fn test_first_page_holds_first_ten() {
        let a = Uuid::new_v4();
        let products = catalog(&[(a, 25)]);
        let expected: Vec<Uuid> = products[..10].iter().map(|p| p.product.id).collect();
        let browser = CatalogBrowser::new(products, Vec::new(), true);

        let visible: Vec<Uuid> = browser.visible().iter().map(|p| p.product.id).collect();

        assert_eq!(browser.current_page(), 1);
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_last_page_is_partial() {
        let a = Uuid::new_v4();
        let mut browser = CatalogBrowser::new(catalog(&[(a, 25)]), Vec::new(), true);

        browser.set_page(3);

        assert_eq!(browser.visible().len(), 5);
    }

    #[test]
    fn test_page_is_clamped() {
        let a = Uuid::new_v4();
        let mut browser = CatalogBrowser::new(catalog(&[(a, 25)]), Vec::new(), true);

        browser.set_page(99);
        assert_eq!(browser.current_page(), 3);

        browser.set_page(0);
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn test_filter_keeps_only_matching_category_in_order() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut products = catalog(&[(a, 3), (b, 2)]);
        products.swap(1, 3);
        let expected: Vec<Uuid> = products
            .iter()
            .filter(|p| p.product.category_id == b)
            .map(|p| p.product.id)
            .collect();
        let mut browser = CatalogBrowser::new(products, Vec::new(), true);

        browser.select_category(CategoryFilter::Category(b));
        let visible: Vec<Uuid> = browser.visible().iter().map(|p| p.product.id).collect();

        assert_eq!(visible, expected);
        assert!(browser
            .visible()
            .iter()
            .all(|p| p.product.category_id == b));
    }

    #[test]
    fn test_changing_filter_resets_page() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut browser = CatalogBrowser::new(catalog(&[(a, 15), (b, 15)]), Vec::new(), true);

        browser.set_page(3);
        assert_eq!(browser.current_page(), 3);

        browser.select_category(CategoryFilter::Category(a));
        assert_eq!(browser.current_page(), 1);

        browser.set_page(2);
        browser.select_category(CategoryFilter::Category(a));
        assert_eq!(browser.current_page(), 2);

        browser.select_category(CategoryFilter::All);
        assert_eq!(browser.current_page(), 1);
    }

    #[test]
    fn test_no_slicing_without_pagination() {
        let a = Uuid::new_v4();
        let mut browser = CatalogBrowser::new(catalog(&[(a, 25)]), Vec::new(), false);

        browser.set_page(2);

        assert_eq!(browser.visible().len(), 25);
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        let a = Uuid::new_v4();
        let mut browser = CatalogBrowser::new(
            catalog(&[(a, 4)]),
            vec![category("Candles", true)],
            true,
        );

        browser.select_category(CategoryFilter::Category(Uuid::new_v4()));

        assert_eq!(browser.page_count(), 1);
        assert!(browser.visible().is_empty());
        assert_eq!(browser.categories().len(), 1);
    }
}

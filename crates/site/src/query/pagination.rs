//! Clamping pagination over a product slice.

use pjy_core::Product;

/// One page of products plus the pagination facts templates need.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub items: Vec<&'a Product>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Paginate a product slice.
///
/// Out-of-range page numbers clamp into `[1, total_pages]` rather than
/// erroring - a stale link to page 9 of a shrunken catalog lands on the
/// last page. An empty input yields `total_pages == 0` with `current_page
/// == 1` and no items. A `page_size` of 0 is treated as 1.
#[must_use]
pub fn paginate(products: &[Product], page: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total_items = products.len();
    let total_pages = total_items.div_ceil(page_size);

    let current_page = page.clamp(1, total_pages.max(1));

    let start = (current_page - 1) * page_size;
    let items: Vec<&Product> = products.iter().skip(start).take(page_size).collect();

    Page {
        items,
        current_page,
        total_pages,
        total_items,
        has_next_page: current_page < total_pages,
        has_prev_page: current_page > 1 && total_pages > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: format!("{i}"),
                slug: format!("product-{i}"),
                ..Product::default()
            })
            .collect()
    }

    #[test]
    fn slices_pages_in_order() {
        let products = catalog(14);
        let page = paginate(&products, 2, 6);

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 14);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.items[0].slug, "product-6");
        assert!(page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let products = catalog(14);
        let page = paginate(&products, 3, 6);

        assert_eq!(page.items.len(), 2);
        assert!(!page.has_next_page);
        assert!(page.has_prev_page);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let products = catalog(14);

        let too_low = paginate(&products, 0, 6);
        assert_eq!(too_low.current_page, 1);
        assert_eq!(too_low.items[0].slug, "product-0");

        let too_high = paginate(&products, 99, 6);
        assert_eq!(too_high.current_page, 3);
        assert_eq!(too_high.items.len(), 2);
    }

    #[test]
    fn empty_input_does_not_panic() {
        let page = paginate(&[], 1, 6);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next_page);
        assert!(!page.has_prev_page);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let products = catalog(3);
        let page = paginate(&products, 2, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].slug, "product-1");
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let products = catalog(12);
        let page = paginate(&products, 2, 6);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
    }
}

use crate::domain::models::product::Product;

/// A product that was left out of a listing because its metadata could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedProduct {
    pub product_id: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total_pages: usize,
    pub total_elements: usize,
    pub page: usize,
    pub size: usize,
    pub skipped: Vec<SkippedProduct>,
}

impl CatalogPage {
    /// Slices one page out of an already sorted product list.
    pub fn paginate(
        products: Vec<Product>,
        page: usize,
        size: usize,
        skipped: Vec<SkippedProduct>,
    ) -> Self {
        let total_elements = products.len();
        let total_pages = total_elements.div_ceil(size);
        let start = page.saturating_mul(size);

        let items = if start < total_elements {
            let end = start.saturating_add(size).min(total_elements);
            products.into_iter().skip(start).take(end - start).collect()
        } else {
            Vec::new()
        };

        Self {
            items,
            total_pages,
            total_elements,
            page,
            size,
            skipped,
        }
    }
}

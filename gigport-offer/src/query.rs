use gigport_core::{paginate, DomainError, Page};

use crate::filter::OfferFilters;
use crate::models::Offer;
use crate::ordering::OfferOrdering;

pub const DEFAULT_PAGE_SIZE: u32 = 6;
/// Clients may ask for less, never for more.
pub const MAX_PAGE_SIZE: u32 = 6;

/// A complete list request: filter, then order, then paginate.
#[derive(Debug, Clone)]
pub struct OfferQuery {
    pub filters: OfferFilters,
    pub ordering: OfferOrdering,
    pub page: u32,
    pub page_size: u32,
}

impl OfferQuery {
    pub fn new(
        filters: OfferFilters,
        ordering: OfferOrdering,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Self {
        Self {
            filters,
            ordering,
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn run(&self, offers: Vec<Offer>) -> Result<Page<Offer>, DomainError> {
        let mut matched = self.filters.apply(offers);
        self.ordering.sort(&mut matched);
        paginate(matched, self.page, self.page_size)
    }
}

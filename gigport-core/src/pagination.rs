use serde::Serialize;

use crate::error::DomainError;

/// One page of results plus the envelope metadata clients paginate with.
/// `next`/`previous` are page numbers, `None` at either end.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

/// Cuts `items` into the requested page (1-based).
///
/// Page 1 is always valid, even over an empty collection; any page past the
/// end is a not-found, matching the existing API surface.
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: u32) -> Result<Page<T>, DomainError> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let count = items.len() as u64;
    let total_pages = ((count + page_size as u64 - 1) / page_size as u64).max(1) as u32;

    if page > total_pages {
        return Err(DomainError::NotFound("Ungültige Seite.".to_owned()));
    }

    let start = ((page - 1) * page_size) as usize;
    let results: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    Ok(Page {
        count,
        next: (page < total_pages).then(|| page + 1),
        previous: (page > 1).then(|| page - 1),
        results,
    })
}

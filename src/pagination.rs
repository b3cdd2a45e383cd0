/// Slices ordered result sets into fixed-size pages. The page size is set
/// once at construction, from configuration, and is not client-controlled.
#[derive(Debug, Clone)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the 1-based `page` of `items`, clamped to its bounds. Pages
    /// past the end yield an empty slice, never an error; translating an
    /// empty page into a response status is the caller's concern.
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let page = page.max(1);
        let start = (page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Page numbers arrive as raw query text. Absent, non-numeric, zero, or
/// negative input degrades to page 1 rather than rejecting the request.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page > 0)
        .map(|page| page as usize)
        .unwrap_or(1)
}

use blog_core_api::{Builder, DomainError, DomainResult};
use tracing::debug;

use crate::pagination::{
    PagedEnumerable, PagedEnumerableCount, PagedEnumerableMetadata, PagedEnumerableNavigation,
};

/// Pagination request parameters for offset-based pagination
///
/// Page numbers are 0-based, matching [`PagedEnumerableNavigation`].
///
/// # Example
/// ```
/// use blog_core_db::repository::pagination::PageRequest;
///
/// let page_request = PageRequest::new(20, 0); // First page with 20 items
/// let next_page = PageRequest::new(20, 20); // Second page
/// assert_eq!(next_page.page_number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub take: u64,
    /// Number of items to skip
    pub skip: u64,
}

impl PageRequest {
    /// Page size used when the caller does not ask for one
    pub const DEFAULT_TAKE: u64 = 100;

    /// Create a new page request
    ///
    /// # Arguments
    /// * `take` - Maximum number of items to return
    /// * `skip` - Number of items to skip
    pub fn new(take: u64, skip: u64) -> Self {
        Self { take, skip }
    }

    /// Create a page request for a specific page number (0-based)
    ///
    /// # Example
    /// ```
    /// use blog_core_db::repository::pagination::PageRequest;
    ///
    /// let page_0 = PageRequest::for_page(20, 0); // skip: 0
    /// let page_1 = PageRequest::for_page(20, 1); // skip: 20
    /// assert_eq!(page_1.skip, 20);
    /// ```
    pub fn for_page(page_size: u64, page_number: u64) -> Self {
        Self {
            take: page_size,
            skip: page_number.saturating_mul(page_size),
        }
    }

    /// Get the page number (0-based) for this request
    pub fn page_number(&self) -> u64 {
        if self.take == 0 {
            0
        } else {
            self.skip / self.take
        }
    }

    /// Whether `skip` falls on a page boundary
    ///
    /// A request with `take == 0` is a single page and always aligned.
    pub fn is_aligned(&self) -> bool {
        self.take == 0 || self.skip % self.take == 0
    }

    /// Get the number of the last page for a result set of `total` items
    pub fn last_page_number(&self, total: u64) -> u64 {
        if self.take == 0 || total == 0 {
            0
        } else {
            total.div_ceil(self.take) - 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            take: Self::DEFAULT_TAKE,
            skip: 0,
        }
    }
}

/// Assemble a [`PagedEnumerable`] for one page of a result set
///
/// `records` is the page itself and `total` the size of the whole result set. A
/// request that starts past the end of the result set is reported as its own last
/// page, with no records.
///
/// # Returns
/// * `OutOfRange` naming `skip` when the request does not start on a page boundary,
///   since page numbers could not lead back to the following records
pub fn paginate<T, I>(records: I, total: u64, request: PageRequest) -> DomainResult<PagedEnumerable<T>>
where
    I: IntoIterator<Item = T>,
{
    if !request.is_aligned() {
        return Err(DomainError::OutOfRange {
            name: "skip",
            reason: format!(
                "skip must be a multiple of take ({}). Actual value: {}",
                request.take, request.skip
            ),
        });
    }

    let builder = PagedEnumerable::builder().with_records(records);
    let current_page = request.page_number();
    let last_page = request.last_page_number(total).max(current_page);

    let count = PagedEnumerableCount::builder()
        .with_current(to_signed("current", builder.records().len() as u64)?)?
        .with_total(to_signed("total", total)?)?
        .with_skipped(to_signed("skipped", request.skip)?)?
        .build()?;

    let navigation = PagedEnumerableNavigation::builder()
        .with_first_page_number(0)?
        .with_current_page_number(to_signed("current_page_number", current_page)?)?
        .with_last_page_number(to_signed("last_page_number", last_page)?)?
        .build()?;

    debug!(
        take = request.take,
        skip = request.skip,
        total,
        current_page,
        last_page,
        "assembled page"
    );

    builder
        .with_metadata(
            PagedEnumerableMetadata::builder()
                .with_count(count)
                .with_navigation(navigation)
                .build()?,
        )
        .build()
}

fn to_signed(name: &'static str, value: u64) -> DomainResult<i64> {
    i64::try_from(value).map_err(|_| DomainError::OutOfRange {
        name,
        reason: format!("{name} exceeds {}. Actual value: {value}", i64::MAX),
    })
}

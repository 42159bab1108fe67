use blog_core_api::{Builder, DomainResult};

use super::count_builder::non_negative;
use super::navigation::PagedEnumerableNavigation;

/// Builder for [`PagedEnumerableNavigation`]
///
/// Setters only check that a page number is not negative. The ordering between the
/// first, current and last page numbers is checked by [`Builder::build`], so the
/// numbers can be supplied in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagedEnumerableNavigationBuilder {
    first_page_number: u64,
    current_page_number: u64,
    last_page_number: u64,
}

impl PagedEnumerableNavigationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(first_page_number: u64, current_page_number: u64, last_page_number: u64) -> Self {
        Self {
            first_page_number,
            current_page_number,
            last_page_number,
        }
    }

    pub fn first_page_number(&self) -> u64 {
        self.first_page_number
    }

    pub fn current_page_number(&self) -> u64 {
        self.current_page_number
    }

    pub fn last_page_number(&self) -> u64 {
        self.last_page_number
    }

    pub fn with_first_page_number(&self, first_page_number: i64) -> DomainResult<Self> {
        Ok(Self {
            first_page_number: non_negative("first_page_number", first_page_number)?,
            ..*self
        })
    }

    pub fn with_current_page_number(&self, current_page_number: i64) -> DomainResult<Self> {
        Ok(Self {
            current_page_number: non_negative("current_page_number", current_page_number)?,
            ..*self
        })
    }

    pub fn with_last_page_number(&self, last_page_number: i64) -> DomainResult<Self> {
        Ok(Self {
            last_page_number: non_negative("last_page_number", last_page_number)?,
            ..*self
        })
    }
}

impl Builder for PagedEnumerableNavigationBuilder {
    type Output = PagedEnumerableNavigation;

    fn build(&self) -> DomainResult<PagedEnumerableNavigation> {
        PagedEnumerableNavigation::create(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_starts_at_zero() {
        let builder = PagedEnumerableNavigationBuilder::new();

        assert_eq!(builder.first_page_number(), 0);
        assert_eq!(builder.current_page_number(), 0);
        assert_eq!(builder.last_page_number(), 0);
    }

    #[test]
    fn test_negative_page_numbers_are_rejected() {
        let builder = PagedEnumerableNavigationBuilder::new();

        let err = builder.with_first_page_number(-1).unwrap_err();
        assert!(err.is_range_violation());
        assert_eq!(err.param_name(), Some("first_page_number"));

        let err = builder.with_current_page_number(-2).unwrap_err();
        assert_eq!(err.param_name(), Some("current_page_number"));
        assert!(err.to_string().contains("-2"));

        let err = builder.with_last_page_number(-3).unwrap_err();
        assert_eq!(err.param_name(), Some("last_page_number"));
    }

    #[test]
    fn test_setters_do_not_check_ordering() -> DomainResult<()> {
        // Ordering is only enforced once the navigation is built.
        let builder = PagedEnumerableNavigationBuilder::new()
            .with_first_page_number(10)?
            .with_current_page_number(1)?
            .with_last_page_number(1)?;

        assert_eq!(builder.first_page_number(), 10);
        assert!(builder.build().is_err());
        Ok(())
    }

    #[test]
    fn test_builders_share_no_state() -> DomainResult<()> {
        let base = PagedEnumerableNavigationBuilder::new().with_last_page_number(5)?;
        let on_two = base.with_current_page_number(2)?;
        let on_four = base.with_current_page_number(4)?;

        assert_eq!(base.current_page_number(), 0);
        assert_eq!(on_two.current_page_number(), 2);
        assert_eq!(on_four.current_page_number(), 4);
        Ok(())
    }
}

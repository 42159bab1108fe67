use blog_core_api::{Builder, DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::navigation_builder::PagedEnumerableNavigationBuilder;

/// Position of a page relative to the first and last pages of a result set
///
/// Holds `first_page_number <= current_page_number <= last_page_number`. The
/// adjacency properties are derived from these three numbers on access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NavigationFields")]
pub struct PagedEnumerableNavigation {
    first_page_number: u64,
    current_page_number: u64,
    last_page_number: u64,
}

impl PagedEnumerableNavigation {
    /// Create a navigation from the given builder, checking in order that
    /// first <= last, first <= current and current <= last.
    pub fn create(builder: &PagedEnumerableNavigationBuilder) -> DomainResult<Self> {
        let first = builder.first_page_number();
        let current = builder.current_page_number();
        let last = builder.last_page_number();

        if first > last {
            return Err(DomainError::out_of_order("first_page_number", "last_page_number"));
        }

        if first > current {
            return Err(DomainError::out_of_order("first_page_number", "current_page_number"));
        }

        if current > last {
            return Err(DomainError::out_of_order("current_page_number", "last_page_number"));
        }

        Ok(Self {
            first_page_number: first,
            current_page_number: current,
            last_page_number: last,
        })
    }

    /// Same as [`create`](Self::create), rejecting an absent builder with `NullArgument`
    pub fn create_from(builder: Option<&PagedEnumerableNavigationBuilder>) -> DomainResult<Self> {
        builder
            .ok_or(DomainError::NullArgument("builder"))
            .and_then(Self::create)
    }

    /// Start a navigation builder on page `0` of `0..=0`
    pub fn builder() -> PagedEnumerableNavigationBuilder {
        PagedEnumerableNavigationBuilder::new()
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

    pub fn is_first_page(&self) -> bool {
        self.current_page_number == self.first_page_number
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page_number == self.last_page_number
    }

    pub fn has_next_page(&self) -> bool {
        !self.is_last_page()
    }

    pub fn has_previous_page(&self) -> bool {
        !self.is_first_page()
    }

    /// Page number after the current one, or `None` on the last page
    pub fn next_page_number(&self) -> Option<u64> {
        if self.is_last_page() {
            None
        } else {
            Some(self.current_page_number + 1)
        }
    }

    /// Page number before the current one, or `None` on the first page
    pub fn previous_page_number(&self) -> Option<u64> {
        if self.is_first_page() {
            None
        } else {
            Some(self.current_page_number - 1)
        }
    }
}

impl TryFrom<PagedEnumerableNavigationBuilder> for PagedEnumerableNavigation {
    type Error = DomainError;

    fn try_from(builder: PagedEnumerableNavigationBuilder) -> DomainResult<Self> {
        builder.build()
    }
}

/// Wire shape of a navigation, validated on the way in
#[derive(Deserialize)]
struct NavigationFields {
    first_page_number: u64,
    current_page_number: u64,
    last_page_number: u64,
}

impl TryFrom<NavigationFields> for PagedEnumerableNavigation {
    type Error = DomainError;

    fn try_from(fields: NavigationFields) -> DomainResult<Self> {
        Self::create(&PagedEnumerableNavigationBuilder::from_parts(
            fields.first_page_number,
            fields.current_page_number,
            fields.last_page_number,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigation(first: i64, current: i64, last: i64) -> DomainResult<PagedEnumerableNavigation> {
        PagedEnumerableNavigation::builder()
            .with_first_page_number(first)?
            .with_current_page_number(current)?
            .with_last_page_number(last)?
            .build()
    }

    #[test]
    fn test_first_greater_than_last_is_rejected() {
        let err = navigation(10, 1, 1).unwrap_err();

        assert!(err.is_range_violation());
        let message = err.to_string();
        assert!(message.contains("first_page_number"));
        assert!(message.contains("last_page_number"));
        assert!(message.contains("first_page_number must be less than or equal to last_page_number"));
    }

    #[test]
    fn test_first_greater_than_current_is_rejected() {
        let err = navigation(1, 0, 1).unwrap_err();

        assert_eq!(
            err,
            DomainError::out_of_order("first_page_number", "current_page_number")
        );
    }

    #[test]
    fn test_current_greater_than_last_is_rejected() {
        let err = navigation(0, 2, 1).unwrap_err();

        assert_eq!(
            err,
            DomainError::out_of_order("current_page_number", "last_page_number")
        );
    }

    #[test]
    fn test_first_violation_in_check_order_is_reported() {
        // first > last and first > current both hold; first > last is checked first.
        let err = navigation(5, 0, 3).unwrap_err();

        assert_eq!(err, DomainError::out_of_order("first_page_number", "last_page_number"));
    }

    #[test]
    fn test_single_page() -> DomainResult<()> {
        let nav = navigation(0, 0, 0)?;

        assert!(nav.is_first_page());
        assert!(nav.is_last_page());
        assert!(!nav.has_previous_page());
        assert!(!nav.has_next_page());
        assert_eq!(nav.previous_page_number(), None);
        assert_eq!(nav.next_page_number(), None);
        Ok(())
    }

    #[test]
    fn test_last_of_two_pages() -> DomainResult<()> {
        let nav = navigation(0, 1, 1)?;

        assert!(nav.has_previous_page());
        assert_eq!(nav.previous_page_number(), Some(0));
        assert!(!nav.has_next_page());
        assert_eq!(nav.next_page_number(), None);
        Ok(())
    }

    #[test]
    fn test_middle_page() -> DomainResult<()> {
        let nav = navigation(0, 1, 2)?;

        assert!(!nav.is_first_page());
        assert!(!nav.is_last_page());
        assert_eq!(nav.previous_page_number(), Some(0));
        assert_eq!(nav.next_page_number(), Some(2));
        Ok(())
    }

    #[test]
    fn test_default_is_all_zero() {
        let nav = PagedEnumerableNavigation::default();

        assert_eq!(nav.first_page_number(), 0);
        assert_eq!(nav.current_page_number(), 0);
        assert_eq!(nav.last_page_number(), 0);
        assert_eq!(nav, PagedEnumerableNavigation::default());
        assert_eq!(Ok(nav), navigation(0, 0, 0));
    }

    #[test]
    fn test_create_from_none_is_rejected() {
        let err = PagedEnumerableNavigation::create_from(None).unwrap_err();

        assert_eq!(err, DomainError::NullArgument("builder"));
    }

    #[test]
    fn test_deserialize_checks_ordering() {
        let valid: Result<PagedEnumerableNavigation, _> = serde_json::from_str(
            r#"{ "first_page_number": 0, "current_page_number": 1, "last_page_number": 3 }"#,
        );
        assert_eq!(valid.ok().map(|nav| nav.next_page_number()), Some(Some(2)));

        let invalid: Result<PagedEnumerableNavigation, _> = serde_json::from_str(
            r#"{ "first_page_number": 4, "current_page_number": 1, "last_page_number": 3 }"#,
        );
        let err = invalid.unwrap_err();
        assert!(err.to_string().contains("first_page_number must be less than or equal to last_page_number"));
    }
}

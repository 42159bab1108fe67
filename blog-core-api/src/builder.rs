use crate::error::DomainResult;

/// Contract for builders that produce an immutable value.
///
/// Builders in this workspace never mutate in place: every `with_*` call returns
/// a fresh builder, and `build` runs whatever validation was deferred until the
/// value is assembled.
///
/// # Example
/// ```ignore
/// let navigation = PagedEnumerableNavigationBuilder::new()
///     .with_current_page_number(1)?
///     .with_last_page_number(1)?
///     .build()?;
/// ```
pub trait Builder {
    /// The type of value this builder produces
    type Output;

    /// Builds an instance of `Self::Output` from the current state of the builder
    fn build(&self) -> DomainResult<Self::Output>;
}

//! Assertion primitives.
//!
//! Each function either returns `Ok(())` when the check holds or a single
//! [`Failure`] describing the violation. They have no other effect.
//! The `assert_*!` macros are thin wrappers that fill in the [`Site`] and
//! terminate the test body on the first failure.

use crate::{failure::Failure, message};
use std::fmt;

/// The place an assertion was written at.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone)]
pub struct Site<'a> {
    pub file: &'a str,
    pub line: u32,
    pub label: &'a str,
}

/// Values that have a null sentinel.
pub trait Nullable {
    /// Return whether the value equals its null sentinel.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

/// Check that `expected` and `actual` are equal.
pub fn assert_equal<E, A>(site: &Site<'_>, expected: &E, actual: &A) -> Result<(), Failure>
where
    E: PartialEq<A> + fmt::Display + ?Sized,
    A: fmt::Display + ?Sized,
{
    if *expected == *actual {
        return Ok(());
    }
    Err(Failure::new(message::equals_message(
        site.file, site.line, site.label, expected, actual,
    )))
}

/// Check that `observed` matches `sense`.
pub fn assert_bool(
    site: &Site<'_>,
    observed: bool,
    sense: bool,
    expr_text: &str,
) -> Result<(), Failure> {
    if observed == sense {
        return Ok(());
    }
    Err(Failure::new(message::bool_message(
        site.file, site.line, site.label, expr_text, observed,
    )))
}

/// Check that `value` is null.
///
/// Reported in the same way as `assert_bool(value == null, true)`.
pub fn assert_null<T>(site: &Site<'_>, value: &T, expr_text: &str) -> Result<(), Failure>
where
    T: Nullable + ?Sized,
{
    assert_bool(site, value.is_null(), true, &format!("{} == null", expr_text))
}

/// Check that `value` is not null.
///
/// Reported in the same way as `assert_bool(value != null, true)`.
pub fn assert_not_null<T>(site: &Site<'_>, value: &T, expr_text: &str) -> Result<(), Failure>
where
    T: Nullable + ?Sized,
{
    assert_bool(site, !value.is_null(), true, &format!("{} != null", expr_text))
}

/// Fail unconditionally.
pub fn fail(site: &Site<'_>, message: &str) -> Result<(), Failure> {
    Err(Failure::new(message::fail_message(
        site.file, site.line, site.label, message,
    )))
}

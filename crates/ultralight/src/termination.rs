/// Return types accepted from test bodies.
///
/// A test body may return `()` or `Result<(), E>` for any error convertible
/// into `anyhow::Error`.
pub trait Termination: sealed::Sealed {
    /// Convert the returned value into the error reported by the runner.
    #[doc(hidden)]
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> Termination for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<E> Sealed for Result<(), E> where E: Into<anyhow::Error> {}
}

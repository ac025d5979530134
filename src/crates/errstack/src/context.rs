//! Building stacks from `Result`s
//!
//! [`StackContext`] turns the error side of any `Result` into a [`Stack`],
//! so a call chain can grow one with `?`:
//!
//! ```rust
//! use errstack::{is, Stack, StackContext};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! #[error("unable to fetch data")]
//! struct DataFetching;
//!
//! fn cache() -> Result<String, std::io::Error> {
//!     Err(std::io::Error::new(std::io::ErrorKind::NotFound, "some cache error"))
//! }
//!
//! fn fetch_some_data() -> Result<String, Stack> {
//!     let data = cache().wrap_err(DataFetching)?;
//!     Ok(data)
//! }
//!
//! let err = fetch_some_data().unwrap_err();
//! assert!(is(&err, &DataFetching));
//! assert_eq!(err.to_string(), "unable to fetch data. some cache error.");
//! ```

use crate::{BoxError, Stack};

/// Extension methods that turn a `Result`'s error into a [`Stack`]
///
/// The error is first passed through [`Stack::new`], so a result that
/// already carries a stack is extended rather than nested.
pub trait StackContext<T> {
    /// Wrap the error with `target`, starting a new layer
    fn wrap_err<W>(self, target: W) -> Result<T, Stack>
    where
        W: Into<BoxError>;

    /// Record `err` on the newest layer without wrapping
    fn add_err<A>(self, err: A) -> Result<T, Stack>
    where
        A: Into<BoxError>;

    /// Record a lazily built error on the newest layer
    ///
    /// `f` only runs if the result is an error.
    fn add_err_with<A, F>(self, f: F) -> Result<T, Stack>
    where
        A: Into<BoxError>,
        F: FnOnce() -> A;
}

impl<T, E> StackContext<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err<W>(self, target: W) -> Result<T, Stack>
    where
        W: Into<BoxError>,
    {
        self.map_err(|err| Stack::new(err).wrap(target))
    }

    fn add_err<A>(self, err: A) -> Result<T, Stack>
    where
        A: Into<BoxError>,
    {
        self.map_err(|source| Stack::new(source).add(err))
    }

    fn add_err_with<A, F>(self, f: F) -> Result<T, Stack>
    where
        A: Into<BoxError>,
        F: FnOnce() -> A,
    {
        self.map_err(|source| Stack::new(source).add(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error)]
    enum AppError {
        #[error("unable to obfuscate data")]
        Obfuscate,
        #[error("encoding failed")]
        Encode,
    }

    fn encrypt() -> Result<(), std::io::Error> {
        Err(std::io::Error::other("encryption error"))
    }

    fn encode() -> Result<(), Stack> {
        encrypt().map_err(|err| Stack::new(AppError::Encode).add(err))
    }

    fn obfuscate() -> Result<(), Stack> {
        encode()
            .wrap_err(AppError::Obfuscate)
            .add_err("some context of what happened")
    }

    #[test]
    fn test_wrap_err() {
        let result: Result<(), &str> = Err("low level");
        let err = result.wrap_err(AppError::Encode).unwrap_err();

        assert!(is(&err, &AppError::Encode));
        assert_eq!(err.to_string(), "encoding failed. low level.");
    }

    #[test]
    fn test_add_err() {
        let result: Result<(), String> = Err("low level".to_string());
        let err = result.add_err("detail").unwrap_err();

        assert_eq!(err.depth(), 1);
        assert_eq!(err.to_string(), "low level: detail.");
    }

    #[test]
    fn test_add_err_with_is_lazy() {
        let ok: Result<u8, &str> = Ok(7);
        let value = ok
            .add_err_with(|| -> String { panic!("must not run on Ok") })
            .unwrap();
        assert_eq!(value, 7);

        let err: Result<u8, &str> = Err("failed");
        let stack = err.add_err_with(|| format!("attempt {}", 3)).unwrap_err();
        assert_eq!(stack.to_string(), "failed: attempt 3.");
    }

    #[test]
    fn test_extends_existing_stack() {
        let err = obfuscate().unwrap_err();

        assert_eq!(err.depth(), 2);
        assert!(is(&err, &AppError::Obfuscate));
        assert!(!is(&err, &AppError::Encode));
        assert_eq!(
            err.to_string(),
            "unable to obfuscate data: some context of what happened. encoding failed: encryption error."
        );
    }

    #[test]
    fn test_ok_passes_through() {
        let result: Result<&str, &str> = Ok("fine");
        assert_eq!(result.wrap_err("unused").unwrap(), "fine");
    }
}

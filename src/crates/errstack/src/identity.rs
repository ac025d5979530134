//! Identity comparison over `source()` chains
//!
//! A [`Stack`](crate::Stack) exposes only its newest target through
//! `source()`. These helpers walk that chain generically, so they work on a
//! stack, on a plain error, or on a stack buried inside some other error.
//!
//! # Example
//!
//! ```rust
//! use errstack::{find, is, Stack};
//!
//! #[derive(Debug, PartialEq, thiserror::Error)]
//! enum EncodeError {
//!     #[error("encoding failed")]
//!     Encode,
//!     #[error("encryption error")]
//!     Encrypt,
//! }
//!
//! let stack = Stack::new(EncodeError::Encode).add(EncodeError::Encrypt);
//!
//! assert!(is(&stack, &EncodeError::Encode));
//! assert!(!is(&stack, &EncodeError::Encrypt));
//! assert_eq!(find::<EncodeError>(&stack), Some(&EncodeError::Encode));
//! ```

use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over an error and everything reachable through `source()`
///
/// Created by [`sources`].
#[derive(Debug, Clone)]
pub struct Sources<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Sources<'_> {}

/// Walk the identity chain of `error`, starting with `error` itself
pub fn sources<'a>(error: &'a (dyn StdError + 'static)) -> Sources<'a> {
    Sources { next: Some(error) }
}

/// Whether `error`, or anything it wraps, equals `sentinel`
///
/// Every node of the `source()` chain is downcast to `E` and compared with
/// `PartialEq`. Annotations added to a stack are never visited.
pub fn is<E>(error: &(dyn StdError + 'static), sentinel: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    sources(error).any(|err| err.downcast_ref::<E>() == Some(sentinel))
}

/// First error of type `E` in the identity chain of `error`
pub fn find<'a, E>(error: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + 'static,
{
    sources(error).find_map(|err| err.downcast_ref::<E>())
}

/// Get the root cause of an error chain
///
/// Walks the chain via `source()` until reaching the bottom. For a stack
/// this is the bottom of its newest target, not its oldest layer.
pub fn root_cause<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

//! The layered error stack
//!
//! A [`Stack`] never shrinks and is never modified in place: [`Stack::wrap`]
//! and [`Stack::add`] borrow the current value and return a new one. The
//! error values themselves are shared behind `Arc`, so deriving a stack only
//! copies the layer containers.

use std::error::Error as StdError;
use std::fmt;
use std::iter;
use std::sync::Arc;

use crate::identity;
use crate::render::{RenderedLayer, RenderedStack};
use crate::BoxError;

type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// One wrap boundary: a target error plus the annotations added to it
#[derive(Debug, Clone)]
pub struct Layer {
    target: SharedError,
    /// Most recently added first
    chain: Vec<SharedError>,
}

impl Layer {
    fn new(target: SharedError) -> Self {
        Self {
            target,
            chain: Vec::new(),
        }
    }

    /// The error this layer was created to wrap
    pub fn target(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.target
    }

    /// Annotations attached to this layer, most recent first
    pub fn chain(&self) -> impl ExactSizeIterator<Item = &(dyn StdError + Send + Sync + 'static)> {
        self.chain.iter().map(|err| &**err)
    }

    fn write_message(&self, out: &mut String) {
        out.push_str(&self.target.to_string());

        if !self.chain.is_empty() {
            out.push_str(": ");
            let chain: Vec<String> = self.chain.iter().map(|err| err.to_string()).collect();
            out.push_str(&chain.join(", "));
        }

        out.push_str(". ");
    }

    fn roll_out(&self) -> RenderedLayer {
        RenderedLayer::new(
            self.target.to_string(),
            self.chain.iter().map(|err| err.to_string()).collect(),
        )
    }
}

/// A non-empty hierarchy of errors, most recent layer first
///
/// Create one with [`Stack::new`], start a new layer with [`Stack::wrap`] and
/// annotate the newest layer with [`Stack::add`].
///
/// As an error, a stack displays its flattened message and reports the
/// newest layer's target as its `source()`. Annotations never show up in
/// identity checks.
///
/// # Example
///
/// ```rust
/// use errstack::{is, Stack};
///
/// #[derive(Debug, PartialEq, thiserror::Error)]
/// #[error("unable to fetch data")]
/// struct DataFetching;
///
/// let stack = Stack::new("some cache error").wrap(DataFetching);
///
/// assert!(is(&stack, &DataFetching));
/// assert_eq!(stack.to_string(), "unable to fetch data. some cache error.");
/// ```
#[derive(Debug, Clone)]
pub struct Stack {
    head: Layer,
    /// Older layers, newest first
    tail: Vec<Layer>,
}

impl Stack {
    /// Create a stack from an error
    ///
    /// If `err` already is a `Stack`, including one behind a
    /// `Box<dyn Error + Send + Sync>`, it is returned as is instead of being
    /// nested inside a new stack.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        match err.into().downcast::<Stack>() {
            Ok(stack) => {
                tracing::trace!(depth = stack.depth(), "reusing existing error stack");
                *stack
            }
            Err(err) => {
                tracing::trace!(target_error = %err, "creating error stack");
                Self {
                    head: Layer::new(Arc::from(err)),
                    tail: Vec::new(),
                }
            }
        }
    }

    /// Return a new stack with an extra layer targeting `target`
    ///
    /// Later calls to [`Stack::add`] annotate this new layer.
    pub fn wrap<E>(&self, target: E) -> Self
    where
        E: Into<BoxError>,
    {
        let head = Layer::new(Arc::from(target.into()));
        let tail: Vec<Layer> = iter::once(self.head.clone())
            .chain(self.tail.iter().cloned())
            .collect();

        tracing::trace!(depth = tail.len() + 1, target_error = %head.target, "wrapped error stack");

        Self { head, tail }
    }

    /// Return a new stack with `err` recorded on the newest layer
    ///
    /// The added error is context only: it is never reported through
    /// `source()`.
    pub fn add<E>(&self, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let mut head = self.head.clone();
        head.chain.insert(0, Arc::from(err.into()));

        tracing::trace!(chain_len = head.chain.len(), "annotated error stack");

        Self {
            head,
            tail: self.tail.clone(),
        }
    }

    /// The newest layer's target
    pub fn target(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.head.target()
    }

    /// The newest layer
    pub fn front(&self) -> &Layer {
        &self.head
    }

    /// Iterate over the layers, newest first
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Number of layers, always at least one
    pub fn depth(&self) -> usize {
        1 + self.tail.len()
    }

    /// The flattened single-line message
    ///
    /// Each layer reads `"<target>: <chain, joined by \", \">. "`, or
    /// `"<target>. "` when it has no annotations. The result is trimmed.
    pub fn message(&self) -> String {
        let mut msg = String::new();
        for layer in self.layers() {
            layer.write_message(&mut msg);
        }

        msg.trim().to_string()
    }

    /// Detach the stack into a string-only view
    pub fn roll_out(&self) -> RenderedStack {
        self.layers().map(Layer::roll_out).collect()
    }

    /// Whether the stack represents `sentinel`
    ///
    /// Shorthand for [`crate::is`] on this stack.
    pub fn is<E>(&self, sentinel: &E) -> bool
    where
        E: StdError + PartialEq + 'static,
    {
        identity::is(self, sentinel)
    }

    /// First error of type `E` reachable through `source()`
    pub fn find<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        identity::find(self)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for Stack {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.head.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, PartialEq, Error)]
    #[error("{0}")]
    struct Sentinel(&'static str);

    fn layered() -> Stack {
        Stack::new("first")
            .wrap("second")
            .add("third")
            .add("fourth")
            .wrap("fifth")
            .wrap("sixth")
            .add("seventh")
    }

    #[test]
    fn test_new_single_layer() {
        let stack = Stack::new(Sentinel("initial error"));

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.front().chain().len(), 0);
        assert_eq!(stack.to_string(), "initial error.");
        assert_eq!(stack.target().to_string(), "initial error");
    }

    #[test]
    fn test_new_reuses_stack() {
        let inner = Stack::new("first").wrap("second").add("note");
        let again = Stack::new(inner.clone());

        assert_eq!(again.depth(), 2);
        assert_eq!(again.to_string(), inner.to_string());
    }

    #[test]
    fn test_new_reuses_boxed_stack() {
        let boxed: BoxError = Box::new(Stack::new("first").wrap("second"));
        let stack = Stack::new(boxed);

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.to_string(), "second. first.");
    }

    #[test]
    fn test_wrap_starts_new_layer() {
        let stack = Stack::new("initial error").wrap("wrapping error");

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.target().to_string(), "wrapping error");
        assert_eq!(stack.to_string(), "wrapping error. initial error.");
    }

    #[test]
    fn test_add_prepends_to_front_chain() {
        let stack = Stack::new("initial error").add("second").add("third");

        let chain: Vec<String> = stack.front().chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, vec!["third", "second"]);
        assert_eq!(stack.to_string(), "initial error: third, second.");
    }

    #[test]
    fn test_add_after_wrap_targets_new_layer() {
        let stack = Stack::new("old").add("old note").wrap("new").add("new note");

        let layers: Vec<&Layer> = stack.layers().collect();
        assert_eq!(layers[0].chain().len(), 1);
        assert_eq!(layers[0].chain().next().map(|e| e.to_string()), Some("new note".to_string()));
        assert_eq!(layers[1].chain().next().map(|e| e.to_string()), Some("old note".to_string()));
    }

    #[test]
    fn test_flattened_message() {
        assert_eq!(
            layered().to_string(),
            "sixth: seventh. fifth. second: fourth, third. first."
        );
    }

    #[test]
    fn test_message_is_trimmed() {
        let stack = Stack::new("  padded  ");
        assert_eq!(stack.message(), "padded  .");
    }

    #[test]
    fn test_add_leaves_original_untouched() {
        let s1 = Stack::new("base").wrap("top").add("a");
        let before = s1.to_string();

        let s2 = s1.add("b");
        let s3 = s1.add("c");

        assert_eq!(s1.to_string(), before);
        assert_eq!(s2.to_string(), "top: b, a. base.");
        assert_eq!(s3.to_string(), "top: c, a. base.");
    }

    #[test]
    fn test_wrap_leaves_original_untouched() {
        let s1 = Stack::new("base");
        let s2 = s1.wrap("top");
        let s3 = s2.add("note");

        assert_eq!(s1.depth(), 1);
        assert_eq!(s1.to_string(), "base.");
        assert_eq!(s2.to_string(), "top. base.");
        assert_eq!(s3.to_string(), "top: note. base.");
    }

    #[test]
    fn test_source_is_front_target() {
        let stack = Stack::new(Sentinel("a")).wrap(Sentinel("b")).add(Sentinel("c"));

        let source = stack.source().and_then(|e| e.downcast_ref::<Sentinel>());
        assert_eq!(source, Some(&Sentinel("b")));
    }

    #[test]
    fn test_stack_methods_delegate_to_identity() {
        let stack = Stack::new(Sentinel("a")).add(Sentinel("b"));

        assert!(stack.is(&Sentinel("a")));
        assert!(!stack.is(&Sentinel("b")));
        assert_eq!(stack.find::<Sentinel>(), Some(&Sentinel("a")));
    }

    #[test]
    fn test_roll_out_matches_layers() {
        let rendered = layered().roll_out();
        assert_eq!(rendered.len(), 4);

        let keys: Vec<&str> = rendered.layers().iter().map(|l| l.key()).collect();
        assert_eq!(keys, vec!["sixth", "fifth", "second", "first"]);
    }

    #[test]
    fn test_stack_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Stack>();
    }
}

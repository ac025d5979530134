//! String-only views of a stack

use std::fmt;

use super::{Layout, PRETTY_PRINT_PLACEHOLDER};

/// One rolled-out layer: the target message and its chain messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderedLayer {
    target: String,
    chain: Vec<String>,
}

impl RenderedLayer {
    /// Create a rendered layer
    pub fn new(target: impl Into<String>, chain: Vec<String>) -> Self {
        Self {
            target: target.into(),
            chain,
        }
    }

    /// The target message
    pub fn key(&self) -> &str {
        &self.target
    }

    /// The chain messages, most recent first
    pub fn values(&self) -> &[String] {
        &self.chain
    }
}

impl<K, V> From<(K, Vec<V>)> for RenderedLayer
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((target, chain): (K, Vec<V>)) -> Self {
        Self::new(target, chain.into_iter().map(Into::into).collect())
    }
}

/// A stack detached from its error values, newest layer first
///
/// Produced by [`Stack::roll_out`](crate::Stack::roll_out). `Display`
/// renders the pretty-printed form with the default layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RenderedStack {
    layers: Vec<RenderedLayer>,
}

impl RenderedStack {
    /// The rendered layers, newest first
    pub fn layers(&self) -> &[RenderedLayer] {
        &self.layers
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Render a multi-line hierarchy with the default layout
    ///
    /// Never fails: if rendering breaks, the fixed
    /// [`PRETTY_PRINT_PLACEHOLDER`] is returned instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use errstack::Stack;
    ///
    /// let stack = Stack::new("encryption error")
    ///     .wrap("encoding failed")
    ///     .add("bad key");
    ///
    /// assert_eq!(
    ///     stack.roll_out().pretty_print(),
    ///     "encoding failed:\n....bad key\nencryption error:"
    /// );
    /// ```
    pub fn pretty_print(&self) -> String {
        self.pretty_print_with(Layout::default_layout())
    }

    /// Render a multi-line hierarchy with a custom layout
    ///
    /// Same trimming and fallback as [`RenderedStack::pretty_print`].
    pub fn pretty_print_with(&self, layout: &Layout) -> String {
        let mut output = String::new();
        let result = layout.render(self, &mut output).map(|()| output);
        or_placeholder(result)
    }
}

fn or_placeholder(result: Result<String, fmt::Error>) -> String {
    match result {
        Ok(output) => output.trim().to_string(),
        Err(err) => {
            tracing::debug!(error = %err, "unable to pretty print error stack");
            PRETTY_PRINT_PLACEHOLDER.to_string()
        }
    }
}

impl fmt::Display for RenderedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        Layout::default_layout().render(self, &mut output)?;
        f.write_str(output.trim())
    }
}

impl FromIterator<RenderedLayer> for RenderedStack {
    fn from_iter<T: IntoIterator<Item = RenderedLayer>>(iter: T) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}

impl<L> From<Vec<L>> for RenderedStack
where
    L: Into<RenderedLayer>,
{
    fn from(layers: Vec<L>) -> Self {
        layers.into_iter().map(Into::into).collect()
    }
}

impl<'a> IntoIterator for &'a RenderedStack {
    type Item = &'a RenderedLayer;
    type IntoIter = std::slice::Iter<'a, RenderedLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_accessors() {
        let layer = RenderedLayer::from(("second", vec!["fourth", "third"]));
        assert_eq!(layer.key(), "second");
        assert_eq!(layer.values(), ["fourth", "third"]);
    }

    #[test]
    fn test_pretty_print_empty_chains() {
        let stack = RenderedStack::from(vec![("fifth", Vec::<String>::new()), ("first", vec![])]);
        assert_eq!(stack.pretty_print(), "fifth:\nfirst:");
    }

    #[test]
    fn test_pretty_print_trims_output() {
        let stack = RenderedStack::from(vec![("  spaced", vec!["entry  "])]);
        assert_eq!(stack.pretty_print(), "spaced:\n....entry");
    }

    #[test]
    fn test_pretty_print_empty_stack() {
        assert_eq!(RenderedStack::default().pretty_print(), "");
    }

    #[test]
    fn test_placeholder_on_failure() {
        assert_eq!(or_placeholder(Err(fmt::Error)), PRETTY_PRINT_PLACEHOLDER);
        assert_eq!(or_placeholder(Ok(" ok \n".to_string())), "ok");
    }

    #[test]
    fn test_display_matches_pretty_print() {
        let stack = RenderedStack::from(vec![("top", vec!["note"]), ("bottom", vec![])]);
        assert_eq!(stack.to_string(), stack.pretty_print());
    }

    #[test]
    fn test_into_iterator() {
        let stack = RenderedStack::from(vec![("a", vec!["1"]), ("b", vec![])]);
        let keys: Vec<&str> = (&stack).into_iter().map(RenderedLayer::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}

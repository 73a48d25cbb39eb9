//! Message sources: literal parts or a deferred computation

use std::fmt;

/// Where a log message comes from
///
/// Literal parts are joined with a single space. A deferred message is only
/// computed once the level gate has passed, so expensive formatting costs
/// nothing for dropped calls.
///
/// # Example
///
/// ```
/// use rust_console_logger::MessageSource;
///
/// assert_eq!(MessageSource::from(["Successfully", "deployed"]).into_text(), "Successfully deployed");
/// assert_eq!(MessageSource::deferred(|| format!("{} items", 3)).into_text(), "3 items");
/// ```
pub enum MessageSource<'a> {
    Literal(Vec<String>),
    Deferred(Box<dyn FnOnce() -> String + 'a>),
}

impl<'a> MessageSource<'a> {
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> String + 'a,
    {
        MessageSource::Deferred(Box::new(f))
    }

    pub fn empty() -> Self {
        MessageSource::Literal(Vec::new())
    }

    /// Evaluate into ordered message parts
    pub fn into_parts(self) -> Vec<String> {
        match self {
            MessageSource::Literal(parts) => parts,
            MessageSource::Deferred(f) => vec![f()],
        }
    }

    pub fn into_text(self) -> String {
        self.into_parts().join(" ")
    }
}

impl fmt::Debug for MessageSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageSource::Literal(parts) => f.debug_tuple("Literal").field(parts).finish(),
            MessageSource::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl Default for MessageSource<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for MessageSource<'_> {
    fn from(s: &str) -> Self {
        MessageSource::Literal(vec![s.to_string()])
    }
}

impl From<String> for MessageSource<'_> {
    fn from(s: String) -> Self {
        MessageSource::Literal(vec![s])
    }
}

impl From<&String> for MessageSource<'_> {
    fn from(s: &String) -> Self {
        MessageSource::Literal(vec![s.clone()])
    }
}

impl From<fmt::Arguments<'_>> for MessageSource<'_> {
    fn from(args: fmt::Arguments<'_>) -> Self {
        MessageSource::Literal(vec![args.to_string()])
    }
}

impl From<()> for MessageSource<'_> {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl<T: fmt::Display, const N: usize> From<[T; N]> for MessageSource<'_> {
    fn from(parts: [T; N]) -> Self {
        MessageSource::Literal(parts.iter().map(ToString::to_string).collect())
    }
}

impl<T: fmt::Display> From<Vec<T>> for MessageSource<'_> {
    fn from(parts: Vec<T>) -> Self {
        MessageSource::Literal(parts.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_literal_parts_join_with_space() {
        assert_eq!(MessageSource::from(["Failed to", "deploy"]).into_text(), "Failed to deploy");
        assert_eq!(MessageSource::from(vec![1, 2, 3]).into_text(), "1 2 3");
        assert_eq!(MessageSource::from("single").into_text(), "single");
    }

    #[test]
    fn test_empty_sources() {
        assert_eq!(MessageSource::from(()).into_text(), "");
        assert_eq!(MessageSource::default().into_parts(), Vec::<String>::new());
    }

    #[test]
    fn test_deferred_runs_only_when_evaluated() {
        let calls = Cell::new(0);
        let source = MessageSource::deferred(|| {
            calls.set(calls.get() + 1);
            "computed".to_string()
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(source.into_text(), "computed");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_format_args() {
        let source = MessageSource::from(format_args!("{}-{}", "a", 1));
        assert_eq!(source.into_text(), "a-1");
    }
}

/// Source of randomness for canned-response selection.
///
/// Injected so tests can supply a seeded source and assert membership in
/// the expected candidate set instead of exact output.
pub trait IRandomSource: Send {
    /// Pick an index in `0..len`. `len` is never zero when called by the
    /// responder; implementations may return 0 for an empty range.
    fn pick(&mut self, len: usize) -> usize;
}

/// Settings that control the behaviour of [equal_with_settings](crate::equal_with_settings)
#[derive(Clone, Debug)]
pub struct Settings {
    /// The maximum depth of nested values that will be compared
    ///
    /// Comparisons that go deeper than this are considered to be unequal, which prevents
    /// cyclic values from exhausting the stack.
    ///
    /// Default: 512
    pub max_depth: usize,
}

impl Settings {
    /// Helper for conveniently defining a maximum comparison depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

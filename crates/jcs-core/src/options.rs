/// Parser resource bounds (§3).
///
/// A plain, `Copy`-able value passed in by the caller; the core never reads
/// these from the environment or a file, and holds no default instance as
/// process-wide state (§5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    max_depth: usize,
    max_input_size: usize,
    max_values: usize,
    max_object_members: usize,
    max_array_elements: usize,
    max_string_bytes: usize,
    max_number_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            max_input_size: 64 * 1024 * 1024,
            max_values: 1_000_000,
            max_object_members: 250_000,
            max_array_elements: 250_000,
            max_string_bytes: 8 * 1024 * 1024,
            max_number_chars: 4096,
        }
    }
}

impl Options {
    /// Sets the maximum container nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, v: usize) -> Self {
        self.max_depth = v;
        self
    }

    /// Sets the maximum accepted total input size in bytes.
    #[must_use]
    pub const fn with_max_input_size(mut self, v: usize) -> Self {
        self.max_input_size = v;
        self
    }

    /// Sets the maximum total number of values across the whole document.
    #[must_use]
    pub const fn with_max_values(mut self, v: usize) -> Self {
        self.max_values = v;
        self
    }

    /// Sets the maximum number of members in any single object.
    #[must_use]
    pub const fn with_max_object_members(mut self, v: usize) -> Self {
        self.max_object_members = v;
        self
    }

    /// Sets the maximum number of elements in any single array.
    #[must_use]
    pub const fn with_max_array_elements(mut self, v: usize) -> Self {
        self.max_array_elements = v;
        self
    }

    /// Sets the maximum decoded UTF-8 length of any string or key.
    #[must_use]
    pub const fn with_max_string_bytes(mut self, v: usize) -> Self {
        self.max_string_bytes = v;
        self
    }

    /// Sets the maximum raw byte length of any number token.
    #[must_use]
    pub const fn with_max_number_chars(mut self, v: usize) -> Self {
        self.max_number_chars = v;
        self
    }

    pub(crate) const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) const fn max_input_size(&self) -> usize {
        self.max_input_size
    }

    pub(crate) const fn max_values(&self) -> usize {
        self.max_values
    }

    pub(crate) const fn max_object_members(&self) -> usize {
        self.max_object_members
    }

    pub(crate) const fn max_array_elements(&self) -> usize {
        self.max_array_elements
    }

    pub(crate) const fn max_string_bytes(&self) -> usize {
        self.max_string_bytes
    }

    pub(crate) const fn max_number_chars(&self) -> usize {
        self.max_number_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_table() {
        let o = Options::default();
        assert_eq!(o.max_depth(), 1000);
        assert_eq!(o.max_input_size(), 64 * 1024 * 1024);
        assert_eq!(o.max_values(), 1_000_000);
        assert_eq!(o.max_object_members(), 250_000);
        assert_eq!(o.max_array_elements(), 250_000);
        assert_eq!(o.max_string_bytes(), 8 * 1024 * 1024);
        assert_eq!(o.max_number_chars(), 4096);
    }

    #[test]
    fn chainable_setters_compose() {
        let o = Options::default().with_max_depth(8).with_max_input_size(64);
        assert_eq!(o.max_depth(), 8);
        assert_eq!(o.max_input_size(), 64);
    }
}

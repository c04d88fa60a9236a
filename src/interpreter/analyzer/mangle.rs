use std::collections::HashSet;

/// Rewrites a source identifier into a valid Java identifier.
///
/// Source identifiers may contain `@` and `-`, which become `$` and `_`.
///
/// # Example
/// ```
/// use plc::interpreter::analyzer::mangle::mangle;
///
/// assert_eq!(mangle("@total-count"), "$total_count");
/// assert_eq!(mangle("plain"), "plain");
/// ```
#[must_use]
pub fn mangle(name: &str) -> String {
    name.replace('@', "$").replace('-', "_")
}

/// Hands out runtime names for the locals of one function.
///
/// Java rejects a local that shadows another local of the same method, so a
/// name that was already handed out gets a numeric suffix instead.
#[derive(Debug, Default)]
pub struct LocalNames {
    taken: HashSet<String>,
}

impl LocalNames {
    /// Forgets every name, for the next function.
    pub fn clear(&mut self) {
        self.taken.clear();
    }

    /// Returns an unused runtime name for `name` and marks it as taken.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::analyzer::mangle::LocalNames;
    ///
    /// let mut names = LocalNames::default();
    ///
    /// assert_eq!(names.fresh("x"), "x");
    /// assert_eq!(names.fresh("x"), "x_1");
    /// assert_eq!(names.fresh("x"), "x_2");
    /// ```
    pub fn fresh(&mut self, name: &str) -> String {
        let base = mangle(name);
        let mut candidate = base.clone();
        let mut suffix = 0;
        while self.taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

//! Ordered first-match rule chains.
//!
//! Every metadata field is inferred the same way: walk an ordered list of
//! rules and keep the first one that produces a value. A chain is built
//! once per detector call and evaluated lazily, so later rules never run
//! (and never touch the filesystem) once an earlier one matched.

use super::tree::ProjectTree;

type Rule<'a, T> = Box<dyn Fn(&ProjectTree) -> Option<T> + 'a>;

pub struct RuleChain<'a, T> {
    field: &'static str,
    rules: Vec<(&'a str, Rule<'a, T>)>,
}

impl<'a, T> RuleChain<'a, T> {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Append a rule. `label` only shows up in debug logs.
    pub fn rule(
        mut self,
        label: &'a str,
        check: impl Fn(&ProjectTree) -> Option<T> + 'a,
    ) -> Self {
        self.rules.push((label, Box::new(check)));
        self
    }

    /// Value of the first rule that matches, if any.
    pub fn evaluate(&self, tree: &ProjectTree) -> Option<T> {
        self.rules.iter().find_map(|(label, check)| {
            let value = check(tree)?;
            tracing::debug!(field = self.field, rule = *label, "rule matched");
            Some(value)
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.rules.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a, T: Clone + 'a> RuleChain<'a, T> {
    /// Match with `value` when `path` exists under the root.
    pub fn when_exists(self, path: &'a str, value: T) -> Self {
        self.rule(path, move |tree| tree.exists(path).then(|| value.clone()))
    }
}

impl<'a> RuleChain<'a, String> {
    /// Chain over a `(path, value)` table: first existing path wins.
    pub fn from_markers(field: &'static str, table: &'a [(&'a str, &'a str)]) -> Self {
        table.iter().fold(Self::new(field), |chain, &(path, value)| {
            chain.when_exists(path, value.to_string())
        })
    }

    /// Chain over plain paths: the first existing path is itself the value.
    pub fn first_existing(field: &'static str, paths: &'a [&'a str]) -> Self {
        paths.iter().fold(Self::new(field), |chain, &path| {
            chain.when_exists(path, path.to_string())
        })
    }
}

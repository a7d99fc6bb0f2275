use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::css::rule::Rule;
use crate::error::RenderError;
use crate::render::{Layout, Render};
use crate::resolve::{Resolve, resolve_slice};
use crate::value::Values;

/// An ordered collection of rules.
///
/// Rule order is rendering order. Two sheets are equal when their rule
/// sequences are equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Css {
    rules: Vec<Rule>,
}

impl Css {
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Builder form of [`Css::push`].
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl FromIterator<Rule> for Css {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Render for Css {
    /// Rules are separated by a blank line, or by nothing when flat.
    fn render(&self, indent: i32) -> Result<String, RenderError> {
        let separator = if Layout::new(indent).is_flat() { "" } else { "\n\n" };
        let rendered = self
            .rules
            .iter()
            .map(|rule| rule.render(indent))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join(separator))
    }
}

impl Resolve for Css {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        match resolve_slice(&self.rules, values) {
            Some(rules) => Cow::Owned(Self { rules }),
            None => Cow::Borrowed(self),
        }
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        for rule in &self.rules {
            rule.collect_vars(out);
        }
    }
}

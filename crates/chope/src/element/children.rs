use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::css::Css;
use crate::element::Element;
use crate::resolve::{Resolve, changed, resolve_map};
use crate::value::{DeclarationMap, Value, Values};
use crate::variable::Var;

/// A child of an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(String),
    Element(Element),
    Css(Css),
    Var(Var),
    /// Declarations taken from a list-bound child variable, rendered as
    /// inline style text.
    Style(DeclarationMap),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Css> for Node {
    fn from(css: Css) -> Self {
        Node::Css(css)
    }
}

impl From<Var> for Node {
    fn from(var: Var) -> Self {
        Node::Var(var)
    }
}

impl Resolve for Node {
    fn resolve<'a>(&'a self, values: &Values) -> Cow<'a, Self> {
        let resolved = match self {
            Node::Text(_) => None,
            Node::Element(element) => changed(element.resolve(values)).map(Node::Element),
            Node::Css(css) => changed(css.resolve(values)).map(Node::Css),
            Node::Var(var) => changed(var.resolve(values)).map(Node::Var),
            Node::Style(map) => resolve_map(map, values).map(Node::Style),
        };

        match resolved {
            Some(node) => Cow::Owned(node),
            None => Cow::Borrowed(self),
        }
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Node::Text(_) => {}
            Node::Element(element) => element.collect_vars(out),
            Node::Css(css) => css.collect_vars(out),
            Node::Var(var) => var.collect_vars(out),
            Node::Style(map) => map.values().for_each(|value| value.collect_vars(out)),
        }
    }
}

/// A flattened run of children.
///
/// Anything convertible to a [`Node`] is a run of one; vectors, arrays and
/// iterators are expanded in place, so single children and nested lists can
/// be mixed freely. Empty collections contribute nothing.
///
/// ```rust
/// use chope::{children, Children, Element};
///
/// let items: Children = (1..=3).map(|n| Element::empty("li").children(n.to_string())).collect();
/// let list = Element::empty("ul").children(children!["first", items, Vec::<Element>::new()]);
/// assert_eq!(list.nodes().len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Children(Vec<Node>);

impl Children {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Self(vec![node])
    }
}

macro_rules! impl_single_child {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Children {
                fn from(child: $ty) -> Self {
                    Self(vec![Node::from(child)])
                }
            }
        )*
    };
}

impl_single_child!(&str, String, Element, Css, Var);

impl<T: Into<Children>> From<Vec<T>> for Children {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Children>, const N: usize> From<[T; N]> for Children {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<Children>> FromIterator<T> for Children {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().flat_map(|item| item.into().0).collect())
    }
}

impl IntoIterator for Children {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Resolves children, expanding child variables bound to lists.
///
/// A child variable whose own name is supplied with a list becomes one child
/// per list member, and those children are resolved against the same values.
/// Any other substitution keeps the variable in place.
pub(crate) fn resolve_children(nodes: &[Node], values: &Values) -> Option<Vec<Node>> {
    resolve_nodes(nodes, values, &mut Vec::new())
}

/// `expanding` holds the names being spliced, so a list that refers back to
/// its own variable is bound instead of expanded again.
fn resolve_nodes(
    nodes: &[Node],
    values: &Values,
    expanding: &mut Vec<String>,
) -> Option<Vec<Node>> {
    let mut out: Option<Vec<Node>> = None;
    for (index, node) in nodes.iter().enumerate() {
        if let Node::Var(var) = node {
            let name = var.name();
            if let Some(Value::List(items)) = values.get(name) {
                if !expanding.iter().any(|outer| outer == name) {
                    log::trace!("expanding {} children from variable '{name}'", items.len());
                    let mut spliced = Vec::with_capacity(items.len());
                    splice(items, &mut spliced);

                    expanding.push(name.to_string());
                    let resolved = resolve_nodes(&spliced, values, expanding);
                    expanding.pop();

                    out.get_or_insert_with(|| nodes[..index].to_vec())
                        .extend(resolved.unwrap_or(spliced));
                    continue;
                }
            }
        }

        match node.resolve(values) {
            Cow::Owned(new) => out
                .get_or_insert_with(|| nodes[..index].to_vec())
                .push(new),
            Cow::Borrowed(same) => {
                if let Some(out) = out.as_mut() {
                    out.push(same.clone());
                }
            }
        }
    }
    out
}

fn splice(items: &[Value], out: &mut Vec<Node>) {
    for item in items {
        match item {
            Value::Element(element) => out.push(Node::Element(element.as_ref().clone())),
            Value::Css(css) => out.push(Node::Css(css.clone())),
            Value::Var(var) => out.push(Node::Var(var.clone())),
            Value::List(nested) => splice(nested, out),
            Value::Map(map) => out.push(Node::Style(map.clone())),
            scalar => out.extend(scalar.scalar_text().map(Node::Text)),
        }
    }
}

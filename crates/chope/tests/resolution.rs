//! Tests for resolving whole trees.

use std::borrow::Cow;
use std::collections::BTreeSet;

use chope::{
    Attrs, Css, Element, Node, Render, Resolve, Rule, Value, Values, Var, children, css,
    declarations, values,
};

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A tree with variables in every position an element offers.
fn page() -> Element {
    Element::new(
        "main",
        Attrs::new()
            .id(Var::with_default("page-id", "home"))
            .class(Var::new("theme"))
            .attr("lang", Var::with_default("lang", Var::with_default("default-lang", "en"))),
    )
    .unwrap()
    .children(children![
        css![
            "h1" => { color: Var::with_default("accent", "red") },
        ],
        Css::new([Rule::new("p", Var::new("paragraph-style"))]),
        Element::empty("h1").children(Var::new("title")),
        Var::with_default("footer", Element::empty("footer").children(Var::new("year"))),
    ])
}

fn all_values() -> Values {
    values! {
        "theme" => "dark",
        "default-lang" => "fr",
        "paragraph-style" => declarations! { margin: 0 },
        "title" => "Welcome",
        "year" => 2024,
    }
}

#[test]
fn vars_discover_every_name() {
    assert_eq!(
        page().vars(),
        names(&[
            "page-id",
            "theme",
            "lang",
            "default-lang",
            "accent",
            "paragraph-style",
            "title",
            "footer",
            "year",
        ])
    );
}

#[test]
fn empty_mapping_returns_same_tree() {
    let tree = page();
    match tree.resolve(&Values::new()) {
        Cow::Borrowed(same) => assert!(std::ptr::eq(same, &tree)),
        Cow::Owned(_) => panic!("nothing should have changed"),
    }
    assert_eq!(tree.set_vars(&Values::new()), tree);
}

#[test]
fn resolve_is_idempotent() {
    let values = all_values();
    let once = page().set_vars(&values);
    let twice = once.set_vars(&values);

    assert_eq!(once, twice);
    assert!(matches!(once.resolve(&values), Cow::Borrowed(_)));
}

#[test]
fn resolve_is_idempotent_with_list_bound_child() {
    let p = Element::empty("p").children(Var::new("content"));
    let values = values! {
        "content" => vec![
            Value::from(Var::new("x")),
            Element::empty("b").children(Var::new("y")).into(),
        ],
        "x" => "hi",
        "y" => "there",
    };

    let once = p.set_vars(&values);
    let twice = once.set_vars(&values);

    assert_eq!(once, twice);
    assert!(matches!(once.resolve(&values), Cow::Borrowed(_)));
    assert_eq!(once.render(0).unwrap(), "<p>hi<b>there</b></p>");
}

#[test]
fn resolved_tree_renders() {
    let resolved = page().set_vars(&all_values());
    let expected = r#"<main id="home" class="dark" lang="fr">
  h1 {
    color: red;
  }
  p {
    margin: 0;
  }
  <h1>
    Welcome
  </h1>
  <footer>
    2024
  </footer>
</main>"#;

    assert_eq!(resolved.render(2).unwrap(), expected);
}

#[test]
fn partially_resolved_tree_fails_to_render() {
    let partial = page().set_vars(&values! { "theme" => "dark" });
    assert!(partial.render(2).is_err());
    assert!(page().render(2).is_err());
}

#[test]
fn tag_never_changes() {
    let resolved = page().set_vars(&all_values());
    assert_eq!(resolved.tag(), "main");
}

#[test]
fn untouched_children_are_kept() {
    let tree = page();
    let resolved = tree.set_vars(&values! { "title" => "Hi" });

    assert_eq!(resolved.nodes()[0], tree.nodes()[0]);
    assert_ne!(resolved.nodes()[2], tree.nodes()[2]);
    assert_eq!(resolved.id(), tree.id());
}

#[test]
fn list_bound_child_expands_in_place() {
    let b3 = Element::empty("b3");
    let b4 = Element::empty("b4");
    let parent = Element::empty("div").children(children![
        Var::new("content"),
        vec![b3.clone(), b4.clone()],
    ]);
    assert_eq!(parent.nodes().len(), 3);

    let generated: Vec<Value> = (0..3)
        .map(|n| Element::empty("li").children(n.to_string()).into())
        .collect();
    let resolved = parent.set_vars(&values! { "content" => generated });

    let tags: Vec<_> = resolved
        .nodes()
        .iter()
        .map(|node| match node {
            Node::Element(element) => element.tag().to_string(),
            other => panic!("unexpected child {other:?}"),
        })
        .collect();
    assert_eq!(tags, vec!["li", "li", "li", "b3", "b4"]);
}

#[test]
fn list_bound_child_with_scalars_becomes_text() {
    let p = Element::empty("p").children(Var::new("words"));
    let words = vec![Value::from("a"), Value::from(1), Value::from(vec!["b", "c"])];
    let resolved = p.set_vars(&values! { "words" => words });

    assert_eq!(
        resolved.nodes(),
        &[Node::from("a"), Node::from("1"), Node::from("b"), Node::from("c")]
    );
    assert_eq!(resolved.render(0).unwrap(), "<p>a1bc</p>");
}

#[test]
fn empty_list_removes_child() {
    let p = Element::empty("p").children(children!["keep", Var::new("extra")]);
    let resolved = p.set_vars(&values! { "extra" => Vec::<Value>::new() });
    assert_eq!(resolved.nodes(), &[Node::from("keep")]);
}

#[test]
fn scalar_bound_child_stays_a_variable() {
    let p = Element::empty("p").children(Var::new("text"));
    let resolved = p.set_vars(&values! { "text" => "hello" });

    assert_eq!(resolved.nodes(), &[Node::from(Var::with_default("text", "hello"))]);
    assert_eq!(resolved.render(0).unwrap(), "<p>hello</p>");
}

#[test]
fn element_bound_child_renders_nested() {
    let p = Element::empty("div").children(Var::new("slot"));
    let resolved = p.set_vars(&values! { "slot" => Element::empty("span").children("x") });
    assert_eq!(
        resolved.render(2).unwrap(),
        "<div>\n  <span>\n    x\n  </span>\n</div>"
    );
}

#[test]
fn variables_in_attribute_lists_resolve() {
    let div = Element::new("div", Attrs::new().selector(".base").class(Var::new("extra")))
        .unwrap();
    let resolved = div.set_vars(&values! { "extra" => "wide" });
    assert_eq!(resolved.render(0).unwrap(), "<div class=\"base wide\"></div>");
}

#[test]
fn supplied_values_are_inserted_verbatim() {
    let p = Element::empty("p").children(Var::new("slot"));
    let inner = Element::empty("b").children(Var::with_default("name", "x"));
    let resolved = p.set_vars(&values! { "slot" => inner.clone(), "name" => "y" });

    assert_eq!(resolved.nodes(), &[Node::from(Var::with_default("slot", inner))]);
}

#[test]
fn spliced_list_members_are_resolved() {
    let p = Element::empty("p").children(Var::new("content"));
    let resolved = p.set_vars(&values! {
        "content" => vec![Value::from(Var::new("inner")), Value::from("!")],
        "inner" => vec!["a", "b"],
    });

    assert_eq!(
        resolved.nodes(),
        &[Node::from("a"), Node::from("b"), Node::from("!")]
    );
}

#[test]
fn spliced_declarations_render_as_inline_style() {
    let p = Element::empty("p").children(Var::new("content"));
    let values = values! {
        "content" => vec![Value::from("a"), Value::from(declarations! { color: Var::new("color") })],
        "color" => "red",
    };

    let once = p.set_vars(&values);
    let twice = once.set_vars(&values);

    assert_eq!(once.nodes().len(), 2);
    assert_eq!(once, twice);
    assert_eq!(once.render(0).unwrap(), "<p>acolor: red;</p>");
}

#[test]
fn self_referencing_list_is_bound_once() {
    let p = Element::empty("p").children(Var::new("content"));
    let values = values! { "content" => vec![Value::from(Var::new("content"))] };

    let resolved = p.set_vars(&values);
    assert_eq!(resolved.nodes().len(), 1);
    assert!(matches!(&resolved.nodes()[0], Node::Var(var) if var.name() == "content"));
}

use crate::css::{Rule, Stylesheet};
use crate::dom::Node;

/// Tests a node against a bare tag-name selector.
///
/// Text nodes never match. An element matches when its own tag equals the
/// selector, or when any node in its subtree does (pre-order, left to right,
/// short-circuiting). The match test is subtree-wide on purpose: a `body`
/// that contains an `h1` anywhere satisfies the selector `h1`, and the
/// resolved style is still applied to the node that was tested, not to the
/// descendant that matched.
pub fn matches(node: &Node, selector: &str) -> bool {
    match node {
        Node::Text(_) => false,
        Node::Element(elem) => {
            elem.tag_name == selector || elem.children.iter().any(|child| matches(child, selector))
        }
    }
}

/// Returns the first rule in stylesheet order whose selector matches the
/// node. First match wins; there is no specificity.
pub fn resolve_rule<'a>(stylesheet: &'a Stylesheet, node: &Node) -> Option<&'a Rule> {
    stylesheet
        .rules
        .iter()
        .find(|rule| matches(node, &rule.selector))
}

#[cfg(test)]
mod tests {
    use super::{matches, resolve_rule};
    use crate::css;
    use crate::dom::{elem, text, AttrMap, Node};

    fn bare(name: &str, children: Vec<Node>) -> Node {
        elem(name.to_string(), AttrMap::new(), children)
    }

    #[test]
    fn element_matches_its_own_tag() {
        assert!(matches(&bare("div", vec![]), "div"));
    }

    #[test]
    fn element_matches_a_descendant_tag() {
        let body = bare("body", vec![bare("div", vec![bare("h1", vec![])])]);
        assert!(matches(&body, "h1"));
    }

    #[test]
    fn element_without_the_tag_does_not_match() {
        let body = bare("body", vec![bare("div", vec![])]);
        assert!(!matches(&body, "h1"));
    }

    #[test]
    fn text_node_never_matches() {
        assert!(!matches(&text("div".to_string()), "div"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!matches(&bare("DIV", vec![]), "div"));
    }

    #[test]
    fn first_matching_rule_wins() {
        // The div contains an h1, and the h1 rule comes first, so the
        // subtree match picks it over the div's own rule.
        let stylesheet = css::parse("h1 { color: red; } div { width: 100px; }");
        let node = bare("div", vec![bare("h1", vec![])]);
        let rule = resolve_rule(&stylesheet, &node).unwrap();
        assert_eq!(rule.selector, "h1");
    }

    #[test]
    fn no_matching_rule_resolves_to_none() {
        let stylesheet = css::parse("h1 { color: red; }");
        let node = bare("p", vec![]);
        assert!(resolve_rule(&stylesheet, &node).is_none());
    }

    #[test]
    fn class_selector_rule_never_resolves() {
        let stylesheet = css::parse(".oi { color: red; }");
        let mut attrs = AttrMap::new();
        attrs.insert("class".to_string(), vec!["oi".to_string()]);
        let node = elem("div".to_string(), attrs, vec![]);
        assert!(resolve_rule(&stylesheet, &node).is_none());
    }
}

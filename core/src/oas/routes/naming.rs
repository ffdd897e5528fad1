#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Path-template rewriting for the routing layer.

/// Rewrites a brace-style template into a colon-style one.
///
/// e.g. `/widgets/{id}/{childId}` -> `/widgets/:id/:childId`
///
/// Braces are not checked for balance: every `{` becomes `:` and every `}` is
/// dropped, whatever the input looks like.
pub fn to_routing_template(path: &str) -> String {
    path.replace('{', ":").replace('}', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_routing_template() {
        assert_eq!(to_routing_template("/widgets"), "/widgets");
        assert_eq!(
            to_routing_template("/widgets/{id}/{childId}"),
            "/widgets/:id/:childId"
        );
    }

    #[test]
    fn test_unbalanced_braces_pass_through() {
        assert_eq!(to_routing_template("/a/{id"), "/a/:id");
        assert_eq!(to_routing_template("/a/id}}"), "/a/id");
    }
}

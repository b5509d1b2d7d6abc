//! Box-drawing tree dumps.

use crate::types::Node;

/// Renders one child branch given the indentation of its own children.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders `children` as branches under the current line.
///
/// Trailing `None` children are dropped; a child that renders to an empty
/// string gets a bare `│` connector.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = child(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}

/// Renders the subtree at `node` as a single branch hanging off a title line.
///
/// A node with exactly one child prints `∅` for the missing side so left and
/// right stay distinguishable.
pub fn print_subtree<N: Node>(arena: &[N], node: u32, label: &dyn Fn(&N) -> String) -> String {
    let root = |tab: &str| print_node(arena, node, tab, label);
    print_tree("", &[Some(&root as &PrintChild)])
}

fn print_node<N: Node>(arena: &[N], node: u32, tab: &str, label: &dyn Fn(&N) -> String) -> String {
    let n = &arena[node as usize];
    let head = label(n);
    if n.l().is_none() && n.r().is_none() {
        return head;
    }

    let side = |child: Option<u32>| {
        move |tab: &str| match child {
            Some(c) => print_node(arena, c, tab, label),
            None => "∅".to_string(),
        }
    };
    let left = side(n.l());
    let right = side(n.r());
    let children = [Some(&left as &PrintChild), Some(&right as &PrintChild)];
    format!("{head}{}", print_tree(tab, &children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_tree_branches() {
        let a: &PrintChild = &|_: &str| "a".to_string();
        let b: &PrintChild = &|_: &str| "b".to_string();
        assert_eq!(print_tree("", &[Some(a), Some(b)]), "\n├─ a\n└─ b");
        assert_eq!(print_tree("  ", &[Some(a), None]), "\n  └─ a");
        assert_eq!(print_tree("", &[None, None]), "");
    }
}

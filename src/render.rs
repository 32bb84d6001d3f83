use crate::drains::stdout::{make_string, TimestampFormat};
use crate::tree::{Child, EventTree, TreeNode};

/*
 Vec of indentations. Bool represents whether a vertical line needs to be
 at every point of the indentation, e.g.

    INFO  checkout
    ├ DEBUG loading cart
    ├ INFO  payment
    │ ╰ WARN  retrying       <-- vec[true, false]
    ╰ INFO  checkout         <-- vec[false]
*/
type Depth = Vec<bool>;

/// Renders the whole tree, one row per scope or log line. Rows keep their
/// ANSI colors.
pub fn render_tree(tree: &EventTree, timestamp_format: TimestampFormat) -> String {
    let mut stack: Vec<(&Child, Depth)> = tree
        .root()
        .children()
        .iter()
        .rev()
        .map(|child| (child, vec![]))
        .collect();

    let mut rows = vec![];
    while let Some((child, depth)) = stack.pop() {
        let (event, children) = match child {
            Child::Event(event) => (Some(event), &[][..]),
            Child::Node(id) => (
                tree.node(*id).and_then(TreeNode::event),
                tree.children(*id),
            ),
        };

        if let Some(event) = event {
            rows.push(format!(
                "{}{}",
                indent(depth.clone()),
                make_string(event, timestamp_format)
            ));
        }

        let mut append_to_stack = children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let mut new_depth = depth.clone();
                new_depth.push(i + 1 < children.len());
                (child, new_depth)
            })
            .collect::<Vec<_>>();

        // Since we're popping, we'll be going through children in reverse order,
        // so we need to counter that.
        append_to_stack.reverse();
        stack.append(&mut append_to_stack);
    }

    rows.join("\n")
}

fn indent(mut depth: Depth) -> String {
    if let Some(has_sibling_below) = depth.pop() {
        // Worst case utf8 symbol per level is 4 bytes
        let mut indent = String::with_capacity(4 * (depth.len() + 1));
        for has_vertical_line in depth {
            if has_vertical_line {
                indent.push_str("│ ");
            } else {
                indent.push_str("  ");
            }
        }

        if has_sibling_below {
            indent.push_str("├ ");
        } else {
            indent.push_str("╰ ");
        }

        indent
    } else {
        String::new()
    }
}

use crate::libs::phylo::node::NodeId;
use crate::libs::phylo::tree::Tree;

/// Serialize the tree to a Newick string (compact format).
///
/// Round-trip companion to the parser: labels are quoted when they contain
/// reserved characters, lengths use Rust's shortest `f64` display, and
/// bracket annotations are re-emitted verbatim.
///
/// # Example
/// ```
/// use nwt::libs::phylo::Tree;
/// let tree = Tree::from_newick("(A:1,(B:2,C:3):4);").unwrap();
/// assert_eq!(tree.to_newick(), "(A:1,(B:2,C:3):4);");
/// ```
pub fn write_newick(tree: &Tree) -> String {
    write_newick_with_format(tree, "")
}

/// Serialize the tree to a Newick string with optional indentation.
///
/// # Arguments
/// * `indent` - The string to use for indentation (e.g., "  ", "\t").
///   If empty, output will be compact (no whitespace).
pub fn write_newick_with_format(tree: &Tree, indent: &str) -> String {
    if let Some(start) = tree.orientation_top() {
        let mut s = render(tree, start, indent);
        if let Some(length) = tree.root_length() {
            s.push_str(&format!(":{}", length));
        }
        if let Some(support) = tree.root_support() {
            s.push_str(&format!("[{}]", support));
        }
        s.push(';');
        s
    } else {
        ";".to_string()
    }
}

// Pending output, either a subtree to expand or literal text (separators,
// closing parens). The explicit stack keeps deep trees off the call stack.
enum Frame {
    Node(NodeId, usize),
    Text(String),
}

fn render(tree: &Tree, start: NodeId, indent: &str) -> String {
    let is_pretty = !indent.is_empty();
    let mut out = String::new();
    let mut stack = vec![Frame::Node(start, 0)];

    while let Some(frame) = stack.pop() {
        let (node_id, depth) = match frame {
            Frame::Text(text) => {
                out.push_str(&text);
                continue;
            }
            Frame::Node(node_id, depth) => (node_id, depth),
        };
        let node = match tree.get_node(node_id) {
            Some(n) => n,
            None => continue,
        };

        // Node info: label + branch length + annotation (both live on the parent edge)
        let mut node_info = String::new();
        if let Some(name) = &node.name {
            node_info.push_str(&quote_label(name));
        }
        if let Some(edge) = tree.parent_edge_of(node_id) {
            if let Some(length) = edge.length {
                node_info.push_str(&format!(":{}", length));
            }
            if let Some(support) = &edge.support {
                node_info.push_str(&format!("[{}]", support));
            }
        }

        let my_indent = if is_pretty {
            indent.repeat(depth)
        } else {
            String::new()
        };

        if node.is_tip() {
            out.push_str(&my_indent);
            out.push_str(&node_info);
            continue;
        }

        if is_pretty {
            out.push_str(&my_indent);
            out.push_str("(\n");
            stack.push(Frame::Text(format!("\n{}){}", my_indent, node_info)));
        } else {
            out.push('(');
            stack.push(Frame::Text(format!("){}", node_info)));
        }

        let sep = if is_pretty { ",\n" } else { "," };
        let children = tree.children_of(node_id);
        for (i, &child) in children.iter().enumerate().rev() {
            stack.push(Frame::Node(child, depth + 1));
            if i > 0 {
                stack.push(Frame::Text(sep.to_string()));
            }
        }
    }

    out
}

fn quote_label(label: &str) -> String {
    let needs_quote = label.chars().any(|c| "(),:;[] \t\n'".contains(c));
    if needs_quote {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_round_trip() {
        for input in [
            "(A:1,(B:2,C:3):4);",
            "(A,B,C);",
            "((A,B)X,(C,D)Y)R;",
            "A;",
            "(A:0.5,B:1.5)[&rate=0.1];",
        ] {
            let tree = Tree::from_newick(input).unwrap();
            assert_eq!(tree.to_newick(), input, "input: {}", input);
        }
    }

    #[test]
    fn writer_quotes_special_labels() {
        let mut tree = Tree::new();
        let root = tree.add_node();
        tree.set_root(root);
        tree.get_node_mut(root).unwrap().set_name("Homo sapiens");
        assert_eq!(tree.to_newick(), "'Homo sapiens';");

        tree.get_node_mut(root).unwrap().set_name("O'Brien");
        assert_eq!(tree.to_newick(), "'O''Brien';");

        // And the quoted form parses back to the same name
        let back = Tree::from_newick(&tree.to_newick()).unwrap();
        assert_eq!(back.tip_names(), vec!["O'Brien"]);
    }

    #[test]
    fn writer_pretty() {
        let tree = Tree::from_newick("(A:0.1,B:0.2)Root;").unwrap();
        let expected = "(\n  A:0.1,\n  B:0.2\n)Root;";
        assert_eq!(tree.to_newick_with_format("  "), expected);
    }

    #[test]
    fn writer_support_preserved() {
        let input = "(A:1,(B:2,C:3)[&support=95]:4);";
        let tree = Tree::from_newick(input).unwrap();
        let out = tree.to_newick();
        assert!(out.contains("[&support=95]"));

        // The annotation survives another parse unevaluated
        let again = Tree::from_newick(&out).unwrap();
        assert!(again.to_newick().contains("[&support=95]"));
    }
}

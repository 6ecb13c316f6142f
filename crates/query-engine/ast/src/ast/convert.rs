//! Render an AST node tree to an indented text form.

use super::node::Node;

impl Node {
    /// Render the tree, one node per line, children indented two spaces:
    /// `name [key=value, key=value]`. Deterministic, for logs and golden
    /// tests.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_indented(&mut out, 0);
        // drop the trailing newline so single-node renders are one line
        out.truncate(out.trim_end_matches('\n').len());
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&self.name);
        if !self.attributes.is_empty() {
            out.push_str(" [");
            for (index, (key, value)) in self.attributes.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push('=');
                out.push_str(value);
            }
            out.push(']');
        }
        out.push('\n');
        for child in &self.children {
            child.write_indented(out, depth + 1);
        }
    }
}

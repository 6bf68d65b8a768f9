use super::literal::py_str;
use super::tree_codegen::TreeCodeGenerator;
use crate::model::{Link, Node};

/// Links ordered so multi-input sockets receive them in their original order.
/// The sort is stable; links without a sort id count as 0.
pub fn ordered_links(links: &[Link]) -> Vec<&Link> {
    let mut ordered: Vec<&Link> = links.iter().collect();
    ordered.sort_by_key(|link| link.multi_input_sort_id.unwrap_or(0));
    ordered
}

impl<'s, 'a> TreeCodeGenerator<'s, 'a> {
    pub(super) fn init_links(&mut self) {
        let tree = self.tree;
        if tree.links.is_empty() {
            return;
        }
        let tree_var = self.tree_var.clone();
        self.w.line(format!("# Initialize {tree_var} links"));
        self.w.blank();

        for link in ordered_links(&tree.links) {
            let Some((from, from_index)) = self.resolve_end(link, true) else {
                continue;
            };
            let Some((to, to_index)) = self.resolve_end(link, false) else {
                continue;
            };
            let (Some(from_var), Some(to_var)) = (
                self.node_vars.get(from.name.as_str()),
                self.node_vars.get(to.name.as_str()),
            ) else {
                continue;
            };

            self.w.line(format!(
                "# {from_var}.{} -> {to_var}.{}",
                from.outputs[from_index].name, to.inputs[to_index].name
            ));
            self.w.line(format!("{tree_var}.links.new("));
            self.w.nested(format!(
                "{tree_var}.nodes[{}].outputs[{from_index}],",
                py_str(&from.name)
            ));
            self.w.nested(format!(
                "{tree_var}.nodes[{}].inputs[{to_index}]",
                py_str(&to.name)
            ));
            self.w.line(")");
        }
        self.w.blank();
    }

    /// The node and socket index at one end of `link`. Indices are looked up
    /// by identifier each time since identifiers need not be unique by name.
    fn resolve_end(&mut self, link: &Link, from: bool) -> Option<(&'a Node, usize)> {
        let tree = self.tree;
        let (node_name, socket) = if from {
            (link.from_node.as_deref(), link.from_socket.as_str())
        } else {
            (link.to_node.as_deref(), link.to_socket.as_str())
        };
        let end = if from { "from_node" } else { "to_node" };

        let Some(node_name) = node_name else {
            self.session.diagnostics.warning(format!(
                "Link's {end} was None in {}. This shouldn't happen",
                tree.name
            ));
            return None;
        };
        let Some(node) = tree.node(node_name) else {
            self.session.diagnostics.warning(format!(
                "Link in {} references missing node {node_name}",
                tree.name
            ));
            return None;
        };
        let index = if from {
            node.output_index(socket)
        } else {
            node.input_index(socket)
        };
        match index {
            Some(index) => Some((node, index)),
            None => {
                self.session.diagnostics.warning(format!(
                    "Link in {} references missing socket {socket} on node {node_name}",
                    tree.name
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_multi_input_id_keeping_ties_stable() {
        let links = vec![
            Link::new("A", "Geometry", "Join", "Geometry").with_sort_id(2),
            Link::new("B", "Geometry", "Join", "Geometry").with_sort_id(0),
            Link::new("C", "Geometry", "Join", "Geometry").with_sort_id(1),
            Link::new("D", "Value", "Math", "Value"),
        ];
        let order: Vec<_> = ordered_links(&links)
            .into_iter()
            .map(|l| l.from_node.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(order, ["B", "D", "C", "A"]);
    }
}

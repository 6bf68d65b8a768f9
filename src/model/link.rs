use serde::{Deserialize, Serialize};

/// A directed edge from an output socket to an input socket.
///
/// Endpoints are referenced by node name and socket identifier. Either node may
/// be missing when the host reports a dangling link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub from_node: Option<String>,
    pub from_socket: String,
    pub to_node: Option<String>,
    pub to_socket: String,
    /// Ordering key among links into the same multi-input socket.
    #[serde(default)]
    pub multi_input_sort_id: Option<u32>,
}

impl Link {
    pub fn new(
        from_node: impl Into<String>,
        from_socket: impl Into<String>,
        to_node: impl Into<String>,
        to_socket: impl Into<String>,
    ) -> Self {
        Self {
            from_node: Some(from_node.into()),
            from_socket: from_socket.into(),
            to_node: Some(to_node.into()),
            to_socket: to_socket.into(),
            multi_input_sort_id: None,
        }
    }

    pub fn with_sort_id(mut self, id: u32) -> Self {
        self.multi_input_sort_id = Some(id);
        self
    }
}

use crate::event::Event;

/// Index of a node inside the `EventTree` that created it.
#[derive(Clone, Copy, Hash, PartialOrd, PartialEq, Ord, Eq, Debug)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub enum Child {
    /// A nested scope
    Node(NodeId),
    /// A plain log line
    Event(Event),
}

impl Child {
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Child::Node(id) => Some(*id),
            Child::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Child::Event(event) => Some(event),
            Child::Node(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeNode {
    event: Option<Event>,
    children: Vec<Child>,
}

impl TreeNode {
    fn new(event: Option<Event>) -> Self {
        Self {
            event,
            children: vec![],
        }
    }

    pub(crate) fn append(&mut self, child: Child) {
        self.children.push(child);
    }

    /// The BEGIN event that opened this scope. `None` only for the root.
    pub fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.event.is_none()
    }
}

/// Arena holding every node of the tree. The root lives at index 0 and nodes
/// are never removed, so a `NodeId` stays valid for the lifetime of the tree.
#[derive(Debug, Clone)]
pub struct EventTree {
    nodes: Vec<TreeNode>,
}

impl EventTree {
    const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![TreeNode::new(None)],
        }
    }

    pub fn root_id(&self) -> NodeId {
        Self::ROOT
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[Child] {
        self.node(id).map(|node| node.children()).unwrap_or(&[])
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // `parent` always comes from this tree (ids are only handed out by `add_node`),
    // so indexing can't go out of bounds.
    pub(crate) fn add_node(&mut self, parent: NodeId, event: Event) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode::new(Some(event)));
        self.nodes[parent.0].append(Child::Node(id));
        id
    }

    pub(crate) fn add_event(&mut self, parent: NodeId, event: Event) {
        self.nodes[parent.0].append(Child::Event(event));
    }

    /// Pre-order walk over everything below the root.
    pub fn walk(&self) -> Walk<'_> {
        let mut walk = Walk {
            tree: self,
            stack: vec![],
        };
        walk.push_children(Self::ROOT, 0);
        walk
    }
}

impl Default for EventTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Entry<'a> {
    Node(NodeId, &'a TreeNode),
    Event(&'a Event),
}

impl<'a> Entry<'a> {
    /// The event for a leaf, or the opening event for a node.
    pub fn event(&self) -> Option<&'a Event> {
        match *self {
            Entry::Node(_, node) => node.event(),
            Entry::Event(event) => Some(event),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    /// 0 for direct children of the root
    pub depth: usize,
    pub item: Entry<'a>,
}

pub struct Walk<'a> {
    tree: &'a EventTree,
    stack: Vec<(usize, &'a Child)>,
}

impl<'a> Walk<'a> {
    fn push_children(&mut self, id: NodeId, depth: usize) {
        // reversed, since we're popping from the end
        let tree = self.tree;
        for child in tree.children(id).iter().rev() {
            self.stack.push((depth, child));
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, child) = self.stack.pop()?;
        let item = match child {
            Child::Event(event) => Entry::Event(event),
            Child::Node(id) => {
                let tree = self.tree;
                self.push_children(*id, depth + 1);
                Entry::Node(*id, &tree.nodes[id.0])
            }
        };
        Some(WalkEntry { depth, item })
    }
}

//! The mutable dependency exploration tree and its unicode renderer.
//!
//! A [`DepGraph`] owns its nodes in an arena addressed by [`NodeId`]
//! indices. The head node carries the root project's identity; its children
//! are the declared direct dependencies. The resolver binds versions to
//! nodes and grafts provider sub-graphs under them as exploration proceeds.

use std::fmt;

use pakt_core::dependency::Dependency;
use pakt_core::version::Version;
use pakt_util::errors::PaktError;

/// Index of a node within its owning [`DepGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node in the exploration tree.
#[derive(Debug, Clone)]
pub struct DepNode {
    pub dependency: Dependency,
    /// Bound when the package is activated; cleared when a backtrack
    /// crosses the activation.
    pub version: Option<Version>,
    kids: Vec<NodeId>,
}

impl DepNode {
    pub fn kids(&self) -> &[NodeId] {
        &self.kids
    }
}

/// A rooted dependency graph.
pub struct DepGraph {
    nodes: Vec<DepNode>,
    head: NodeId,
}

impl DepGraph {
    /// A graph containing only a head node for `root`.
    pub fn new(root: Dependency) -> Self {
        Self {
            nodes: vec![DepNode {
                dependency: root,
                version: None,
                kids: Vec::new(),
            }],
            head: NodeId(0),
        }
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn node(&self, id: NodeId) -> &DepNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut DepNode {
        &mut self.nodes[id.0]
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].kids.len()
    }

    pub fn child(&self, id: NodeId, index: usize) -> NodeId {
        self.nodes[id.0].kids[index]
    }

    /// Append a new child node under `parent`.
    pub fn add_child(&mut self, parent: NodeId, dependency: Dependency) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DepNode {
            dependency,
            version: None,
            kids: Vec::new(),
        });
        self.nodes[parent.0].kids.push(id);
        id
    }

    /// Replace the children of `at` with copies of the head-children of
    /// `sub`, grafting their whole subtrees into this graph.
    pub fn graft_children(&mut self, at: NodeId, sub: &DepGraph) {
        self.nodes[at.0].kids.clear();
        let head_kids: Vec<NodeId> = sub.node(sub.head()).kids().to_vec();
        for kid in head_kids {
            let copied = self.copy_subtree(sub, kid);
            self.nodes[at.0].kids.push(copied);
        }
    }

    fn copy_subtree(&mut self, sub: &DepGraph, id: NodeId) -> NodeId {
        let source = sub.node(id);
        let new_id = NodeId(self.nodes.len());
        self.nodes.push(DepNode {
            dependency: source.dependency.clone(),
            version: source.version.clone(),
            kids: Vec::new(),
        });
        for &kid in sub.node(id).kids() {
            let copied = self.copy_subtree(sub, kid);
            self.nodes[new_id.0].kids.push(copied);
        }
        new_id
    }

    /// Build a graph from the indented outline form used by fixtures and the
    /// package index:
    ///
    /// ```text
    /// root 1.0.0
    /// -apple >=1.0.0
    /// --durian
    /// -banana
    /// ```
    ///
    /// The first line is the head; each following line is prefixed with one
    /// `-` per depth level and must be a direct child of the line above it
    /// or of some shallower line. When the head line carries constraints,
    /// the first constraint's version is bound as the head version.
    pub fn parse_outline(text: &str) -> Result<Self, PaktError> {
        let mut graph: Option<DepGraph> = None;
        // last_at_depth[d] is the most recent node at depth d (head is 0).
        let mut last_at_depth: Vec<NodeId> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut depth = 0usize;
            let mut rest = line;
            while let Some(stripped) = rest.strip_prefix('-') {
                depth += 1;
                rest = stripped;
            }
            let dependency = Dependency::parse(rest.trim())?;

            if depth == 0 {
                if graph.is_some() {
                    return Err(PaktError::Parse {
                        message: "outline has more than one head line".to_string(),
                    });
                }
                let mut g = DepGraph::new(dependency);
                let head = g.head();
                if let Some(first) = g.node(head).dependency.constraints.first() {
                    let version = first.version.clone();
                    g.node_mut(head).version = Some(version);
                }
                last_at_depth.push(head);
                graph = Some(g);
            } else {
                let g = graph.as_mut().ok_or_else(|| PaktError::Parse {
                    message: "outline must start with a head line".to_string(),
                })?;
                if depth > last_at_depth.len() {
                    return Err(PaktError::Parse {
                        message: format!("outline skips a depth level at: {line:?}"),
                    });
                }
                let parent = last_at_depth[depth - 1];
                let id = g.add_child(parent, dependency);
                last_at_depth.truncate(depth);
                last_at_depth.push(id);
            }
        }

        graph.ok_or_else(|| PaktError::Parse {
            message: "empty outline".to_string(),
        })
    }

    /// Render the unicode tree. One node per line, no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let head_is_leaf = self.child_count(self.head) == 0;
        self.render_node(self.head, 0, 0, head_is_leaf, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: u32, active: u64, last: bool, out: &mut String) {
        let node = self.node(id);
        let kid_count = node.kids.len();

        if depth > 0 {
            for i in 1..depth {
                if i <= 64 && active & (1u64 << (i - 1)) != 0 {
                    out.push('│');
                } else {
                    out.push(' ');
                }
                out.push(' ');
            }
            out.push(if last { '└' } else { '├' });
            out.push('─');
            if kid_count > 0 {
                out.push('┬');
            }
            out.push(' ');
        }

        out.push_str(&node.dependency.name);
        if let Some(version) = &node.version {
            out.push(' ');
            out.push_str(&version.to_string());
        }
        if !node.dependency.constraints.is_empty() {
            out.push_str(" (");
            for (i, constraint) in node.dependency.constraints.iter().enumerate() {
                if i != 0 {
                    out.push(' ');
                }
                out.push_str(&constraint.to_string());
            }
            out.push(')');
        }
        if !last || kid_count > 0 || active != 0 {
            out.push('\n');
        }

        for (i, &kid) in node.kids.iter().enumerate() {
            let kid_last = i + 1 == kid_count;
            let mut kid_active = active;
            if !kid_last && depth < 64 {
                kid_active |= 1u64 << depth;
            }
            self.render_node(kid, depth + 1, kid_active, kid_last, out);
        }
    }
}

impl fmt::Display for DepGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

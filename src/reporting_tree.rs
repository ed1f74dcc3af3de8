use crate::errors::TreeError;
use crate::traversal;
use log::{debug, trace};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Which child slot of a parent a new report is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl FromStr for Side {
    type Err = TreeError;

    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(TreeError::InvalidSide {
                side: side.to_owned(),
            }),
        }
    }
}

impl Side {
    /// Capitalized form, for messages.
    pub fn title(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

type Link = Option<Box<DoctorNode>>;

/// A doctor and their (at most two) direct reports.
pub struct DoctorNode {
    name: String,
    left: Link,
    right: Link,
}

impl DoctorNode {
    pub fn new(name: impl Into<String>) -> Self {
        DoctorNode {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&DoctorNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&DoctorNode> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Attach a new leaf on `side`, never replacing an existing report.
    fn attach(&mut self, child: &str, side: Side) -> Result<(), TreeError> {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        if slot.is_some() {
            return Err(TreeError::SideOccupied {
                parent: self.name.clone(),
                side,
            });
        }
        *slot = Some(Box::new(DoctorNode::new(child)));
        debug!("Attached {:?} as {} report of {:?}", child, side, self.name);
        Ok(())
    }
}

impl fmt::Debug for DoctorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoctorNode({})", self.name)
    }
}

/// The hospital reporting hierarchy.
///
/// Children are attached explicitly on a side; nothing is ever overwritten,
/// rebalanced, or removed.
#[derive(Debug, Default)]
pub struct ReportingTree {
    root: Link,
    num_nodes: usize,
}

impl ReportingTree {
    pub fn new() -> Self {
        ReportingTree {
            root: None,
            num_nodes: 0,
        }
    }

    pub fn with_root(name: impl Into<String>) -> Self {
        ReportingTree {
            root: Some(Box::new(DoctorNode::new(name))),
            num_nodes: 1,
        }
    }

    pub fn root(&self) -> Option<&DoctorNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Breadth-first search for the first doctor called `name`.
    pub fn find(&self, name: &str) -> Option<&DoctorNode> {
        let mut frontier: VecDeque<&DoctorNode> = self.root.as_deref().into_iter().collect();
        while let Some(node) = frontier.pop_front() {
            trace!("find {:?}: visiting {:?}", name, node);
            if node.name == name {
                return Some(node);
            }
            frontier.extend(node.left.as_deref());
            frontier.extend(node.right.as_deref());
        }
        None
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut DoctorNode> {
        let mut frontier: VecDeque<&mut DoctorNode> =
            self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = frontier.pop_front() {
            if node.name == name {
                return Some(node);
            }
            let DoctorNode { left, right, .. } = node;
            frontier.extend(left.as_deref_mut());
            frontier.extend(right.as_deref_mut());
        }
        None
    }

    /// Attach a new doctor under `parent`, on the side named by `side`
    /// (`"left"` or `"right"`).
    pub fn insert(&mut self, parent: &str, child: &str, side: &str) -> Result<(), TreeError> {
        let parent_node = self
            .find_mut(parent)
            .ok_or_else(|| TreeError::ParentNotFound {
                parent: parent.to_owned(),
            })?;
        parent_node.attach(child, side.parse()?)?;
        self.num_nodes += 1;
        Ok(())
    }

    pub fn insert_at(&mut self, parent: &str, child: &str, side: Side) -> Result<(), TreeError> {
        let parent_node = self
            .find_mut(parent)
            .ok_or_else(|| TreeError::ParentNotFound {
                parent: parent.to_owned(),
            })?;
        parent_node.attach(child, side)?;
        self.num_nodes += 1;
        Ok(())
    }

    #[cfg(test)]
    fn from_root(root: DoctorNode, num_nodes: usize) -> Self {
        ReportingTree {
            root: Some(Box::new(root)),
            num_nodes,
        }
    }

    pub fn preorder(&self) -> Vec<&str> {
        traversal::preorder(self.root())
    }

    pub fn inorder(&self) -> Vec<&str> {
        traversal::inorder(self.root())
    }

    pub fn postorder(&self) -> Vec<&str> {
        traversal::postorder(self.root())
    }

    pub fn level_order(&self) -> Vec<&str> {
        traversal::level_order(self.root())
    }
}

impl Drop for ReportingTree {
    fn drop(&mut self) {
        // Unlink iteratively so a long chain of reports cannot exhaust the stack.
        let mut stack: Vec<Box<DoctorNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

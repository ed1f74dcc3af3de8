use crate::DoctorNode;
use std::collections::VecDeque;

/// Node, then left subtree, then right subtree.
pub fn preorder(node: Option<&DoctorNode>) -> Vec<&str> {
    let mut names = Vec::new();
    visit_preorder(node, &mut names);
    names
}

/// Left subtree, then node, then right subtree.
pub fn inorder(node: Option<&DoctorNode>) -> Vec<&str> {
    let mut names = Vec::new();
    visit_inorder(node, &mut names);
    names
}

/// Left subtree, then right subtree, then node.
pub fn postorder(node: Option<&DoctorNode>) -> Vec<&str> {
    let mut names = Vec::new();
    visit_postorder(node, &mut names);
    names
}

/// Level by level, left to right: the order `ReportingTree::find` searches.
pub fn level_order(node: Option<&DoctorNode>) -> Vec<&str> {
    let mut names = Vec::new();
    let mut frontier: VecDeque<&DoctorNode> = node.into_iter().collect();
    while let Some(node) = frontier.pop_front() {
        names.push(node.name());
        frontier.extend(node.left());
        frontier.extend(node.right());
    }
    names
}

fn visit_preorder<'a>(node: Option<&'a DoctorNode>, names: &mut Vec<&'a str>) {
    let mut stack: Vec<&DoctorNode> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        names.push(node.name());
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn visit_inorder<'a>(node: Option<&'a DoctorNode>, names: &mut Vec<&'a str>) {
    let mut stack: Vec<&DoctorNode> = Vec::new();
    let mut current = node;
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        match stack.pop() {
            Some(node) => {
                names.push(node.name());
                current = node.right();
            }
            None => break,
        }
    }
}

fn visit_postorder<'a>(node: Option<&'a DoctorNode>, names: &mut Vec<&'a str>) {
    // Node, right, left; reversed that is left, right, node.
    let start = names.len();
    let mut stack: Vec<&DoctorNode> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        names.push(node.name());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    names[start..].reverse();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReportingTree;

    #[test]
    fn test_absent_node() {
        assert!(preorder(None).is_empty());
        assert!(inorder(None).is_empty());
        assert!(postorder(None).is_empty());
        assert!(level_order(None).is_empty());
    }

    #[test]
    fn test_subtree() {
        let mut tree = ReportingTree::with_root("Dr. Croft");
        tree.insert("Dr. Croft", "Dr. Phan", "left").unwrap();
        tree.insert("Dr. Phan", "Dr. Morgan", "left").unwrap();
        tree.insert("Dr. Phan", "Dr. Carson", "right").unwrap();
        let phan = tree.find("Dr. Phan");
        assert_eq!(preorder(phan), vec!["Dr. Phan", "Dr. Morgan", "Dr. Carson"]);
        assert_eq!(inorder(phan), vec!["Dr. Morgan", "Dr. Phan", "Dr. Carson"]);
        assert_eq!(postorder(phan), vec!["Dr. Morgan", "Dr. Carson", "Dr. Phan"]);
        let morgan = tree.find("Dr. Morgan");
        assert_eq!(preorder(morgan), vec!["Dr. Morgan"]);
    }

    #[test]
    fn test_right_spine() {
        let mut tree = ReportingTree::with_root("1");
        tree.insert("1", "2", "right").unwrap();
        tree.insert("2", "3", "right").unwrap();
        assert_eq!(preorder(tree.root()), vec!["1", "2", "3"]);
        assert_eq!(inorder(tree.root()), vec!["1", "2", "3"]);
        assert_eq!(postorder(tree.root()), vec!["3", "2", "1"]);
    }
}

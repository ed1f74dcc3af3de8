use triage::errors::TreeError;
use triage::traversal::{inorder, postorder, preorder};
use triage::{Patient, ReportingTree, Side, TriageQueue};

#[test]
fn test_triage_serves_most_urgent_first() {
    let mut queue = TriageQueue::new();
    queue.insert("Jordan", 3);
    queue.insert("Taylor", 1);
    queue.insert("Avery", 5);

    assert_eq!(queue.peek(), Some(&Patient::new("Taylor", 1)));
    let served: Vec<String> = std::iter::from_fn(|| queue.extract_min())
        .map(|p| p.name)
        .collect();
    assert_eq!(served, vec!["Taylor", "Jordan", "Avery"]);
    assert!(queue.is_empty());
    assert_eq!(queue.extract_min(), None);
}

#[test]
fn test_reporting_tree_public_api() {
    let mut tree = ReportingTree::with_root("Dr. Croft");
    tree.insert_at("Dr. Croft", "Dr. Goldsmith", Side::Right).unwrap();
    tree.insert_at("Dr. Croft", "Dr. Phan", Side::Left).unwrap();
    tree.insert("Dr. Phan", "Dr. Carson", "right").unwrap();
    tree.insert("Dr. Phan", "Dr. Morgan", "left").unwrap();

    let root = tree.root();
    assert_eq!(
        preorder(root),
        vec!["Dr. Croft", "Dr. Phan", "Dr. Morgan", "Dr. Carson", "Dr. Goldsmith"]
    );
    assert_eq!(
        inorder(root),
        vec!["Dr. Morgan", "Dr. Phan", "Dr. Carson", "Dr. Croft", "Dr. Goldsmith"]
    );
    assert_eq!(
        postorder(root),
        vec!["Dr. Morgan", "Dr. Carson", "Dr. Phan", "Dr. Goldsmith", "Dr. Croft"]
    );

    match tree.insert_at("Dr. Phan", "Dr. Grey", Side::Right) {
        Err(TreeError::SideOccupied { parent, side }) => {
            assert_eq!(parent, "Dr. Phan");
            assert_eq!(side, Side::Right);
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(
        tree.find("Dr. Phan").and_then(|n| n.right()).map(|n| n.name()),
        Some("Dr. Carson")
    );
}

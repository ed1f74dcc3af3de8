use log::info;
use triage::errors::TreeError;
use triage::{ReportingTree, TriageQueue};

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let mut queue = TriageQueue::new();
    queue.insert("Jordan", 3);
    queue.insert("Taylor", 1);
    queue.insert("Avery", 5);
    print!("{}", queue);

    if let Some(next_up) = queue.peek() {
        println!("Next up: {}", next_up);
    }
    if let Some(served) = queue.extract_min() {
        println!("Served: {}", served.name);
    }
    print!("{}", queue);

    let mut tree = ReportingTree::with_root("Dr. Croft");
    tree.insert("Dr. Croft", "Dr. Goldsmith", "right")?;
    tree.insert("Dr. Croft", "Dr. Phan", "left")?;
    tree.insert("Dr. Phan", "Dr. Carson", "right")?;
    tree.insert("Dr. Phan", "Dr. Morgan", "left")?;
    info!("Built reporting tree with {} doctors", tree.len());

    println!("Preorder: {:?}", tree.preorder());
    println!("Inorder: {:?}", tree.inorder());
    println!("Postorder: {:?}", tree.postorder());

    for (parent, child, side) in &[
        ("Dr. Who", "Dr. Strange", "left"),
        ("Dr. Croft", "Dr. House", "middle"),
        ("Dr. Croft", "Dr. SomeoneElse", "left"),
    ] {
        if let Err(e) = tree.insert(parent, child, side) {
            println!("Rejected {}: {}", child, e);
        }
    }
    Ok(())
}

use super::*;

fn leaf(key: u32, color: Color) -> Box<Node<u32, u32>> {
    let mut node = Box::new(Node::new(key, key * 10));
    node.color = color;
    node
}

fn join(
    mut node: Box<Node<u32, u32>>,
    left: Option<Box<Node<u32, u32>>>,
    right: Option<Box<Node<u32, u32>>>,
) -> Box<Node<u32, u32>> {
    node.left = left;
    node.right = right;
    node.resize();
    node
}

fn keys(node: Option<&Node<u32, u32>>, acc: &mut Vec<u32>) {
    if let Some(node) = node {
        keys(node.as_left_ref(), acc);
        acc.push(node.key);
        keys(node.as_right_ref(), acc);
    }
}

fn check_sizes(node: Option<&Node<u32, u32>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            let n = 1 + check_sizes(node.as_left_ref()) + check_sizes(node.as_right_ref());
            assert_eq!(node.size, n, "size of {}", node.key);
            n
        }
    }
}

#[test]
fn test_new_node() {
    let node = Node::new(10_u32, 100_u32);
    assert!(!node.is_black());
    assert_eq!(node.size, 1);
    assert!(node.as_left_ref().is_none());
    assert!(node.as_right_ref().is_none());
    assert!(is_red(Some(&node)));
    assert!(!is_red::<u32, u32>(None));
    assert_eq!(size::<u32, u32>(None), 0);
}

#[test]
fn test_set_value() {
    let mut node = Node::new(1_u32, 10_u32);
    assert_eq!(node.set_value(20), 10);
    assert_eq!(node.value, 20);
}

#[test]
fn test_rotate_left() {
    // 2(black) -> right 4(red) with children 3, 5
    let x = join(leaf(4, Color::Red), Some(leaf(3, Color::Black)), Some(leaf(5, Color::Black)));
    let node = join(leaf(2, Color::Black), Some(leaf(1, Color::Black)), Some(x));

    let node = rotate_left(node);
    assert_eq!(node.key, 4);
    assert_eq!(node.color, Color::Black);
    assert_eq!(node.size, 5);

    let left = node.as_left_ref().unwrap();
    assert_eq!(left.key, 2);
    assert_eq!(left.color, Color::Red);
    assert_eq!(left.size, 3);
    assert_eq!(left.as_right_ref().unwrap().key, 3);

    let mut acc = vec![];
    keys(Some(&node), &mut acc);
    assert_eq!(acc, vec![1, 2, 3, 4, 5]);
    check_sizes(Some(&node));
}

#[test]
fn test_rotate_right() {
    let x = join(leaf(2, Color::Red), Some(leaf(1, Color::Black)), Some(leaf(3, Color::Black)));
    let node = join(leaf(4, Color::Black), Some(x), Some(leaf(5, Color::Black)));

    let node = rotate_right(node);
    assert_eq!(node.key, 2);
    assert_eq!(node.color, Color::Black);
    assert_eq!(node.size, 5);

    let right = node.as_right_ref().unwrap();
    assert_eq!(right.key, 4);
    assert_eq!(right.color, Color::Red);
    assert_eq!(right.size, 3);
    assert_eq!(right.as_left_ref().unwrap().key, 3);

    let mut acc = vec![];
    keys(Some(&node), &mut acc);
    assert_eq!(acc, vec![1, 2, 3, 4, 5]);
    check_sizes(Some(&node));
}

#[test]
#[should_panic]
fn test_rotate_black_link() {
    let node = join(leaf(2, Color::Black), None, Some(leaf(3, Color::Black)));
    rotate_left(node);
}

#[test]
fn test_flip() {
    let mut node = join(leaf(2, Color::Black), Some(leaf(1, Color::Red)), Some(leaf(3, Color::Red)));
    flip(&mut node);
    assert_eq!(node.color, Color::Red);
    assert_eq!(node.as_left_ref().unwrap().color, Color::Black);
    assert_eq!(node.as_right_ref().unwrap().color, Color::Black);

    flip(&mut node);
    assert_eq!(node.color, Color::Black);
    assert_eq!(node.as_left_ref().unwrap().color, Color::Red);
    assert_eq!(node.as_right_ref().unwrap().color, Color::Red);
}

#[test]
fn test_walkuprot_23_right_leaning() {
    // a red right link with a black left link is straightened.
    let node = join(leaf(1, Color::Black), None, Some(leaf(2, Color::Red)));
    let node = walkuprot_23(node);
    assert_eq!(node.key, 2);
    assert_eq!(node.color, Color::Black);
    assert_eq!(node.as_left_ref().unwrap().color, Color::Red);
    assert!(node.as_right_ref().is_none());
    check_sizes(Some(&node));
}

#[test]
fn test_walkuprot_23_left_left() {
    // 3 -> red 2 -> red 1, a 4-node that must split into 2 with black children.
    let x = join(leaf(2, Color::Red), Some(leaf(1, Color::Red)), None);
    let node = join(leaf(3, Color::Black), Some(x), None);
    let node = walkuprot_23(node);

    assert_eq!(node.key, 2);
    assert_eq!(node.color, Color::Red);
    assert_eq!(node.as_left_ref().unwrap().key, 1);
    assert_eq!(node.as_left_ref().unwrap().color, Color::Black);
    assert_eq!(node.as_right_ref().unwrap().key, 3);
    assert_eq!(node.as_right_ref().unwrap().color, Color::Black);
    check_sizes(Some(&node));
}

#[test]
fn test_balance_red_right() {
    // balance() straightens a red right link even when left is red too.
    let node = join(leaf(2, Color::Black), Some(leaf(1, Color::Red)), Some(leaf(3, Color::Red)));
    let node = balance(node);
    assert_eq!(node.key, 2);
    assert_eq!(node.color, Color::Red);
    assert_eq!(node.as_left_ref().unwrap().color, Color::Black);
    assert_eq!(node.as_right_ref().unwrap().color, Color::Black);
    check_sizes(Some(&node));
}

#[test]
fn test_move_red_left() {
    // red 2 with black 1 and black 4, where 4 has a red left child 3.
    let right = join(leaf(4, Color::Black), Some(leaf(3, Color::Red)), None);
    let node = join(leaf(2, Color::Red), Some(leaf(1, Color::Black)), Some(right));

    let node = move_red_left(node);
    assert_eq!(node.key, 3);
    assert_eq!(node.color, Color::Red);
    let left = node.as_left_ref().unwrap();
    assert_eq!(left.key, 2);
    assert_eq!(left.color, Color::Black);
    assert!(is_red(left.as_left_ref()));

    let mut acc = vec![];
    keys(Some(&node), &mut acc);
    assert_eq!(acc, vec![1, 2, 3, 4]);
    check_sizes(Some(&node));
}

#[test]
fn test_move_red_right() {
    // red 3 with black 2 (red left child 1) and black 4.
    let left = join(leaf(2, Color::Black), Some(leaf(1, Color::Red)), None);
    let node = join(leaf(3, Color::Red), Some(left), Some(leaf(4, Color::Black)));

    let node = move_red_right(node);
    assert_eq!(node.key, 2);
    assert_eq!(node.color, Color::Red);
    let right = node.as_right_ref().unwrap();
    assert_eq!(right.key, 3);
    assert_eq!(right.color, Color::Black);
    assert!(is_red(right.as_right_ref()));

    let mut acc = vec![];
    keys(Some(&node), &mut acc);
    assert_eq!(acc, vec![1, 2, 3, 4]);
    check_sizes(Some(&node));
}

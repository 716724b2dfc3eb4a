use super::*;

#[test]
fn test_queue_fifo() {
    let mut queue: Queue<u32> = Queue::new();
    assert!(queue.is_empty());

    for item in 0..10 {
        queue.enqueue(item);
    }
    assert_eq!(queue.len(), 10);
    assert_eq!(*queue.peek().unwrap(), 0);

    assert_eq!(queue.dequeue().unwrap(), 0);
    assert_eq!(queue.dequeue().unwrap(), 1);
    assert_eq!(queue.len(), 8);

    let rest: Vec<u32> = queue.collect();
    assert_eq!(rest, (2..10).collect::<Vec<u32>>());
}

#[test]
fn test_queue_empty() {
    let mut queue: Queue<u32> = Queue::default();
    match queue.dequeue() {
        Err(Error::EmptyCollection(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
    match queue.peek() {
        Err(Error::EmptyCollection(_, _)) => (),
        res => panic!("unexpected {:?}", res),
    }
    assert_eq!(queue.next(), None);
}

#[test]
fn test_queue_drains_once() {
    let mut queue: Queue<&str> = Queue::new();
    queue.enqueue("a");
    queue.enqueue("b");
    assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
    assert_eq!(queue.len(), 2);

    assert_eq!(queue.by_ref().count(), 2);
    assert_eq!(queue.next(), None);
    assert!(queue.is_empty());
}

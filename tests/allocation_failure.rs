use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use mola_containers::{InsertError, linked_list::LinkedList, queue::Queue, stack::Stack};

/// Delegates to the system allocator unless the current thread asked for
/// its next allocations to fail.
struct FailingAllocator;

thread_local! {
    static FAIL_ALLOCATIONS: Cell<bool> = const { Cell::new(false) };
}

unsafe impl GlobalAlloc for FailingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_ALLOCATIONS.with(Cell::get) {
            return std::ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: FailingAllocator = FailingAllocator;

/// Run `f` with every allocation on this thread failing.
fn without_memory<T>(f: impl FnOnce() -> T) -> T {
    FAIL_ALLOCATIONS.with(|fail| fail.set(true));
    let result = f();
    FAIL_ALLOCATIONS.with(|fail| fail.set(false));
    result
}

fn values(list: &LinkedList) -> Vec<i32> {
    list.iter().collect()
}

#[test]
fn test_failed_insertions_leave_list_unchanged() {
    let mut list = LinkedList::new();
    for i in 1..=3 {
        list.append(i).unwrap();
    }

    let append = without_memory(|| list.append(4));
    assert_eq!(append, Err(InsertError::AllocationFailed));
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);

    let head = without_memory(|| list.insert_at_head(0));
    assert_eq!(head, Err(InsertError::AllocationFailed));
    assert_eq!(values(&list), vec![1, 2, 3]);

    let middle = without_memory(|| list.insert_at(9, 1));
    assert_eq!(middle, Err(InsertError::AllocationFailed));
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.len(), 3);

    // The list keeps working once memory is available again
    list.insert_at(9, 1).unwrap();
    assert_eq!(values(&list), vec![1, 9, 2, 3]);
}

#[test]
fn test_failed_insertion_into_empty_list() {
    let mut list = LinkedList::new();

    let result = without_memory(|| list.append(1));
    assert_eq!(result, Err(InsertError::AllocationFailed));
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_adapters_report_allocation_failure() {
    let mut queue = Queue::new();
    queue.enqueue(1).unwrap();
    let enqueue = without_memory(|| queue.enqueue(2));
    assert_eq!(enqueue, Err(InsertError::AllocationFailed));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.dequeue(), Ok(1));

    let mut stack = Stack::new();
    stack.push(1).unwrap();
    let push = without_memory(|| stack.push(2));
    assert_eq!(push, Err(InsertError::AllocationFailed));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.peek(), Ok(1));
}

#[test]
fn test_failed_transform_reports_allocation_failure() {
    let mut list = LinkedList::new();
    list.append(1).unwrap();

    let mapped = without_memory(|| list.map(|n| n + 1).map(|mapped| mapped.len()));
    assert_eq!(mapped, Err(InsertError::AllocationFailed));
    assert_eq!(values(&list), vec![1]);
}

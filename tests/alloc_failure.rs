use duodeque::{Deque, Error};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::rc::Rc;

/// Forwards to `System`, except that it can be told to fail the n-th upcoming `alloc` or
/// `realloc` made on the current thread.
struct Flaky;

thread_local! {
    static FAIL_ALLOC: Cell<usize> = const { Cell::new(0) };
    static FAIL_REALLOC: Cell<usize> = const { Cell::new(0) };
}

fn trip(countdown: &Cell<usize>) -> bool {
    match countdown.get() {
        0 => false,
        n => {
            countdown.set(n - 1);
            n == 1
        }
    }
}

unsafe impl GlobalAlloc for Flaky {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if FAIL_ALLOC.try_with(trip).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if FAIL_REALLOC.try_with(trip).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static ALLOC: Flaky = Flaky;

fn fail_nth_alloc(n: usize) {
    FAIL_ALLOC.with(|c| c.set(n));
}

fn fail_nth_realloc(n: usize) {
    FAIL_REALLOC.with(|c| c.set(n));
}

// far more pushes than a buffer takes before its first grow
const LIMIT: usize = 10_000;

#[test]
fn failed_grow_at_back_leaves_deque_unchanged() {
    let mut d: Deque<u32> = Deque::new();
    d.push_front(7);
    // reserved up front so that it never reallocates while the switch is armed
    let mut expected = Vec::with_capacity(LIMIT + 2);
    expected.push(7);

    fail_nth_realloc(1);
    let (err, cap) = loop {
        assert!(expected.len() < LIMIT, "back buffer never grew");
        let v = expected.len() as u32;
        let cap = d.capacity();
        match d.try_push_back(v) {
            Ok(()) => expected.push(v),
            Err(e) => break (e, cap),
        }
    };
    fail_nth_realloc(0);

    assert!(matches!(err, Error::AllocFailed { .. }), "{:?}", err);
    assert_eq!(d.capacity(), cap);
    assert_eq!(d.len(), expected.len());
    assert_eq!(d, expected);

    // nothing is armed any more, so the same push now grows the buffer
    let v = expected.len() as u32;
    d.try_push_back(v).unwrap();
    expected.push(v);
    assert_eq!(d.capacity().0, cap.0);
    assert!(d.capacity().1 > cap.1);
    assert_eq!(d, expected);
}

#[test]
fn failed_grow_at_front_drops_value() {
    let shared = Rc::new(0u32);
    let mut d = Deque::new();
    d.push_back(Rc::clone(&shared));
    let mut pushed = 1;

    fail_nth_realloc(1);
    let (err, cap) = loop {
        assert!(pushed < LIMIT, "front buffer never grew");
        let cap = d.capacity();
        match d.try_push_front(Rc::clone(&shared)) {
            Ok(()) => pushed += 1,
            Err(e) => break (e, cap),
        }
    };
    fail_nth_realloc(0);

    assert!(matches!(err, Error::AllocFailed { .. }), "{:?}", err);
    // the rejected value was dropped, not leaked into the deque
    assert_eq!(Rc::strong_count(&shared), pushed + 1);
    assert_eq!(d.len(), pushed);
    assert_eq!(d.capacity(), cap);

    d.push_front(Rc::clone(&shared));
    assert_eq!(d.len(), pushed + 1);
    assert!(d.capacity().0 > cap.0);

    drop(d);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn failed_construction_is_reported() {
    let less = |a: &u64, b: &u64| a < b;

    // the front buffer cannot be allocated
    fail_nth_alloc(1);
    let d = Deque::try_with_ordering(less);
    fail_nth_alloc(0);
    assert!(matches!(d, Err(Error::AllocFailed { .. })));

    // the back buffer cannot be allocated, and the front one is released again
    fail_nth_alloc(2);
    let d = Deque::try_with_ordering(less);
    fail_nth_alloc(0);
    assert!(matches!(d, Err(Error::AllocFailed { .. })));

    let mut d = Deque::try_with_ordering(less).unwrap();
    d.push_back(1);
    assert_eq!(d.len(), 1);
}

#[test]
fn alloc_error_message() {
    let layout = Layout::array::<u32>(128).unwrap();
    assert_eq!(
        Error::AllocFailed { layout }.to_string(),
        "memory allocation of 512 bytes failed"
    );
}

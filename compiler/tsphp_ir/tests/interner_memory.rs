//! Interned strings are released together with their interner.
#![allow(unsafe_code)]

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

use tsphp_ir::{StringInterner, TreeBuilder};

struct CountingAllocator;

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        LIVE_BYTES.fetch_add(layout.size(), Ordering::Relaxed);
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        LIVE_BYTES.fetch_sub(layout.size(), Ordering::Relaxed);
        System.dealloc(ptr, layout);
    }
}

#[global_allocator]
static ALLOCATOR: CountingAllocator = CountingAllocator;

const MIB: usize = 1024 * 1024;

#[test]
fn dropped_interners_and_trees_free_their_strings() {
    let big = "x".repeat(MIB);
    let before = LIVE_BYTES.load(Ordering::Relaxed);

    for _ in 0..50 {
        let mut interner = StringInterner::new();
        let name = interner.intern(&big);
        assert_eq!(interner.lookup(name).len(), MIB);
    }

    for _ in 0..50 {
        let mut b = TreeBuilder::new();
        let ident = b.string(&big);
        let stmt = b.expr_stmt(ident);
        let tree = b.finish(&[stmt]);
        assert_eq!(tree.roots().len(), 1);
    }

    let after = LIVE_BYTES.load(Ordering::Relaxed);
    let grown = after.saturating_sub(before);
    assert!(
        grown < MIB,
        "live bytes grew by {grown} after dropping 100 interners"
    );
}

// SPDX-License-Identifier: Apache-2.0

//! Allocation balance: every byte a parse allocates is released again,
//! whether the parse fails or the finished tree is dropped.
//!
//! Counts are kept per thread so tests running in parallel do not see each
//! other's allocations. These tests use plain `#[test]`: an installed logger
//! would allocate while formatting records.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use jsontree::{parse, parse_with_config, ParseError, ScratchSizes, Value};

struct CountingAllocator;

thread_local! {
    static OUTSTANDING: Cell<isize> = const { Cell::new(0) };
}

fn record(delta: isize) {
    // Thread teardown may run after the slot is gone
    let _ = OUTSTANDING.try_with(|n| n.set(n.get() + delta));
}

fn outstanding() -> isize {
    OUTSTANDING.with(Cell::get)
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        record(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

const FAILING: &[(&str, ParseError)] = &[
    (r#"["abc", "def", [1, 2, {"k": "v", "x": [true, nul]}]]"#, ParseError::InvalidValue),
    (r#"{"a": {"b": {"c": ["long string value", "unterminated"#, ParseError::MissQuotationMark),
    (r#"[{"k": "\uD800"}, 1]"#, ParseError::InvalidUnicodeSurrogate),
    (r#"{"one": 1, "two": [2, 2], "three" 3}"#, ParseError::MissColon),
    (r#"[[["deep"], ["er"]], 1e999]"#, ParseError::NumberTooBig),
    (r#"{"list": [1, 2, 3], "obj": {}} trailing"#, ParseError::RootNotSingular),
];

#[test]
fn test_failing_parse_releases_everything() {
    for &(json, expected) in FAILING {
        let before = outstanding();
        let mut value = Value::new();
        assert_eq!(parse(&mut value, json), Err(expected));
        assert!(value.is_null());
        assert_eq!(outstanding(), before, "leak after failing parse of {json}");
    }
}

#[test]
fn test_failing_parse_with_growth_releases_everything() {
    // Tiny scratch stacks force several growth steps before the failure
    let before = outstanding();
    let mut value = Value::new();
    let result = parse_with_config::<ScratchSizes<1, 1, 1>>(
        &mut value,
        br#"[{"a": "a fairly long string", "b": [1, 2, 3, 4, 5, 6, 7, 8]}, "x", ]"#,
    );
    assert_eq!(result, Err(ParseError::InvalidValue));
    assert_eq!(outstanding(), before);
}

#[test]
fn test_failure_releases_previous_tree() {
    let before = outstanding();
    let mut value = Value::from("previous contents");
    assert!(outstanding() > before);
    assert_eq!(parse(&mut value, "[1, 2"), Err(ParseError::MissCommaOrSquareBracket));
    assert_eq!(outstanding(), before);
}

#[test]
fn test_parsed_tree_is_released_by_deep_free() {
    let before = outstanding();
    let mut value = Value::new();
    parse(
        &mut value,
        r#"{"name": "tree", "items": [1, "two", [3], {"four": 4}], "empty": ""}"#,
    )
    .unwrap();
    assert!(outstanding() > before);

    value.deep_free();
    assert_eq!(outstanding(), before);
    value.deep_free();
    assert_eq!(outstanding(), before);
}

#[test]
fn test_parsed_tree_is_released_by_drop() {
    let before = outstanding();
    {
        let mut value = Value::new();
        parse(&mut value, r#"[["a", "b"], {"c": ["d"]}]"#).unwrap();
    }
    assert_eq!(outstanding(), before);
}

#[test]
fn test_mutators_release_replaced_payload() {
    let before = outstanding();
    let mut value = Value::new();
    value.set_array(4);
    value.push_array_element().set_string(b"element");
    value.push_array_element().set_object(2);
    value.set_number(1.0);
    assert_eq!(outstanding(), before);
}

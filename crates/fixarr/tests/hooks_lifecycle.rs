//! Element hook behaviour: deep copies, release accounting, matching.

use fixarr::{ArrayError, FixedArray, HookSet};
use fixarr_test_utils::{Blob, BlobHooks, CountingHooks};

#[test]
fn release_runs_once_per_slot_on_drop() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    {
        let _array = FixedArray::with_capacity_and_hooks(5, Some(&0u8), hooks).unwrap();
        assert_eq!(counters.releases(), 0);
    }
    assert_eq!(counters.releases(), 5);
}

#[test]
fn uninitialized_drop_releases_nothing() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    drop(FixedArray::<u8, _>::with_hooks(hooks));
    assert_eq!(counters.releases(), 0);
}

#[test]
fn overwrite_releases_displaced_element() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    let mut array = FixedArray::with_capacity_and_hooks(3, Some(&0i32), hooks).unwrap();

    array.insert(0, 1).unwrap();
    array.insert_from(1, &2).unwrap();
    assert_eq!(counters.releases(), 2);
    assert_eq!(counters.duplicates(), 1);

    drop(array);
    assert_eq!(counters.releases(), 5);
}

#[test]
fn rejected_writes_do_not_touch_hooks() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    let mut array = FixedArray::with_capacity_and_hooks(2, Some(&0i32), hooks).unwrap();

    assert!(array.insert(2, 1).is_err());
    assert!(array.insert_from(9, &1).is_err());
    assert_eq!(counters.releases(), 0);
    assert_eq!(counters.duplicates(), 0);
}

#[test]
fn failed_reinit_keeps_hooks_and_contents() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    let mut array = FixedArray::with_capacity_and_hooks(2, Some(&7i32), hooks).unwrap();
    assert_eq!(
        array.init(3, None),
        Err(ArrayError::AlreadyInitialized { capacity: 2 })
    );
    assert_eq!(counters.releases(), 0);
    assert_eq!(array.as_slice().unwrap(), &[7, 7]);
}

#[test]
fn blob_insert_from_makes_independent_copy() {
    let mut array = FixedArray::with_capacity_and_hooks(3, None, BlobHooks).unwrap();
    let mut src = Blob::new(4, b"nested");
    array.insert_from(1, &src).unwrap();

    src.bytes.clear();
    assert_eq!(array.get(1), Ok(&Blob::new(4, b"nested")));
}

#[test]
fn blob_position_matches_on_tag() {
    let mut array = FixedArray::with_capacity_and_hooks(4, None, BlobHooks).unwrap();
    array.insert(2, Blob::new(11, b"x")).unwrap();
    assert_eq!(array.position(&Blob::new(11, b"ignored")), Ok(Some(2)));
    assert_eq!(array.position(&Blob::new(12, b"x")), Ok(None));
}

#[test]
fn position_consults_match_hook_per_slot_until_found() {
    let hooks = CountingHooks::new();
    let counters = hooks.counters();
    let mut array = FixedArray::with_capacity_and_hooks(6, Some(&0u16), hooks).unwrap();
    array.insert(3, 5).unwrap();
    assert_eq!(array.position(&5), Ok(Some(3)));
    assert_eq!(counters.matches(), 4);
}

#[test]
fn hook_set_release_sees_every_element() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let hooks = HookSet::new().with_release(move |v: &mut u32| sink.borrow_mut().push(*v));
    {
        let mut array = FixedArray::with_capacity_and_hooks(3, Some(&0), hooks).unwrap();
        array.insert(0, 10).unwrap();
        array.insert(2, 30).unwrap();
    }
    assert_eq!(*seen.borrow(), vec![0, 0, 10, 0, 30]);
}

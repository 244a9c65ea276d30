//! Container contract: lifecycle, bounds, and the documented scenarios.

use fixarr::{ArrayConfig, ArrayError, FixedArray};

#[test]
fn scenario_insert_then_index_assignment() {
    let mut array = FixedArray::with_capacity(4, Some(&0)).unwrap();
    array.insert(0, 1).unwrap();
    assert_eq!(array.get(0), Ok(&1));

    array[0] = 2;
    assert_eq!(array.get(0), Ok(&2));
    assert_eq!(array[0], 2);
}

#[test]
fn scenario_unwritten_slot_reads_fill_value() {
    let array = FixedArray::with_capacity(4, Some(&0)).unwrap();
    assert_eq!(array.get(1), Ok(&0));
}

#[test]
fn scenario_index_five_of_four_is_out_of_range() {
    let array = FixedArray::with_capacity(4, Some(&0)).unwrap();
    assert_eq!(
        array.get(5),
        Err(ArrayError::IndexOutOfRange {
            index: 5,
            capacity: 4
        })
    );
}

#[test]
fn capacity_zero_and_one_are_invalid() {
    assert!(matches!(
        FixedArray::<i32>::with_capacity(0, None),
        Err(ArrayError::InvalidCapacity { requested: 0, .. })
    ));
    assert!(matches!(
        FixedArray::with_capacity(1, Some(&0)),
        Err(ArrayError::InvalidCapacity { requested: 1, .. })
    ));
}

#[test]
fn get_on_default_constructed_is_not_initialized() {
    let mut array: FixedArray<i32> = FixedArray::default();
    assert_eq!(array.get(0), Err(ArrayError::NotInitialized));
    assert_eq!(array.get_mut(0).err(), Some(ArrayError::NotInitialized));
    assert_eq!(array.as_slice().err(), Some(ArrayError::NotInitialized));
}

#[test]
fn declare_then_initialize_once() {
    let mut array = FixedArray::new();
    assert!(!array.is_initialized());
    array.init(4, Some(&-1)).unwrap();
    array.insert(1, 8).unwrap();

    assert_eq!(
        array.init(4, Some(&0)),
        Err(ArrayError::AlreadyInitialized { capacity: 4 })
    );
    assert_eq!(array.as_slice().unwrap(), &[-1, 8, -1, -1]);
}

#[test]
fn out_of_range_insert_leaves_slots_alone() {
    let mut array = FixedArray::with_capacity(3, Some(&10)).unwrap();
    for index in [3, 4, 100, usize::MAX] {
        assert!(array.insert(index, 0).is_err());
    }
    assert_eq!(array.as_slice().unwrap(), &[10, 10, 10]);
}

#[test]
fn accessors_report_configuration() {
    let config = ArrayConfig::new(8);
    let mut array =
        FixedArray::from_config(&config, None, fixarr::ValueHooks).unwrap();
    array.insert(7, 1u32).unwrap();
    assert_eq!(array.size(), 8);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.type_size(), 4);
    assert_eq!(array.count(), 0);
    assert_eq!(array.memory_bytes(), 32);
}

#[test]
fn bounds_ignore_count() {
    let mut array = FixedArray::with_capacity(4, Some(&0)).unwrap();
    array.set_count(1).unwrap();
    assert!(array.insert(3, 9).is_ok());
    assert_eq!(array.get(3), Ok(&9));
}

#[test]
#[should_panic(expected = "index 4 out of range for array of capacity 4")]
fn index_operator_panics_out_of_range() {
    let mut array = FixedArray::with_capacity(4, Some(&0)).unwrap();
    array[4] = 1;
}

#[test]
fn non_copy_elements_round_trip() {
    let mut array = FixedArray::with_capacity(2, None).unwrap();
    array.insert(0, String::from("left")).unwrap();
    array.insert(1, String::from("right")).unwrap();
    assert_eq!(array.position(&String::from("right")), Ok(Some(1)));
    assert_eq!(
        array.to_string(),
        "array {\n\tmax size: 2\n\tcount: 0\n\tdata: [left, right]\n}"
    );
}

//! Growth engine tests: geometric growth, pre-sizing, capacity retention.

use zstring::ZString;

#[test]
fn test_first_append_allocates_with_headroom() {
    let mut s = ZString::new();
    assert_eq!(s.capacity(), 0);
    s.append(b"hello").unwrap();
    // strict need is 5 content + 1 terminator; 25% headroom lands at 7
    assert_eq!(s.capacity(), 7);
    assert!(s.len() < s.capacity());
}

#[test]
fn test_growth_is_geometric() {
    let mut s = ZString::new();
    let mut reallocs = 0;
    let mut cap = s.capacity();
    for _ in 0..10_000 {
        s.append(b"x").unwrap();
        if s.capacity() != cap {
            reallocs += 1;
            cap = s.capacity();
        }
    }
    assert_eq!(s.len(), 10_000);
    // log_1.25(10_000) is about 41; linear growth would reallocate thousands
    // of times
    assert!(
        reallocs < 64,
        "expected geometric growth, saw {reallocs} reallocations"
    );
}

#[test]
fn test_grow_by_percent_empty_is_absolute() {
    let mut s = ZString::new();
    s.grow_by_percent(64).unwrap();
    assert_eq!(s.capacity(), 64);
    assert_eq!(s.len(), 0);

    // appends within the pre-sized store must not reallocate
    s.append(b"0123456789").unwrap();
    assert_eq!(s.capacity(), 64);
}

#[test]
fn test_grow_by_percent_relative_rounds_down() {
    let mut s = ZString::from_slice(b"hello").unwrap();
    let cap = s.capacity();

    s.grow_by_percent(100).unwrap();
    assert_eq!(s.capacity(), cap + 5);

    // 5 * 10 / 100 rounds to zero: no-op
    s.grow_by_percent(10).unwrap();
    assert_eq!(s.capacity(), cap + 5);
    assert_eq!(s.as_bytes(), b"hello");
}

#[test]
fn test_grow_by_percent_never_shrinks_or_corrupts() {
    let mut s = ZString::new();
    s.grow_by_percent(1024).unwrap();
    s.append(b"payload").unwrap();
    let cap = s.capacity();

    // already far larger than anything these could ask for
    s.grow_by_percent(0).unwrap();
    s.grow_by_percent(14).unwrap(); // 7 * 14 / 100 == 0
    assert_eq!(s.capacity(), cap);
    assert_eq!(s.as_bytes(), b"payload");

    s.grow_by_percent(200).unwrap();
    assert_eq!(s.capacity(), cap + 14);
    assert_eq!(s.as_bytes(), b"payload");
}

#[test]
fn test_capacity_never_decreases_after_remove() {
    let mut s = ZString::new();
    s.append(&[b'z'; 256]).unwrap();
    let cap = s.capacity();

    s.remove(10, 200);
    assert_eq!(s.capacity(), cap);
    s.remove(0, s.len() - 1);
    assert_eq!(s.capacity(), cap);
    assert_eq!(s.len(), 0);
}

#[test]
fn test_appends_within_capacity_do_not_reallocate() {
    let mut s = ZString::new();
    s.grow_by_percent(100).unwrap(); // 100 absolute bytes
    let cap = s.capacity();
    for _ in 0..99 {
        s.append(b"a").unwrap();
    }
    assert_eq!(s.capacity(), cap);
    // one more byte needs the terminator slot and must trigger growth
    s.append(b"a").unwrap();
    assert!(s.capacity() > cap);
}

use std::collections::TryReserveError;

/// Allocate a vector of `n` copies of `val`, reporting allocation
/// failure as an error rather than aborting.
pub(crate) fn try_filled<T: Clone>(n: usize, val: T) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(n)?;
    v.resize(n, val);
    Ok(v)
}

/// Allocate an empty vector with room for `n` elements, reporting
/// allocation failure as an error rather than aborting.
pub(crate) fn try_with_capacity<T>(n: usize) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(n)?;
    Ok(v)
}

#[test]
fn test_try_alloc() {
    let v = try_filled(4, 1.5f64).unwrap();
    assert_eq!(v, vec![1.5; 4]);

    let v: Vec<u8> = try_with_capacity(16).unwrap();
    assert!(v.is_empty() && v.capacity() >= 16);

    // more than isize::MAX bytes can never be reserved
    assert!(try_with_capacity::<f64>(usize::MAX).is_err());
}

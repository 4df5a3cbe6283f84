use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn scalarop_from(&mut self, op: impl Fn(T) -> T, v: &[T]) -> &mut Self {
        assert_eq!(self.len(), v.len());
        for (x, v) in zip(&mut *self, v) {
            *x = op(*v);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn dist(&self, y: &Self) -> T {
        assert_eq!(self.len(), y.len());
        let dist2 = zip(self, y).fold(T::zero(), |acc, (&x, &y)| acc + T::powi(x - y, 2));
        T::sqrt(dist2)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }
}

#[test]
fn test_dist_and_finite() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dist(&y), 6.);
    assert!(x.is_finite());

    let z = vec![1., f64::NAN, -3.];
    assert!(!z.is_finite());
    assert!(!vec![f64::NEG_INFINITY].is_finite());
}

#[test]
fn test_scalarop_and_set() {
    let w = vec![1., 2., 4.];
    let mut xw = vec![0.; 3];
    xw.scalarop_from(f64::recip, &w);
    assert_eq!(xw, vec![1., 0.5, 0.25]);
    xw.scalarop(|x| 2. * x);
    assert_eq!(xw, vec![2., 1., 0.5]);
    xw.set(0.);
    assert_eq!(xw, vec![0.; 3]);
}

#[macro_export]
macro_rules! test_t {
  ($name:ident[T: $($impl:ty)|*]() $body:tt ) => {$(
      ::paste::paste! {
          #[test]
          fn [<test_ $name _ $impl:snake>]() {
            type T=$impl;
            $body
          }
      }
  )+};
}

#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        assert!(
            ($l - $r).abs() < f64::EPSILON,
            "assertion failed: {} !~ {}",
            $l,
            $r
        )
    };
    ($l:expr, $r:expr, epsilon = $e:expr) => {
        assert!(
            ($l - $r).abs() < $e,
            "assertion failed: {} !~ {} (within {})",
            $l,
            $r,
            $e
        )
    };
    ($l:expr, $r:expr, $msg:expr) => {
        assert!(
            ($l - $r).abs() < f64::EPSILON,
            "assertion failed: {} !~ {}: {}",
            $l,
            $r,
            $msg
        )
    };
}

#[macro_export]
macro_rules! assert_slice_approx {
    ($l:expr, $r:expr) => {{
        let (l, r): (&[f64], &[f64]) = (&$l, &$r);
        assert_eq!(l.len(), r.len(), "length mismatch: {:?} !~ {:?}", l, r);
        for (i, (a, b)) in l.iter().zip(r.iter()).enumerate() {
            assert!(
                (a - b).abs() < f64::EPSILON,
                "assertion failed at {}: {:?} !~ {:?}",
                i,
                l,
                r
            );
        }
    }};
}

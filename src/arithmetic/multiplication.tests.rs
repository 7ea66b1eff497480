// Tests for multiplication routines, included by multiplication.rs

use super::*;

mod test_multiply_digit_slices {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: [ $($a:literal),* ] * [ $($b:literal),* ] == [ $($c:literal),* ]) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a: &[u32] = &[ $($a),* ];
                    let b: &[u32] = &[ $($b),* ];
                    let expected: &[u32] = &[ $($c),* ];

                    let product = multiply_digit_slices(a, b);
                    assert_eq!(product.as_slice(), expected);

                    let commutes = multiply_digit_slices(b, a);
                    assert_eq!(commutes.as_slice(), expected);
                }

                #[test]
                fn [< case_ $name _schoolbook >]() {
                    let a: &[u32] = &[ $($a),* ];
                    let b: &[u32] = &[ $($b),* ];
                    let expected: &[u32] = &[ $($c),* ];

                    let product = multiply_digit_slices_schoolbook(a, b);
                    assert_eq!(product.as_slice(), expected);
                }
            }
        };
    }

    impl_case!(empty: [] * [5] == []);
    impl_case!(five_five: [5] * [5] == [25]);
    impl_case!(seven_22: [7] * [22] == [154]);
    impl_case!(ten_to_nine_squared: [0, 1] * [0, 1] == [0, 0, 1]);
    impl_case!(max_digit_squared: [999999999] * [999999999] == [1, 999999998]);
    impl_case!(n209504545595_n605739580991: [504545595, 209] * [739580991, 605] == [154784645, 195664425, 126905]);
    impl_case!(uneven_lengths: [1, 1, 1] * [2] == [2, 2, 2]);
}

mod test_karatsuba_multiply {
    use super::*;

    /// Plain quadratic convolution without recursion
    fn convolve(a: &[i64], b: &[i64]) -> Vec<i64> {
        let mut result = vec![0; a.len() + b.len()];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                result[i + j] += x * y;
            }
        }
        result
    }

    /// Deterministic pseudo-random six digit limbs
    fn limbs(n: usize, seed: u64) -> Vec<i64> {
        let mut state = seed;
        (0..n).map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 1_000_000) as i64
        }).collect()
    }

    #[test]
    fn below_cutoff_matches_convolution() {
        let a = limbs(4, 1);
        let b = limbs(4, 2);
        assert_eq!(karatsuba_multiply(&a, &b), convolve(&a, &b));
    }

    #[test]
    fn above_cutoff_matches_convolution() {
        let n = (KARATSUBA_CUTOFF * 4).next_power_of_two();
        let a = limbs(n, 3);
        let b = limbs(n, 4);
        assert_eq!(karatsuba_multiply(&a, &b), convolve(&a, &b));
    }

    #[test]
    fn all_max_limbs() {
        let n = (KARATSUBA_CUTOFF * 2).next_power_of_two();
        let a = vec![999999i64; n];
        assert_eq!(karatsuba_multiply(&a, &a), convolve(&a, &a));
    }

    #[test]
    fn large_product_matches_schoolbook() {
        let a: Vec<u32> = limbs(700, 5).into_iter().map(|d| (d as u32) * 997 % 1_000_000_000).chain(Some(1)).collect();
        let b: Vec<u32> = limbs(450, 6).into_iter().map(|d| (d as u32) * 1009 % 1_000_000_000).chain(Some(7)).collect();
        let expected = multiply_digit_slices_schoolbook(&a, &b);
        assert_eq!(multiply_digit_slices(&a, &b), expected);
    }
}

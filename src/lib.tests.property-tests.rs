// Property tests to be included by lib.rs (if enabled)

/// Parse the same string as both our BigInt and num_bigint's
fn parse_both(s: &str) -> (BigInt, num_bigint::BigInt) {
    (s.parse().unwrap(), s.parse().unwrap())
}

fn oracle(n: &BigInt) -> num_bigint::BigInt {
    n.to_string().parse().unwrap()
}


mod parsing {
    use super::*;

    proptest! {
        #[test]
        fn round_trip(s in "-?[1-9][0-9]{0,300}") {
            let n: BigInt = s.parse().unwrap();
            prop_assert_eq!(n.to_string(), s.clone());
            prop_assert_eq!(n.number_of_digits(), s.len());
        }

        #[test]
        fn canonicalizes(s in "-?0{0,12}[0-9]{1,40}") {
            let (ours, theirs) = parse_both(&s);
            prop_assert_eq!(ours.to_string(), theirs.to_string());
        }

        #[test]
        fn from_i128(n: i128) {
            let b = BigInt::from(n);
            prop_assert_eq!(b.to_string(), n.to_string());
            prop_assert_eq!(b.to_i128(), Some(n));
        }

        #[test]
        fn long_value(n: i64) {
            prop_assert_eq!(BigInt::from(n).long_value(), Ok(n));
        }
    }
}


mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn matches_num_bigint(a in "-?[1-9][0-9]{0,120}", b in "-?[1-9][0-9]{0,120}") {
            let (x, x_) = parse_both(&a);
            let (y, y_) = parse_both(&b);

            prop_assert_eq!(oracle(&(&x + &y)), &x_ + &y_);
            prop_assert_eq!(oracle(&(&x - &y)), &x_ - &y_);
            prop_assert_eq!(oracle(&(&x * &y)), &x_ * &y_);
            prop_assert_eq!(oracle(&(&x / &y)), &x_ / &y_);
            prop_assert_eq!(oracle(&(&x % &y)), &x_ % &y_);
        }

        #[test]
        fn additive_inverse(a in "-?[0-9]{1,100}", b in "-?[0-9]{1,100}") {
            let x: BigInt = a.parse().unwrap();
            let y: BigInt = b.parse().unwrap();

            prop_assert_eq!(&x + &y - &y, x.clone());
            prop_assert_eq!(&x - &y + &y, x.clone());
            prop_assert!((&x - &x).is_zero());
            prop_assert_eq!((&x - &x).sign(), Sign::Plus);
        }

        #[test]
        fn division_identity(a in "-?[0-9]{1,150}", b in "-?[1-9][0-9]{0,80}") {
            let x: BigInt = a.parse().unwrap();
            let y: BigInt = b.parse().unwrap();

            let (q, r) = x.divmod(&y).unwrap();
            prop_assert_eq!(&q * &y + &r, x.clone());
            prop_assert!(r.cmp_abs(&y) == Ordering::Less);
            prop_assert!(r.is_zero() || r.sign() == x.sign());
        }

        #[test]
        fn scalar_division_identity(a in "-?[0-9]{1,100}", d in any::<i32>()) {
            prop_assume!(d != 0);
            let x: BigInt = a.parse().unwrap();

            let q = &x / d;
            let r = &x % d;
            prop_assert_eq!(&q * d + r as i64, x.clone());
            prop_assert!(r == 0 || (r < 0) == x.is_negative());
            prop_assert_eq!(q, &x / &BigInt::from(d));
        }

        #[test]
        fn small_mul_commutes(a: i64, b: i64, c: i64) {
            let (x, y, z) = (BigInt::from(a), BigInt::from(b), BigInt::from(c));

            prop_assert_eq!(&x * &y, &y * &x);
            prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
            prop_assert_eq!(&x * &y, BigInt::from(a as i128 * b as i128));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        // operands long enough for the Karatsuba recursion
        #[test]
        fn large_mul_associative_and_commutative(
            a in "-?[1-9][0-9]{200,800}",
            b in "-?[1-9][0-9]{200,800}",
            c in "-?[1-9][0-9]{10,300}",
        ) {
            let (x, x_) = parse_both(&a);
            let (y, y_) = parse_both(&b);
            let z: BigInt = c.parse().unwrap();

            let xy = &x * &y;
            prop_assert_eq!(&xy, &(&y * &x));
            prop_assert_eq!(&xy * &z, &x * &(&y * &z));
            prop_assert_eq!(oracle(&xy), x_ * y_);
        }

        #[test]
        fn large_division_round_trip(a in "[1-9][0-9]{600,900}", b in "-?[1-9][0-9]{300,600}") {
            let x: BigInt = a.parse().unwrap();
            let y: BigInt = b.parse().unwrap();

            let product = &x * &y;
            prop_assert_eq!(&product / &y, x.clone());
            prop_assert!((&product % &x).is_zero());
        }
    }
}


mod ordering {
    use super::*;

    proptest! {
        #[test]
        fn total_order_matches_difference(a in "-?[0-9]{1,40}", b in "-?[0-9]{1,40}") {
            let (x, x_) = parse_both(&a);
            let (y, y_) = parse_both(&b);

            let ord = x.cmp(&y);
            prop_assert_eq!(ord, x_.cmp(&y_));
            prop_assert_eq!(ord, (&x - &y).cmp(&BigInt::zero()));
            prop_assert_eq!(ord == Ordering::Equal, x == y);
            prop_assert_eq!(y.cmp(&x), ord.reverse());
        }

        #[test]
        fn i64_order(a: i64, b: i64) {
            prop_assert_eq!(BigInt::from(a).cmp(&BigInt::from(b)), a.cmp(&b));
        }
    }
}


mod gcd_lcm {
    use super::*;

    proptest! {
        #[test]
        fn gcd_divides_both(a in "-?[0-9]{1,60}", b in "-?[0-9]{1,60}") {
            let x: BigInt = a.parse().unwrap();
            let y: BigInt = b.parse().unwrap();

            let g = gcd(x.clone(), y.clone());
            prop_assert!(!g.is_negative());
            if !g.is_zero() {
                prop_assert!((&x % &g).is_zero());
                prop_assert!((&y % &g).is_zero());
            }
        }

        #[test]
        fn gcd_lcm_product(a in "-?[1-9][0-9]{0,50}", b in "-?[1-9][0-9]{0,50}") {
            let x: BigInt = a.parse().unwrap();
            let y: BigInt = b.parse().unwrap();

            let g = gcd(x.clone(), y.clone());
            let l = lcm(x.clone(), y.clone());
            prop_assert_eq!(&l * &g, (&x * &y).abs());
        }

        #[test]
        fn gcd_matches_num_integer(a: i64, b: i64) {
            let g = gcd(BigInt::from(a), BigInt::from(b));
            let expected = num_integer::Integer::gcd(&(a as i128), &(b as i128));
            prop_assert_eq!(g, BigInt::from(expected));
        }
    }
}


#[cfg(feature = "serde")]
mod serde_tokens {
    use super::*;

    proptest! {
        #[test]
        fn string_tokens(s in "-?[1-9][0-9]{0,60}") {
            let n: BigInt = s.parse().unwrap();
            let leaked: &'static str = Box::leak(s.into_boxed_str());
            serde_test::assert_tokens(&n, &[serde_test::Token::Str(leaked)]);
        }
    }
}

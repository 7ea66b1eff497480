// Tests included by lib.rs

/// 2000th Fibonacci number (F(0) = 0, F(1) = 1)
const FIBONACCI_2000: &str = concat!(
    "422469633339230487870672560234148278257985284025068109801028",
    "013731430858437013070722412359963914151108844608753890960360",
    "764019471164359602927198331259873732625355580260699158591522",
    "949245390499872225679531698287448247299226390183371677806060",
    "701161549788671987985831146887087626459736908672288402365442",
    "229524334796448013951534956297208765265606952980649984197744",
    "8720155612802665404554171717881930324025204312082516817125",
);

/// Fibonacci number F(1000)
const FIBONACCI_1000: &str = concat!(
    "434665576869374564356885276750406258025646605173717804024817",
    "290895365554179490518904038798400792551692959225930803226347",
    "752096896232398733224711616429964409065331879382989696499285",
    "16003704476137795166849228875",
);

/// Lucas number L(1000) = F(999) + F(1001)
const LUCAS_1000: &str = concat!(
    "971941777359081752079819820793264737377978791553456850827280",
    "810847725188184448152690806191490459682976795783054032093474",
    "011630369076605739717408624637518016412014902840973090963226",
    "81531675707666695323797578127",
);

#[test]
fn test_fibonacci_2000_by_addition() {
    let mut a = BigInt::zero();
    let mut b = BigInt::one();
    for _ in 0..2000 {
        let next = &a + &b;
        a = stdlib::mem::replace(&mut b, next);
    }

    assert_eq!(a.to_string(), FIBONACCI_2000);
    assert_eq!(a.number_of_digits(), 418);
    assert_eq!(a, BigInt::from_str(FIBONACCI_2000).unwrap());
}

#[test]
fn test_fibonacci_2000_by_multiplication() {
    // F(2n) = F(n) * L(n)
    let f: BigInt = FIBONACCI_1000.parse().unwrap();
    let l: BigInt = LUCAS_1000.parse().unwrap();
    let expected: BigInt = FIBONACCI_2000.parse().unwrap();

    assert_eq!(&f * &l, expected);
    assert_eq!(&l * &f, expected);
    assert_eq!(-&f * &l, -expected.clone());

    // and back again
    assert_eq!(&expected / &f, l);
    assert!((&expected % &l).is_zero());
}

#[test]
fn test_limb_boundary_product() {
    let a = BigInt::from_str("1000000000").unwrap();
    let b = BigInt::from_str("1000000000").unwrap();
    assert_eq!(a * b, BigInt::from_str("1000000000000000000").unwrap());
}

#[test]
fn test_truncating_division_signs() {
    assert_eq!(BigInt::from(-7) % BigInt::from(3), BigInt::from(-1));
    assert_eq!(BigInt::from(7) / BigInt::from(-3), BigInt::from(-2));
    assert_eq!(BigInt::from(-7) / BigInt::from(3), BigInt::from(-2));
    assert_eq!(BigInt::from(7) % BigInt::from(-3), BigInt::from(1));
}

#[test]
fn test_zero_normalization() {
    let zero = BigInt::from_str("0").unwrap();
    let neg_zero = BigInt::from_str("-0").unwrap();

    assert_eq!(zero.sign(), Sign::Plus);
    assert_eq!(neg_zero.sign(), Sign::Plus);
    assert_eq!(zero, neg_zero);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(neg_zero.to_string(), "0");

    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!((-BigInt::zero()).sign(), Sign::Plus);
    assert_eq!((-&BigInt::zero()).sign(), Sign::Plus);
    assert_eq!(BigInt::default(), BigInt::zero());
    assert_eq!(BigInt::from_digits(Sign::Minus, vec![0, 0]), Some(BigInt::zero()));
}

#[test]
fn test_zero_hashes_equal() {
    use stdlib::DefaultHasher;

    fn hash(n: &BigInt) -> u64 {
        let mut h = DefaultHasher::new();
        n.hash(&mut h);
        h.finish()
    }

    let a = BigInt::from(5) - BigInt::from(5);
    let b: BigInt = "-0".parse().unwrap();
    assert_eq!(hash(&a), hash(&b));
    assert_eq!(hash(&BigInt::from(12)), hash(&"12".parse().unwrap()));
}

#[test]
fn test_move_leaves_zero() {
    let mut a = BigInt::from(123456789012345i64);
    let b = stdlib::mem::take(&mut a);
    assert!(a.is_zero());
    assert_eq!(b, BigInt::from(123456789012345i64));
}

mod number_of_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInt = $input.parse().unwrap();
                assert_eq!(n.number_of_digits(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => 1);
    impl_case!(case_n0: "-0" => 1);
    impl_case!(case_9: "9" => 1);
    impl_case!(case_n9: "-9" => 2);
    impl_case!(case_10: "10" => 2);
    impl_case!(case_999999999: "999999999" => 9);
    impl_case!(case_1000000000: "1000000000" => 10);
    impl_case!(case_n1000000000000000000: "-1000000000000000000" => 20);
}

mod long_value {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => Ok($expected:expr)) => {
            #[test]
            fn $name() {
                let n: BigInt = $input.parse().unwrap();
                assert_eq!(n.long_value(), Ok($expected));
            }
        };
        ($name:ident: $input:literal => Overflow) => {
            #[test]
            fn $name() {
                let n: BigInt = $input.parse().unwrap();
                assert_eq!(n.long_value(), Err(ArithmeticError::Overflow));
            }
        };
    }

    impl_case!(case_0: "0" => Ok(0));
    impl_case!(case_n1: "-1" => Ok(-1));
    impl_case!(case_radix: "1000000000" => Ok(1_000_000_000));
    impl_case!(case_max: "9223372036854775807" => Ok(i64::MAX));
    impl_case!(case_min: "-9223372036854775808" => Ok(i64::MIN));
    impl_case!(case_max_plus_one: "9223372036854775808" => Overflow);
    impl_case!(case_min_minus_one: "-9223372036854775809" => Overflow);
    impl_case!(case_huge: "100000000000000000000000000000" => Overflow);
}

mod read {
    use super::*;

    #[test]
    fn test_read_replaces_value() {
        let mut n = BigInt::from(99);
        n.read("-123456789012345678901").unwrap();
        assert_eq!(n.to_string(), "-123456789012345678901");
    }

    #[test]
    fn test_read_sign_run() {
        let mut n = BigInt::new();
        n.read("--5").unwrap();
        assert_eq!(n, BigInt::from(5));
        n.read("-+-+-5").unwrap();
        assert_eq!(n, BigInt::from(-5));
    }

    #[test]
    fn test_read_error_keeps_value() {
        let mut n = BigInt::from(42);
        assert_eq!(n.read("4 2"), Err(ParseBigIntError::InvalidDigit));
        assert_eq!(n.read("+"), Err(ParseBigIntError::Empty));
        assert_eq!(n, BigInt::from(42));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_read_token_stream() {
        let mut input = "7 -0\n  12345678901234567890\tx".as_bytes();
        let mut n = BigInt::new();

        n.read_token(&mut input).unwrap();
        assert_eq!(n, BigInt::from(7));
        n.read_token(&mut input).unwrap();
        assert!(n.is_zero());
        n.read_token(&mut input).unwrap();
        assert_eq!(n.to_string(), "12345678901234567890");

        assert_eq!(n.read_token(&mut input), Err(ParseBigIntError::InvalidDigit));
        assert_eq!(n.to_string(), "12345678901234567890");

        assert!(matches!(n.read_token(&mut input), Err(ParseBigIntError::Io(_))));
    }
}

mod gcd_lcm {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal, $b:literal => $gcd:literal, $lcm:literal) => {
            #[test]
            fn $name() {
                let a: BigInt = $a.parse().unwrap();
                let b: BigInt = $b.parse().unwrap();
                let g: BigInt = $gcd.parse().unwrap();
                let l: BigInt = $lcm.parse().unwrap();

                assert_eq!(gcd(a.clone(), b.clone()), g);
                assert_eq!(gcd(b.clone(), a.clone()), g);
                assert_eq!(lcm(a.clone(), b.clone()), l);
                assert_eq!(lcm(b, a), l);
            }
        };
    }

    impl_case!(case_12_18: "12" , "18" => "6", "36");
    impl_case!(case_n12_18: "-12" , "18" => "6", "36");
    impl_case!(case_n12_n18: "-12" , "-18" => "6", "36");
    impl_case!(case_0_5: "0" , "5" => "5", "0");
    impl_case!(case_0_n5: "0" , "-5" => "5", "0");
    impl_case!(case_0_0: "0" , "0" => "0", "0");
    impl_case!(case_coprime: "17" , "1000000007" => "1", "17000000119");
    impl_case!(case_large: "123456789012345678901234567890", "987654321098765432109876543210"
               => "9000000000900000000090", "13548070124980948012498094801236261410");
}

mod ops_panic {
    use super::*;

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn div_by_zero() {
        let _ = BigInt::from(1) / BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn rem_by_zero() {
        let _ = BigInt::from(1) % BigInt::zero();
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn div_assign_by_zero() {
        let mut n = BigInt::from(1);
        n /= BigInt::zero();
    }

    #[test]
    fn checked_divmod_by_zero() {
        assert_eq!(BigInt::from(1).divmod(&BigInt::zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(BigInt::from(1).div_rem_i32(0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Division by zero");
    }
}

#[test]
fn test_sum_product() {
    let v: Vec<BigInt> = (1..=25i32).map(BigInt::from).collect();
    let total: BigInt = v.iter().sum();
    assert_eq!(total, BigInt::from(325));

    let factorial: BigInt = v.into_iter().product();
    assert_eq!(factorial.to_string(), "15511210043330985984000000");
}

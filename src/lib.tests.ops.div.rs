// Division tests included by lib.rs

mod divmod {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $numerator:literal / $denominator:literal => $quotient:literal r $remainder:literal) => {
            #[test]
            fn $name() {
                let a: BigInt = $numerator.parse().unwrap();
                let b: BigInt = $denominator.parse().unwrap();
                let q: BigInt = $quotient.parse().unwrap();
                let r: BigInt = $remainder.parse().unwrap();

                assert_eq!(a.divmod(&b), Ok((q.clone(), r.clone())));

                assert_eq!(a.clone() / b.clone(), q);
                assert_eq!(a.clone() / &b, q);
                assert_eq!(&a / b.clone(), q);
                assert_eq!(&a / &b, q);

                assert_eq!(a.clone() % b.clone(), r);
                assert_eq!(&a % &b, r);

                assert_eq!(a.div_rem(&b), (q.clone(), r.clone()));
                assert_eq!(&q * &b + &r, a);
            }
        };
    }

    impl_case!(case_zero_over_one: "0" / "1" => "0" r "0");
    impl_case!(case_two_over_one: "2" / "1" => "2" r "0");
    impl_case!(case_n50_5: "-50" / "5" => "-10" r "0");
    impl_case!(case_200_n5: "200" / "-5" => "-40" r "0");
    impl_case!(case_22_7: "22" / "7" => "3" r "1");
    impl_case!(case_n22_n7: "-22" / "-7" => "3" r "-1");
    impl_case!(case_radix_squared_by_radix: "1000000000000000000" / "1000000000" => "1000000000" r "0");
    impl_case!(case_just_below_radix_squared: "999999999999999999" / "1000000000" => "999999999" r "999999999");
    impl_case!(case_two_limb_by_two_limb: "123456789123456789" / "987654321987" => "124999" r "986529403776");
    impl_case!(case_small_leading_divisor: "1000000000000000000000000000000000000" / "1999999999" => "500000000250000000125000000" r "125000000");
    impl_case!(case_estimate_overshoot: "999999999000000000000000000" / "999999999999999999" => "999999999" r "999999999");
    impl_case!(case_large: "31415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679" / "2718281828459045235360287471352662497757247093699959574966967627724076630353" => "11557273497909217179100931" r "2264673884298273579932931206136111363685145994849561699177976149040856012036");
    impl_case!(case_n_large: "-31415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679" / "2718281828459045235360287471352662497757" => "-11557273497909217179100931833126962991209560795805734489905062" r "-665673494517849355193648264786703224745");
    impl_case!(case_divisor_larger: "123456789" / "1234567890123" => "0" r "123456789");
    impl_case!(case_power_of_ten: "100000000000000000000000000000000000000000000000000" / "10000000000000000000000000" => "10000000000000000000000000" r "0");
}

mod div_assign {
    use super::*;

    #[test]
    fn test_div_assign_chain() {
        let mut n: BigInt = "1000000000000000000000000000000".parse().unwrap();
        n /= BigInt::from(1000);
        n /= &BigInt::from(-1000);
        assert_eq!(n.to_string(), "-1000000000000000000000000");

        n %= BigInt::from(7);
        assert_eq!(n, BigInt::from(-1));
    }

    #[test]
    fn test_div_rem_i32() {
        let n: BigInt = "-1000000000000000000001".parse().unwrap();
        let (q, r) = n.div_rem_i32(10).unwrap();
        assert_eq!(q.to_string(), "-100000000000000000000");
        assert_eq!(r, -1);
    }
}

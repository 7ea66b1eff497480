// Tests for carry helpers, included by radix.rs

use super::*;

mod radix_10p9_u32 {
    use super::*;
    use super::RADIX_10p9_u32 as Radix;

    #[test]
    fn split_wide_digit_0() {
        let (hi, lo) = Radix::split_wide_digit(0);
        assert_eq!(hi, 0);
        assert_eq!(lo, 0);
    }

    #[test]
    fn split_wide_digit_10e9_sqrd() {
        let (hi, lo) = Radix::split_wide_digit(999999998000000001);
        assert_eq!(hi, 999999998);
        assert_eq!(lo, 1);
    }

    #[test]
    fn addassign_carry_no_overflow() {
        let mut n = 222292843;
        let mut carry = 20;
        Radix::addassign_carry(&mut n, &mut carry);
        assert_eq!(n, 222292863);
        assert_eq!(carry, 0);
    }

    #[test]
    fn expanding_add_overflow_999999990_55() {
        let (hi, lo) = Radix::expanding_add(999999990, 55);
        assert_eq!(hi, 1);
        assert_eq!(lo, 45);
    }

    #[test]
    fn add_carry_into_slice_ripples() {
        let result = &mut [999999999, 999999999, 2];
        let mut carry = 1;
        Radix::add_carry_into_slice(result, &mut carry);
        assert_eq!(result, &[0, 0, 3]);
        assert_eq!(carry, 0);
    }

    #[test]
    fn mulassign_carry_splits_product() {
        let mut n = 999999999;
        let mut carry = 7;
        Radix::mulassign_carry(&mut n, 999999999, &mut carry);
        assert_eq!(n, 8);
        assert_eq!(carry, 999999998);
    }

    #[test]
    fn carrying_mul_add_inplace_max() {
        let mut c = 999999999;
        let mut carry = 999999999;
        Radix::carrying_mul_add_inplace(999999999, 999999999, &mut c, &mut carry);
        assert_eq!(c, 999999999);
        assert_eq!(carry, 999999999);
    }
}

mod radix_10p6_u32 {
    use super::*;
    use super::RADIX_10p6_u32 as Radix;

    #[test]
    fn split_wide_digit_10e6_sqrd() {
        let (hi, lo) = Radix::split_wide_digit(999998000001);
        assert_eq!(hi, 999998);
        assert_eq!(lo, 1);
    }

    #[test]
    fn add_with_carry_overflow() {
        let result = &mut 999990;
        let mut carry = 40;
        Radix::addassign_carry(result, &mut carry);
        assert_eq!(*result, 30);
        assert_eq!(carry, 1);
    }
}

//! Implement division

use crate::*;


impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        if other.is_zero() {
            panic!("Division by zero");
        }
        if self.is_zero() || self.cmp_abs(other) == Ordering::Less {
            return BigInt::zero();
        }
        if other.is_one() {
            return self.clone();
        }

        self.divmod_nonzero(other).0
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl<'a> DivAssign<&'a BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

forward_val_assignop!(impl DivAssign for BigInt, div_assign);

//! Digit vectors of arbitrary radix

use crate::stdlib::{
    Vec,
    fmt,
    marker::PhantomData,
};

use num_traits::Zero;

use super::radix::*;


/// Vector of integers, interpreted as little-endian bigdigits in an integer
///
/// Value of the integer is defined by the radix type parameter.
/// The least significant bigdigit is stored at index zero.
///
pub(crate) struct DigitVec<R: RadixType> {
    pub digits: Vec<R::Base>,
    _radix: PhantomData<R>,
}

impl<R: RadixType> DigitVec<R> {
    /// Create new vector
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create new vector with capacity
    pub fn with_capacity(n: usize) -> Self {
        Self::from_vec(Vec::with_capacity(n))
    }

    /// construct from vector of digits
    pub fn from_vec(v: Vec<R::Base>) -> Self {
        debug_assert!(R::validate_digits(v.iter()));
        Self {
            digits: v,
            _radix: PhantomData {},
        }
    }

    /// allocate with n bigdigits and fill with zeros
    pub fn from_zero_count(n: usize) -> Self {
        Self::from_vec(vec![Zero::zero(); n])
    }

    /// Number of bigdigits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if there are no bigdigits (the value zero)
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Remove all bigdigits
    pub fn clear(&mut self) {
        self.digits.clear()
    }

    /// Resize inner vector, filling new values with zero
    pub fn resize(&mut self, n: usize) {
        self.digits.resize(n, Zero::zero())
    }

    /// Borrow digits as slice, least significant first
    pub fn as_slice(&self) -> &[R::Base] {
        self.digits.as_slice()
    }

    /// Most significant bigdigit, zero if empty
    pub fn most_significant_digit(&self) -> R::Base {
        self.digits.last().copied().unwrap_or_else(Zero::zero)
    }

    /// Place given digit at the most-significant end of the vector
    pub fn push_significant_digit(&mut self, d: R::Base) {
        self.digits.push(d);
    }

    /// Place given digit at the least-significant end of the vector,
    /// multiplying the current value by the radix
    pub fn push_insignificant_digit(&mut self, d: R::Base) {
        if self.digits.is_empty() && d.is_zero() {
            return;
        }
        self.digits.insert(0, d);
    }

    /// Remove any zeros at the location of highest significance, if all zeros
    /// the vector will be cleared
    pub fn strip_significant_zeros(&mut self) {
        match self.digits.iter().rposition(|d| !d.is_zero()) {
            Some(idx) => self.digits.truncate(idx + 1),
            None => self.digits.clear(),
        }
    }

    /// Add bigdigit into this vector, starting from index of least significance
    ///
    /// Any "overflow" is pushed to most significant end of the vector
    ///
    pub fn add_value(&mut self, n: R::Base) {
        self.add_value_at(0, n);
    }

    /// Add bigdigit into this vector (indexing from least-significant digit)
    pub fn add_value_at(&mut self, idx: usize, mut n: R::Base) {
        if n.is_zero() {
            return;
        }
        if idx > self.digits.len() {
            self.resize(idx);
        }

        for dest in self.digits.iter_mut().skip(idx) {
            R::addassign_carry(dest, &mut n);
            if n.is_zero() {
                return;
            }
        }
        self.push_significant_digit(n);
    }

    /// Multiply every digit by 'n', extending the vector with the final carry
    pub fn mul_value(&mut self, n: R::Base) {
        if n.is_zero() {
            self.clear();
            return;
        }

        let mut carry = Zero::zero();
        for d in self.digits.iter_mut() {
            R::mulassign_carry(d, n, &mut carry);
        }
        while !carry.is_zero() {
            let (hi, lo) = R::split_wide_digit(carry.into());
            self.push_significant_digit(lo);
            carry = hi;
        }
    }

    /// Divide by 'n' in place, returning the remainder
    ///
    /// 'n' must not be zero.
    pub fn divrem_value(&mut self, n: R::Base) -> R::Base {
        use num_traits::AsPrimitive;
        debug_assert!(!n.is_zero());

        let n_wide: R::BaseDouble = n.into();
        let mut rem = R::BaseDouble::zero();
        for d in self.digits.iter_mut().rev() {
            let cur = rem * R::RADIX + (*d).into();
            *d = (cur / n_wide).as_();
            rem = cur % n_wide;
        }
        self.strip_significant_zeros();
        rem.as_()
    }
}

impl<R: RadixType> Clone for DigitVec<R> {
    fn clone(&self) -> Self {
        Self::from_vec(self.digits.clone())
    }
}

impl<R: RadixType> Default for DigitVec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RadixType> PartialEq for DigitVec<R> {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl<R: RadixType> Eq for DigitVec<R> {}

impl<R: RadixType> fmt::Debug for DigitVec<R>
where
    R::Base: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitVec({:?}, {:?})", R::default(), self.digits)
    }
}

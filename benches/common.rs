//! common routines to be included by benches

use decimal_bigint::BigInt;

use std::str::FromStr;


/// Build a random decimal string with exactly `digit_count` digits
pub fn random_decimal_string(rng: &mut oorandom::Rand32, digit_count: usize) -> String {
    let mut s = String::with_capacity(digit_count + 1);
    if rng.rand_u32() % 2 == 0 {
        s.push('-');
    }
    s.push(char::from(b'1' + (rng.rand_u32() % 9) as u8));
    for _ in 1..digit_count {
        s.push(char::from(b'0' + (rng.rand_u32() % 10) as u8));
    }
    s
}

/// Generate vector of random BigInts, each with `digit_count` digits
pub fn random_bigints(seed: u64, count: usize, digit_count: usize) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| random_decimal_string(&mut rng, digit_count))
        .map(|s| BigInt::from_str(&s).unwrap())
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T: Copy> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        self.v[idx]
    }
}

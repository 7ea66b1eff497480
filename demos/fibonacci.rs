extern crate decimal_bigint;
use decimal_bigint::*;

use std::env;
use std::mem;

/// Fibonacci numbers F(n-1) and F(n), by repeated addition
fn fibonacci_pair(n: u32) -> (BigInt, BigInt) {
    let mut prev = BigInt::from(1);
    let mut curr = BigInt::zero();
    for _ in 0..n {
        let next = &prev + &curr;
        prev = mem::replace(&mut curr, next);
    }
    (prev, curr)
}

fn main() {
    let n: u32 = match env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(err) => {
                eprintln!("invalid argument {:?}: {}", arg, err);
                std::process::exit(1);
            }
        },
        None => 2000,
    };

    let (_, fib) = fibonacci_pair(n);
    println!("F({}) = {}", n, fib);
    println!("digits: {}", fib.number_of_digits());

    // F(2k) = F(k) * L(k), where L(k) = F(k-1) + F(k+1)
    if n >= 2 && n % 2 == 0 {
        let k = n / 2;
        let (f_km1, f_k) = fibonacci_pair(k);
        let f_kp1 = &f_km1 + &f_k;
        let lucas = &f_km1 + &f_kp1;
        let product = &f_k * &lucas;

        println!("F({k}) * L({k}) = F({n}): {}", product == fib, k = k, n = n);
        println!("F({}) / F({}) = {}", n, k, &fib / &f_k);
    }
}

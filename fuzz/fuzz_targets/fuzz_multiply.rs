#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str::FromStr;

use num_bigint::BigUint;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Split the input in two and map each half to a digit string,
    // capped at 2000 digits for speed.
    let mid = data.len() / 2;
    let a: String = data[..mid.min(2000)]
        .iter()
        .map(|b| char::from(b'0' + b % 10))
        .collect();
    let b: String = data[mid..(mid + (data.len() - mid).min(2000))]
        .iter()
        .map(|b| char::from(b'0' + b % 10))
        .collect();

    let result = decmul_core::multiply(&a, &b).expect("digit strings always multiply");

    let expected = BigUint::from_str(&a).unwrap() * BigUint::from_str(&b).unwrap();
    assert_eq!(result, expected.to_string(), "{a} * {b} mismatch");
});

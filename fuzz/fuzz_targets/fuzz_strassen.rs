#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::{multiply_naive, Matrix, StrassenMultiplier};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the dimension (capped at 32), second the threshold
    let n = usize::from(data[0] % 33);
    let threshold = usize::from(data[1] % 8);
    let mut values = data[2..].iter().cycle().map(|&b| i32::from(b as i8));

    let mut operand = || {
        let rows = (0..n)
            .map(|_| (0..n).map(|_| values.next().unwrap_or(0)).collect())
            .collect();
        Matrix::from_rows(rows).unwrap()
    };
    let a = operand();
    let b = operand();

    let expected = multiply_naive(&a, &b).unwrap();
    let actual = StrassenMultiplier::new(threshold).multiply(&a, &b).unwrap();
    assert_eq!(actual, expected);
});

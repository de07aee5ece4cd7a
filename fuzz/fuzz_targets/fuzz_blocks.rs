#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::Matrix;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let n = usize::from(data[0] % 17) * 2;
    let mut values = data[1..].iter().cycle().map(|&b| i32::from(b));
    let rows = (0..n)
        .map(|_| (0..n).map(|_| values.next().unwrap_or(0)).collect())
        .collect();
    let m = Matrix::from_rows(rows).unwrap();

    // Even square matrices always split and reassemble
    let quads = m.split().unwrap();
    assert_eq!(quads.assemble().unwrap(), m);
});

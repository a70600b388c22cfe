#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::calculator::Calculator;
use fibdrv_core::fastdoubling::LimbFastDoubling;
use fibdrv_core::options::Options;
use fibdrv_core::reference::reference_fibonacci;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // First 4 bytes as n, capped at 50000 for speed
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 50_000;

    let result = LimbFastDoubling::new()
        .calculate(n, &Options::default())
        .unwrap();
    assert_eq!(result, reference_fibonacci(n).to_string(), "F({n}) mismatch");
});

//! Fuzz harness for comma-separated integer lists

#![no_main]

use libfuzzer_sys::fuzz_target;
use sylva_parse::parse_int_list;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match parse_int_list(input) {
        Ok(values) => {
            let joined = values
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            assert_eq!(parse_int_list(&joined), Ok(values));
        }
        Err(err) => assert!(err.offset() <= input.len()),
    }
});

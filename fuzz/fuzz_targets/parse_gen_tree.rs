//! Fuzz harness for general tree and forest notation (`0(1(5,6,7),2(8),3)`)

#![no_main]

use libfuzzer_sys::fuzz_target;
use sylva_forest::{Forest, render_forest_expression};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(forest) = input.parse::<Forest>() {
        let reparsed: Forest = forest
            .to_string()
            .parse()
            .expect("printed notation must parse");
        assert_eq!(reparsed, forest);
        let _ = render_forest_expression(&forest);
    }
});

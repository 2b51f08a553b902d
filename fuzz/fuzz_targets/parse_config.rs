//! Fuzz harness for configuration files (sylva.yaml / sylva.json)
//!
//! The loader must reject malformed input with an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sylva_config::{ConfigFormat, SylvaConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = SylvaConfig::from_str_with(input, ConfigFormat::Yaml);
    let _ = SylvaConfig::from_str_with(input, ConfigFormat::Json);
});

//! Fuzz harness for binary tree notation (`1(2,3(4,-))`)
//!
//! Any input that parses must print back to notation that parses to the
//! same tree, and the metrics must be computable without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sylva_bintree::BinaryTree;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(tree) = input.parse::<BinaryTree>() {
        let printed = tree.to_string();
        let reparsed: BinaryTree = printed.parse().expect("printed notation must parse");
        assert_eq!(reparsed, tree);
        let metrics = tree.metrics();
        assert_eq!(metrics.lc, metrics.lce + metrics.lci);
    }
});

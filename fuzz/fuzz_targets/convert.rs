#![no_main]

use libfuzzer_sys::fuzz_target;
use recoder::recoder::{convert, Outcome};

fuzz_target!(|data: &[u8]| {
    let dir = tempfile::tempdir().expect("failed to create a temporary directory");
    let source = dir.path().join("input");
    let target = dir.path().join("output.jpg");
    std::fs::write(&source, data).expect("failed to write fuzzer input");

    // arbitrary bytes may fail to decode, but must never panic,
    // and a successful conversion must always produce an RGB JPEG
    if let Ok(Outcome::Converted { .. }) = convert(&source, &target) {
        let output = image::open(&target).expect("converted output must decode");
        assert_eq!(output.color(), image::ColorType::Rgb8);
    }
});

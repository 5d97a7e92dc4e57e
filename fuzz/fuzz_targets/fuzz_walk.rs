#![no_main]
use ber_dump::ber::Encoding;
use ber_dump::WalkConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for encoding in &[Encoding::Ber, Encoding::Der] {
        let config = WalkConfig::default().with_encoding(*encoding);
        let _ = ber_dump::dump_to_string(data, &config);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use vcv_digest::vcv::{VcvClassifier, VcvItems, VcvStreamer, Vocabulary};

fuzz_target!(|data: &[u8]| {
    // Streaming and classification may fail on arbitrary input, but must never panic
    let vocabulary = Vocabulary::builtin();
    let classifier = VcvClassifier::new(&vocabulary);
    let streamer = VcvStreamer::new(Cursor::new(data));

    for item in VcvItems::new(streamer, &classifier).take(100) {
        if item.is_err() {
            break;
        }
    }
});

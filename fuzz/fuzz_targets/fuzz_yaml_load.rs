#![no_main]

use dettect_editor::domain::ports::DocumentCodec;
use dettect_editor::{check_health, YamlDocumentCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Loading, checking and re-saving arbitrary text must never panic
        if let Ok(doc) = YamlDocumentCodec.load(text, None) {
            let _ = check_health(&doc);
            let _ = YamlDocumentCodec.save(&doc);
        }
    }
});

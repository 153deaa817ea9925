#![no_main]

use libfuzzer_sys::fuzz_target;

use backfocus_core::{parse_component_spec, ComponentList};

fuzz_target!(|data: &[u8]| {
    let Ok(spec) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic
    let Ok((name, length)) = parse_component_spec(spec) else {
        return;
    };
    assert!(length.is_finite());

    let mut list = ComponentList::new();
    list.add("Base", 12.5);
    let before = list.total_length();
    let id = list.add(name, length).id.clone();
    list.remove(&id);
    assert_eq!(list.total_length().to_bits(), before.to_bits());
});

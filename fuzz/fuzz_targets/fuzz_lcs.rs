#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufidx::index::suffix_array::SuffixIndex;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    first: &'a [u8],
    second: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    // Keep inputs small; the query is quadratic in the shorter text
    if input.first.len() > 64 || input.second.len() > 64 {
        return;
    }

    let a = SuffixIndex::new(input.first);
    let b = SuffixIndex::new(input.second);
    let common = &a & &b;

    assert_eq!(common, &b & &a);
    if !common.is_empty() {
        assert!(a.contains(common));
        assert!(b.contains(common));
    }
});

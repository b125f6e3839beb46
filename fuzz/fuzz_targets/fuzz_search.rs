#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufidx::index::suffix_array::SuffixIndex;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    // Every enumerated suffix must start with the pattern, in sorted order,
    // and the count must agree with a naive scan
    let index = SuffixIndex::new(input.text);
    let matches: Vec<&[u8]> = index.search(input.pattern).collect();

    assert!(matches.iter().all(|s| s.starts_with(input.pattern)));
    assert!(matches.windows(2).all(|w| w[0] < w[1]));

    let expected = (0..input.text.len())
        .filter(|&i| input.text[i..].starts_with(input.pattern))
        .count();
    assert_eq!(matches.len(), expected);
});

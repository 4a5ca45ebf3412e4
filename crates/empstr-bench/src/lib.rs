//! Input builders shared by the EMP benchmarks.

/// `size` bytes of `fill` followed by a NUL.
#[must_use]
pub fn terminated(fill: u8, size: usize) -> Vec<u8> {
    let mut s = vec![fill; size];
    s.push(0);
    s
}

/// A haystack of `size` bytes whose only match for `needle` sits at the end.
#[must_use]
pub fn haystack_with_tail(size: usize, needle: &[u8]) -> Vec<u8> {
    let mut s = vec![b'a'; size.saturating_sub(needle.len())];
    s.extend_from_slice(needle);
    s.push(0);
    s
}

/// `pad` bytes of whitespace on both sides of `body`, NUL-terminated.
#[must_use]
pub fn padded(body: &[u8], pad: usize) -> Vec<u8> {
    let mut s = Vec::with_capacity(body.len() + 2 * pad + 1);
    s.extend((0..pad).map(|i| [b' ', b'\t', b'\n'][i % 3]));
    s.extend_from_slice(body);
    s.extend((0..pad).map(|i| [b'\n', b' ', b'\t'][i % 3]));
    s.push(0);
    s
}

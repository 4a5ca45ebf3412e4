#![no_main]
use libfuzzer_sys::fuzz_target;

use empstr_core::ctype::{is_space, to_lower};
use empstr_core::string::{
    lstrip, rstrip, strcapitalize, strceq, strcneq, strcstr, streq, strip, strlen, strlwr, strneq,
    strstr, strupr,
};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point between haystack and needle.
    let split = usize::from(data[0]) % data.len();
    let (hay, needle) = data[1..].split_at(split.min(data.len() - 1));

    let h_len = strlen(hay);
    let n_len = strlen(needle);

    if let Some(i) = strstr(hay, needle) {
        assert!(i + n_len <= h_len);
        assert_eq!(&hay[i..i + n_len], &needle[..n_len]);
        assert!(strcstr(hay, needle).is_some_and(|j| j <= i));
    }
    if let Some(i) = strcstr(hay, needle) {
        assert!(i + n_len <= h_len);
        assert!(strcneq(&hay[i..], needle, n_len));
    }

    assert!(streq(hay, hay));
    assert_eq!(streq(hay, needle), streq(needle, hay));
    if streq(hay, needle) {
        assert!(strceq(hay, needle));
    }
    if n_len > 0 && n_len <= h_len {
        assert_eq!(strneq(hay, needle, n_len), hay[..n_len] == needle[..n_len]);
    }

    let mut lower = hay.to_vec();
    strlwr(&mut lower);
    let mut upper = hay.to_vec();
    strupr(&mut upper);
    assert!(strceq(&lower, &upper));
    assert!(lower[..h_len].iter().zip(&hay[..h_len]).all(|(&l, &h)| l == to_lower(h)));

    let mut cap = hay.to_vec();
    strcapitalize(&mut cap);
    assert_eq!(strlen(&cap), h_len);

    let start = lstrip(hay);
    assert!(start <= h_len);
    assert!(hay[..start].iter().all(|&b| is_space(b)));

    let mut r = hay.to_vec();
    let end = rstrip(&mut r);
    assert_eq!(strlen(&r), end);
    assert!(end == 0 || !is_space(r[end - 1]));

    let mut both = hay.to_vec();
    let s = strip(&mut both);
    assert!(s <= strlen(&both));
});

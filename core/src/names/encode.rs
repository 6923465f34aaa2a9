use crate::constants::NAME_SEPARATOR;

/// Concatenate `names` in order, each followed by a NUL byte.
pub fn encode_names<I, S>(names: I) -> Vec<u8>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for name in names {
        let name = name.as_ref();
        debug_assert!(
            !name.as_bytes().contains(&NAME_SEPARATOR),
            "buffer name contains NUL: {:?}",
            name
        );
        out.extend_from_slice(name.as_bytes());
        out.push(NAME_SEPARATOR);
    }
    out
}

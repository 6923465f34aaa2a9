use crate::constants::NAME_SEPARATOR;
use crate::types::BfastError;

/// Split a name buffer into names (zero-copy).
///
/// The terminator after the last name is dropped; an empty buffer holds no
/// names. A final name without terminator is still returned.
pub fn split_names(buf: &[u8]) -> Result<Vec<&str>, BfastError> {
    let body = buf.strip_suffix(&[NAME_SEPARATOR]).unwrap_or(buf);
    if buf.is_empty() {
        return Ok(Vec::new());
    }

    body.split(|&b| b == NAME_SEPARATOR)
        .enumerate()
        .map(|(index, raw)| {
            std::str::from_utf8(raw).map_err(|e| BfastError::InvalidName {
                index,
                valid_up_to: e.valid_up_to(),
            })
        })
        .collect()
}

/// Split a name buffer and require exactly one name per data buffer.
pub fn decode_names(buf: &[u8], data_buffers: usize) -> Result<Vec<&str>, BfastError> {
    let names = split_names(buf)?;
    if names.len() != data_buffers {
        return Err(BfastError::NameCountMismatch {
            names: names.len(),
            buffers: data_buffers,
        });
    }
    Ok(names)
}

//! Range copies out of byte buffers.

use crate::error::{CodecError, Result};

/// Copy `count` bytes of `src` starting at `offset` into a new vector.
///
/// `None` copies everything from `offset` to the end. The result is always a
/// fresh allocation, even when the whole buffer is requested.
///
/// # Errors
/// Returns [`CodecError::OutOfRange`] if the range does not fit in `src`.
pub fn read_bytes(src: &[u8], offset: usize, count: Option<usize>) -> Result<Vec<u8>> {
    if count == Some(0) {
        return Ok(Vec::new());
    }

    let out_of_range = || CodecError::OutOfRange {
        offset,
        count: count.unwrap_or(0),
        len: src.len(),
    };

    let tail = src.get(offset..).ok_or_else(out_of_range)?;
    match count {
        None => Ok(tail.to_vec()),
        Some(n) => tail.get(..n).map(<[u8]>::to_vec).ok_or_else(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_copies_ranges() {
        let data = [1u8, 2, 3, 4, 5];
        assert_eq!(read_bytes(&data, 1, Some(3)).unwrap(), vec![2, 3, 4]);
        assert_eq!(read_bytes(&data, 2, None).unwrap(), vec![3, 4, 5]);
        assert_eq!(read_bytes(&data, 5, None).unwrap(), Vec::<u8>::new());
        assert!(read_bytes(&data, 9, Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let data = [1u8, 2, 3];
        assert!(matches!(
            read_bytes(&data, 2, Some(2)),
            Err(CodecError::OutOfRange {
                offset: 2,
                count: 2,
                len: 3
            })
        ));
        assert!(matches!(
            read_bytes(&data, 4, None),
            Err(CodecError::OutOfRange { .. })
        ));
    }
}

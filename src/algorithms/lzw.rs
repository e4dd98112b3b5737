/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 02/06/2024
License: MIT
*/
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use thiserror::Error as ThisError;

/// Each code is written as exactly this many bytes, big-endian. The fixed
/// width is part of the compressed format and is not configurable.
pub const CODE_BYTES: usize = 2;

/// The dictionary can never hold more than one entry per representable code.
pub const MAX_DICT_ENTRIES: usize = 1 << (8 * CODE_BYTES);

/// Typed failure modes of the compression layer. All failures are surfaced
/// synchronously to the caller; malformed input is never silently truncated.
#[derive(ThisError, Debug, PartialEq)]
pub enum CompressionError {
    #[error("Malformed code stream: {0}")]
    MalformedStream(String),

    #[error("Dictionary underflow: code {code} with only {len} entries defined")]
    DictionaryUnderflow { code: u16, len: usize },

    #[error("Decoded sample count ({found}) does not match the header dimensions ({expected})")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Compression ratio is undefined for an empty code stream")]
    DivideByZero,
}

impl From<CompressionError> for Error {
    fn from(err: CompressionError) -> Error {
        Error::new(ErrorKind::InvalidData, err.to_string())
    }
}

/// Compresses a byte buffer using greedy longest-match LZW with fixed
/// 16-bit codes. The dictionary starts from the 256 single-byte sequences
/// and grows by one entry per emitted code until it is full, after which
/// existing entries remain usable but no new ones are added. An empty
/// input produces an empty output; otherwise the output length is always
/// a multiple of two. Encoding the same input twice yields byte-identical
/// output.
pub fn lzw_encode(data: &[u8]) -> Vec<u8> {
    let mut dictionary: HashMap<Vec<u8>, u16> =
        (0u16..=255u16).map(|i| (vec![i as u8], i)).collect();

    let mut compressed: Vec<u8> = Vec::new();
    let mut w: Vec<u8> = Vec::new();
    for &c in data {
        let mut wc = w.clone();
        wc.push(c);
        if dictionary.contains_key(&wc) {
            w = wc;
        } else {
            // w was matched on a previous pass and must be present.
            compressed.extend_from_slice(&dictionary[&w].to_be_bytes());
            if dictionary.len() < MAX_DICT_ENTRIES {
                let next_code = dictionary.len() as u16;
                dictionary.insert(wc, next_code);
            }
            w.clear();
            w.push(c);
        }
    }

    if !w.is_empty() {
        compressed.extend_from_slice(&dictionary[&w].to_be_bytes());
    }

    compressed
}

/// Decompresses a stream of fixed-width LZW codes, reproducing the input
/// to `lzw_encode` bit-for-bit. The dictionary is rebuilt in lockstep with
/// the one the encoder used: after the i-th code is processed both sides
/// hold exactly the same entries in the same order, including the 65536
/// entry cap. A code equal to the next entry index refers to the sequence
/// the encoder was still forming when it assigned that code, and is
/// reconstructed as the previous sequence extended by its own first byte.
pub fn lzw_decode(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    if data.len() % CODE_BYTES != 0 {
        return Err(CompressionError::MalformedStream(format!(
            "stream length {} is not a multiple of {}",
            data.len(),
            CODE_BYTES
        )));
    }
    if data.is_empty() {
        return Ok(vec![]);
    }

    let mut dictionary: Vec<Vec<u8>> = (0u16..=255u16).map(|i| vec![i as u8]).collect();

    let first = u16::from_be_bytes([data[0], data[1]]);
    if first as usize >= dictionary.len() {
        return Err(CompressionError::DictionaryUnderflow {
            code: first,
            len: dictionary.len(),
        });
    }
    let mut w = dictionary[first as usize].clone();
    let mut decompressed = w.clone();

    for chunk in data[CODE_BYTES..].chunks_exact(CODE_BYTES) {
        let k = u16::from_be_bytes([chunk[0], chunk[1]]);
        let entry = if (k as usize) < dictionary.len() {
            dictionary[k as usize].clone()
        } else if k as usize == dictionary.len() {
            // The encoder assigned this code to w extended by its own
            // first byte, one step before we can see that entry.
            let mut entry = w.clone();
            entry.push(w[0]);
            entry
        } else {
            return Err(CompressionError::DictionaryUnderflow {
                code: k,
                len: dictionary.len(),
            });
        };

        decompressed.extend_from_slice(&entry);

        if dictionary.len() < MAX_DICT_ENTRIES {
            let mut seq = w;
            seq.push(entry[0]);
            dictionary.push(seq);
        }

        w = entry;
    }

    Ok(decompressed)
}

#[cfg(test)]
mod test {
    use super::{lzw_decode, lzw_encode, CompressionError, CODE_BYTES};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_input() {
        assert!(lzw_encode(&[]).is_empty());
        assert_eq!(lzw_decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_byte() {
        let compressed = lzw_encode(&[0x07]);
        assert_eq!(compressed, vec![0x00, 0x07]);
        assert_eq!(lzw_decode(&compressed).unwrap(), vec![0x07]);
    }

    #[test]
    fn test_run_of_four() {
        // 'A' (65), then "AA" via the code assigned at 256, then the
        // trailing 'A'. The second code arrives before the decoder has
        // seen entry 256, exercising the self-referential case.
        let compressed = lzw_encode(b"AAAA");
        assert_eq!(compressed, vec![0x00, 0x41, 0x01, 0x00, 0x00, 0x41]);
        assert_eq!(lzw_decode(&compressed).unwrap(), b"AAAA".to_vec());
    }

    #[test]
    fn test_text_round_trip() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT".to_vec();
        let compressed = lzw_encode(&data);
        assert_eq!(compressed.len() % CODE_BYTES, 0);
        assert!(compressed.len() < data.len() * CODE_BYTES);
        assert_eq!(lzw_decode(&compressed).unwrap(), data);
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<u8> = (0u16..2048).map(|i| (i % 251) as u8).collect();
        assert_eq!(lzw_encode(&data), lzw_encode(&data));
    }

    #[test]
    fn test_long_uniform_run() {
        let data = vec![7u8; 10_000];
        let compressed = lzw_encode(&data);
        assert!(compressed.len() < data.len());
        assert_eq!(lzw_decode(&compressed).unwrap(), data);
    }

    #[test]
    fn test_random_round_trip_fills_dictionary() {
        // 400 kB of random bytes pushes the dictionary to its 65536
        // entry cap on both sides of the round trip.
        let mut rng = SmallRng::seed_from_u64(42);
        let data: Vec<u8> = (0..400_000).map(|_| rng.gen::<u8>()).collect();
        let compressed = lzw_encode(&data);
        assert_eq!(compressed.len() % CODE_BYTES, 0);
        assert_eq!(lzw_decode(&compressed).unwrap(), data);
    }

    #[test]
    fn test_odd_length_stream() {
        match lzw_decode(&[0x00, 0x41, 0x01]) {
            Err(CompressionError::MalformedStream(_)) => {}
            other => panic!("expected MalformedStream, got {:?}", other),
        }
    }

    #[test]
    fn test_first_code_out_of_range() {
        match lzw_decode(&[0x01, 0x05]) {
            Err(CompressionError::DictionaryUnderflow { code: 261, len: 256 }) => {}
            other => panic!("expected DictionaryUnderflow, got {:?}", other),
        }
    }

    #[test]
    fn test_code_beyond_next_assignable() {
        // After one code the next assignable entry is 256; 300 is corrupt.
        match lzw_decode(&[0x00, 0x41, 0x01, 0x2C]) {
            Err(CompressionError::DictionaryUnderflow { code: 300, .. }) => {}
            other => panic!("expected DictionaryUnderflow, got {:?}", other),
        }
    }
}

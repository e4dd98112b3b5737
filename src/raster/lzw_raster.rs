/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 22/03/2024
Last Modified: 02/06/2024
License: MIT
*/
use super::GrayscaleImage;
use crate::algorithms::{lzw_decode, lzw_encode, CompressionError};
use crate::io_utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::fs::File;
use std::io::{BufReader, BufWriter, Error};

/// The compressed format opens with the row count and the column count,
/// each an unsigned 4-byte big-endian integer, followed by the LZW code
/// stream. A compressed buffer is therefore self-describing.
pub const HEADER_BYTES: usize = 8;

/// Compresses an image into a self-describing byte buffer: the 8-byte
/// dimensions header followed by the LZW code stream over the row-major
/// sample sequence.
pub fn compress_image(image: &GrayscaleImage) -> Vec<u8> {
    let code_stream = lzw_encode(&image.to_row_major());
    let mut compressed: Vec<u8> = Vec::with_capacity(HEADER_BYTES + code_stream.len());
    compressed.extend_from_slice(&(image.rows() as u32).to_be_bytes());
    compressed.extend_from_slice(&(image.columns() as u32).to_be_bytes());
    compressed.extend_from_slice(&code_stream);
    compressed
}

/// Reverses `compress_image`, reconstructing the image from a compressed
/// buffer. Fails with `MalformedStream` when the buffer is shorter than
/// the header, or when the header declares samples but the code stream is
/// empty; fails with `SizeMismatch` when the decoded sample count differs
/// from the header dimensions.
pub fn decompress_image(data: &[u8]) -> Result<GrayscaleImage, CompressionError> {
    if data.len() < HEADER_BYTES {
        return Err(CompressionError::MalformedStream(format!(
            "compressed buffer holds {} bytes, shorter than the {}-byte header",
            data.len(),
            HEADER_BYTES
        )));
    }
    let rows = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
    let columns = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    assemble_image(rows, columns, &data[HEADER_BYTES..])
}

/// Returns the ratio of raw sample count to compressed payload length,
/// excluding the header from the denominator. Highly repetitive images
/// give ratios above 1.0; incompressible ones may fall below it.
pub fn compression_ratio(image: &GrayscaleImage) -> Result<f64, CompressionError> {
    let payload_len = compress_image(image).len() - HEADER_BYTES;
    if payload_len == 0 {
        return Err(CompressionError::DivideByZero);
    }
    Ok(image.num_samples() as f64 / payload_len as f64)
}

/// Reads an image from an `.lzw` file.
pub fn read_lzw(file_name: &str) -> Result<GrayscaleImage, Error> {
    let f = File::open(file_name)?;
    let mut th = ByteOrderReader::new(BufReader::new(f), Endianness::BigEndian)?;
    if th.len() < HEADER_BYTES {
        return Err(CompressionError::MalformedStream(format!(
            "{} holds {} bytes, shorter than the {}-byte header",
            file_name,
            th.len(),
            HEADER_BYTES
        ))
        .into());
    }
    let rows = th.read_u32()?;
    let columns = th.read_u32()?;
    let mut code_stream = vec![0u8; th.len() - HEADER_BYTES];
    th.read_exact(&mut code_stream)?;

    let mut image = assemble_image(rows, columns, &code_stream)?;
    image.file_name = file_name.to_string();
    Ok(image)
}

/// Writes an image to an `.lzw` file.
pub fn write_lzw(image: &GrayscaleImage, file_name: &str) -> Result<(), Error> {
    let f = File::create(file_name)?;
    let mut writer = ByteOrderWriter::new(BufWriter::new(f), Endianness::BigEndian);
    writer.write_u32(image.rows() as u32)?;
    writer.write_u32(image.columns() as u32)?;
    writer.write_bytes(&lzw_encode(&image.to_row_major()))?;
    writer.flush()?;
    Ok(())
}

fn assemble_image(
    rows: u32,
    columns: u32,
    code_stream: &[u8],
) -> Result<GrayscaleImage, CompressionError> {
    let expected = rows as usize * columns as usize;
    if code_stream.is_empty() && expected > 0 {
        return Err(CompressionError::MalformedStream(format!(
            "the header declares {} samples but the code stream is empty",
            expected
        )));
    }
    let samples = lzw_decode(code_stream)?;
    if samples.len() != expected {
        return Err(CompressionError::SizeMismatch {
            expected,
            found: samples.len(),
        });
    }
    let mut image = GrayscaleImage::new(rows as isize, columns as isize)
        .map_err(|e| CompressionError::MalformedStream(e.to_string()))?;
    if columns > 0 {
        for (row, chunk) in samples.chunks(columns as usize).enumerate() {
            image.set_row_data(row as isize, chunk);
        }
    }
    Ok(image)
}

#[cfg(test)]
mod test {
    use super::{compress_image, compression_ratio, decompress_image, read_lzw, write_lzw, HEADER_BYTES};
    use crate::algorithms::CompressionError;
    use crate::raster::GrayscaleImage;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn gradient_image(rows: isize, columns: isize) -> GrayscaleImage {
        let mut image = GrayscaleImage::new(rows, columns).unwrap();
        for row in 0..rows {
            for col in 0..columns {
                image.set_value(row, col, ((row * columns + col) % 256) as u8);
            }
        }
        image
    }

    #[test]
    fn test_header_layout() {
        let image = GrayscaleImage::new(2, 3).unwrap();
        let compressed = compress_image(&image);
        assert_eq!(&compressed[0..HEADER_BYTES], &[0, 0, 0, 2, 0, 0, 0, 3]);
        assert_eq!((compressed.len() - HEADER_BYTES) % 2, 0);
    }

    #[test]
    fn test_framed_round_trip() {
        let image = gradient_image(5, 7);
        let restored = decompress_image(&compress_image(&image)).unwrap();
        assert_eq!(restored.rows(), 5);
        assert_eq!(restored.columns(), 7);
        assert_eq!(restored.to_row_major(), image.to_row_major());
    }

    #[test]
    fn test_empty_image() {
        let image = GrayscaleImage::new(0, 0).unwrap();
        let compressed = compress_image(&image);
        assert_eq!(compressed.len(), HEADER_BYTES);
        let restored = decompress_image(&compressed).unwrap();
        assert_eq!(restored.rows(), 0);
        assert_eq!(restored.columns(), 0);
        assert_eq!(compression_ratio(&image), Err(CompressionError::DivideByZero));
    }

    #[test]
    fn test_short_buffer() {
        match decompress_image(&[0, 0, 0]) {
            Err(CompressionError::MalformedStream(_)) => {}
            other => panic!("expected MalformedStream, got {:?}", other),
        }
    }

    #[test]
    fn test_declared_samples_with_empty_stream() {
        match decompress_image(&[0, 0, 0, 1, 0, 0, 0, 1]) {
            Err(CompressionError::MalformedStream(_)) => {}
            other => panic!("expected MalformedStream, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_header_dimensions() {
        let mut compressed = compress_image(&gradient_image(4, 4));
        compressed[3] += 1; // now declares 5 rows
        match decompress_image(&compressed) {
            Err(CompressionError::SizeMismatch { expected: 20, found: 16 }) => {}
            other => panic!("expected SizeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_ratio_repetitive_vs_random() {
        let mut uniform = GrayscaleImage::new(64, 64).unwrap();
        uniform.clear(42);
        assert!(compression_ratio(&uniform).unwrap() > 1.0);

        let mut rng = SmallRng::seed_from_u64(7);
        let mut noisy = GrayscaleImage::new(64, 64).unwrap();
        for row in 0..64 {
            for col in 0..64 {
                noisy.set_value(row, col, rng.gen::<u8>());
            }
        }
        // incompressible data may give a ratio below 1.0 but must not fail
        assert!(compression_ratio(&noisy).unwrap().is_finite());
    }

    #[test]
    fn test_file_round_trip() {
        let image = gradient_image(9, 6);
        let file_name = std::env::temp_dir()
            .join("gray_tools_lzw_round_trip.lzw")
            .to_str()
            .unwrap()
            .to_string();
        write_lzw(&image, &file_name).unwrap();
        let restored = read_lzw(&file_name).unwrap();
        assert_eq!(restored.rows(), 9);
        assert_eq!(restored.columns(), 6);
        assert_eq!(restored.to_row_major(), image.to_row_major());
        let _ = std::fs::remove_file(&file_name);
    }
}

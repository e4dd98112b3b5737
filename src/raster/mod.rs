/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 02/06/2024
License: MIT
*/

// private sub-modules defined in other files
mod lzw_raster;
mod pgm_raster;

pub use self::lzw_raster::compress_image;
pub use self::lzw_raster::compression_ratio;
pub use self::lzw_raster::decompress_image;
pub use self::lzw_raster::read_lzw;
pub use self::lzw_raster::write_lzw;
pub use self::pgm_raster::read_pgm;
pub use self::pgm_raster::write_pgm;

use crate::structures::Array2D;
use std::io::{Error, ErrorKind};

/// GrayscaleImage is an in-memory raster of single-byte samples (0-255)
/// stored in row-major order. Images can be read from and written to
/// netpbm files (`.pgm`, and `.ppm` with an on-read grayscale conversion)
/// as well as the LZW-compressed `.lzw` format; the file format is
/// determined by the file extension.
///
/// Examples:
///
/// ```ignore
/// // Read an existing image file
/// let input = GrayscaleImage::from_file(&input_file)?;
///
/// // Write it out in another supported format.
/// input.save(&output_file)?;
/// ```
#[derive(Clone, Debug)]
pub struct GrayscaleImage {
    pub file_name: String,
    data: Array2D<u8>,
}

impl GrayscaleImage {
    /// Creates a new image of the specified dimensions with every sample
    /// initialized to zero.
    pub fn new(rows: isize, columns: isize) -> Result<GrayscaleImage, Error> {
        Ok(GrayscaleImage {
            file_name: String::new(),
            data: Array2D::new(rows, columns, 0u8, 0u8)?,
        })
    }

    /// Reads an image from a file, with the format determined by the
    /// file extension.
    pub fn from_file(file_name: &str) -> Result<GrayscaleImage, Error> {
        match get_file_extension(file_name).as_str() {
            "pgm" | "ppm" => read_pgm(file_name),
            "lzw" => read_lzw(file_name),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Unrecognized raster file extension: {}", file_name),
            )),
        }
    }

    /// Writes the image to a file, with the format determined by the
    /// file extension.
    pub fn save(&self, file_name: &str) -> Result<(), Error> {
        match get_file_extension(file_name).as_str() {
            "pgm" => write_pgm(self, file_name),
            "lzw" => write_lzw(self, file_name),
            _ => Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Unrecognized raster file extension: {}", file_name),
            )),
        }
    }

    pub fn rows(&self) -> isize {
        self.data.rows
    }

    pub fn columns(&self) -> isize {
        self.data.columns
    }

    pub fn get_value(&self, row: isize, column: isize) -> u8 {
        self.data.get_value(row, column)
    }

    pub fn set_value(&mut self, row: isize, column: isize, value: u8) {
        self.data.set_value(row, column, value);
    }

    pub fn set_row_data(&mut self, row: isize, values: &[u8]) {
        self.data.set_row_data(row, values);
    }

    pub fn get_row_data(&self, row: isize) -> Vec<u8> {
        self.data.get_row_data(row)
    }

    /// Sets every sample in the image to `value`.
    pub fn clear(&mut self, value: u8) {
        self.data.reinitialize(value);
    }

    pub fn num_samples(&self) -> usize {
        self.data.num_cells()
    }

    /// Flattens the image into a row-major sample sequence.
    pub fn to_row_major(&self) -> Vec<u8> {
        let mut samples: Vec<u8> = Vec::with_capacity(self.num_samples());
        for row in 0..self.rows() {
            samples.extend_from_slice(&self.data.get_row_data(row));
        }
        samples
    }
}

fn get_file_extension(file_name: &str) -> String {
    match file_name.rsplit('.').next() {
        Some(ext) if ext.len() < file_name.len() => ext.to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::GrayscaleImage;

    #[test]
    fn test_row_major_order() {
        let mut image = GrayscaleImage::new(2, 3).unwrap();
        image.set_row_data(0, &[1, 2, 3]);
        image.set_row_data(1, &[4, 5, 6]);
        assert_eq!(image.to_row_major(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_clear() {
        let mut image = GrayscaleImage::new(2, 2).unwrap();
        image.clear(128);
        assert_eq!(image.to_row_major(), vec![128; 4]);
    }

    #[test]
    fn test_unrecognized_extension() {
        assert!(GrayscaleImage::from_file("image.tif").is_err());
    }
}

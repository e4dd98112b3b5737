/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 22/03/2024
Last Modified: 02/06/2024
License: MIT
*/
use super::GrayscaleImage;
use crate::io_utils::{ByteOrderReader, ByteOrderWriter, Endianness};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter, Error, ErrorKind};

/// Reads a netpbm image file. Binary (`P5`) and ASCII (`P2`) graymaps are
/// read directly; binary pixmaps (`P6`) are converted to grayscale using
/// the 0.299/0.587/0.114 luma weights. Only 8-bit samples (maxval of at
/// most 255) are supported.
pub fn read_pgm(file_name: &str) -> Result<GrayscaleImage, Error> {
    let f = File::open(file_name)?;
    let mut th = ByteOrderReader::new(BufReader::new(f), Endianness::BigEndian)?;

    let magic = format!(
        "{}{}",
        th.read_u8()? as char,
        th.read_u8()? as char
    );
    if magic != "P2" && magic != "P5" && magic != "P6" {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!("{} is not a supported netpbm file (magic number {})", file_name, magic),
        ));
    }

    let columns = read_header_value(&mut th)?;
    let rows = read_header_value(&mut th)?;
    let maxval = read_header_value(&mut th)?;
    if maxval < 1 || maxval > 255 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "Only 8-bit netpbm samples are supported.",
        ));
    }

    let mut image = GrayscaleImage::new(rows, columns)?;
    image.file_name = file_name.to_string();
    match magic.as_str() {
        "P5" => {
            let mut values = vec![0u8; columns as usize];
            for row in 0..rows {
                th.read_exact(&mut values)?;
                image.set_row_data(row, &values);
            }
        }
        "P6" => {
            let mut values = vec![0u8; 3 * columns as usize];
            for row in 0..rows {
                th.read_exact(&mut values)?;
                for col in 0..columns as usize {
                    let red = values[3 * col] as f64;
                    let green = values[3 * col + 1] as f64;
                    let blue = values[3 * col + 2] as f64;
                    let gray = (0.299f64 * red + 0.587f64 * green + 0.114f64 * blue).round();
                    image.set_value(row, col as isize, gray as u8);
                }
            }
        }
        _ => {
            // P2, one ASCII token per sample
            for row in 0..rows {
                for col in 0..columns {
                    image.set_value(row, col, read_header_value(&mut th)? as u8);
                }
            }
        }
    }

    Ok(image)
}

/// Writes the image as a binary (`P5`) graymap.
pub fn write_pgm(image: &GrayscaleImage, file_name: &str) -> Result<(), Error> {
    let f = File::create(file_name)?;
    let mut writer = ByteOrderWriter::new(BufWriter::new(f), Endianness::BigEndian);
    let header = format!("P5\n{} {}\n255\n", image.columns(), image.rows());
    writer.write_bytes(header.as_bytes())?;
    for row in 0..image.rows() {
        writer.write_bytes(&image.get_row_data(row))?;
    }
    writer.flush()?;
    Ok(())
}

// Reads the next whitespace-delimited unsigned value, skipping `#`
// comment lines. The terminating whitespace byte is consumed, which for
// the maxval field leaves the reader positioned at the raster data.
fn read_header_value<R: Read + Seek>(th: &mut ByteOrderReader<R>) -> Result<isize, Error> {
    let mut token = String::new();
    loop {
        let c = th.read_u8()? as char;
        if c == '#' {
            loop {
                if th.read_u8()? as char == '\n' {
                    break;
                }
            }
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                break;
            }
        } else {
            token.push(c);
        }
    }
    token.parse::<isize>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Invalid value '{}' in netpbm header.", token),
        )
    })
}

#[cfg(test)]
mod test {
    use super::{read_pgm, write_pgm};
    use crate::raster::GrayscaleImage;
    use std::io::Write;

    fn temp_file(name: &str) -> String {
        std::env::temp_dir().join(name).to_str().unwrap().to_string()
    }

    #[test]
    fn test_p5_round_trip() {
        let mut image = GrayscaleImage::new(3, 4).unwrap();
        for row in 0..3 {
            for col in 0..4 {
                image.set_value(row, col, (10 * row + col) as u8);
            }
        }
        let file_name = temp_file("gray_tools_p5_round_trip.pgm");
        write_pgm(&image, &file_name).unwrap();
        let restored = read_pgm(&file_name).unwrap();
        assert_eq!(restored.rows(), 3);
        assert_eq!(restored.columns(), 4);
        assert_eq!(restored.to_row_major(), image.to_row_major());
        let _ = std::fs::remove_file(&file_name);
    }

    #[test]
    fn test_p2_with_comments() {
        let file_name = temp_file("gray_tools_ascii.pgm");
        let mut f = std::fs::File::create(&file_name).unwrap();
        f.write_all(b"P2\n# a comment line\n3 2\n255\n0 128 255\n1 2 3\n")
            .unwrap();
        drop(f);
        let image = read_pgm(&file_name).unwrap();
        assert_eq!(image.rows(), 2);
        assert_eq!(image.columns(), 3);
        assert_eq!(image.to_row_major(), vec![0, 128, 255, 1, 2, 3]);
        let _ = std::fs::remove_file(&file_name);
    }

    #[test]
    fn test_p6_gray_conversion() {
        let file_name = temp_file("gray_tools_color.ppm");
        let mut f = std::fs::File::create(&file_name).unwrap();
        // one white pixel and one pure-red pixel
        f.write_all(b"P6\n2 1\n255\n").unwrap();
        f.write_all(&[255, 255, 255, 255, 0, 0]).unwrap();
        drop(f);
        let image = read_pgm(&file_name).unwrap();
        assert_eq!(image.get_value(0, 0), 255);
        assert_eq!(image.get_value(0, 1), 76); // 0.299 * 255, rounded
        let _ = std::fs::remove_file(&file_name);
    }

    #[test]
    fn test_rejects_non_netpbm() {
        let file_name = temp_file("gray_tools_not_a_pgm.pgm");
        std::fs::write(&file_name, b"GIF89a").unwrap();
        assert!(read_pgm(&file_name).is_err());
        let _ = std::fs::remove_file(&file_name);
    }
}

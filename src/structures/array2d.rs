//////////////////////////////////////////////
// A generic 2-dimensional array structure  //
//////////////////////////////////////////////

use std::io::Error;
use std::io::ErrorKind;

/// A simple in-memory 2-D data structure stored in row-major order.
/// Cell values can be any type implementing the Copy trait. Out-of-range
/// reads return the `nodata` value rather than panicking.
///
/// Example:
///
/// ```ignore
/// let rows = 100;
/// let columns = 500;
/// let initial_value = 0u8;
/// let nodata_value = 0u8;
/// let mut x: Array2D<u8> = Array2D::new(rows, columns, initial_value, nodata_value)?;
/// let cell_val = x.get_value(50, 100);
/// x.set_value(50, 100, 255u8);
/// ```
#[derive(Clone, Debug)]
pub struct Array2D<T: Copy> {
    pub columns: isize,
    pub rows: isize,
    data: Vec<T>,
    pub nodata: T,
}

impl<T> Array2D<T>
where
    T: Copy,
{
    pub fn new(rows: isize, columns: isize, initial_value: T, nodata: T) -> Result<Array2D<T>, Error> {
        if rows < 0 || columns < 0 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                "Only non-negative rows and columns values accepted.",
            ));
        }
        let array = Array2D {
            columns,
            rows,
            nodata,
            data: vec![initial_value; (rows * columns) as usize],
        };
        Ok(array)
    }

    pub fn set_value(&mut self, row: isize, column: isize, value: T) {
        if column >= 0 && row >= 0 {
            if column < self.columns && row < self.rows {
                self.data[(row * self.columns + column) as usize] = value;
            }
        }
    }

    pub fn get_value(&self, row: isize, column: isize) -> T {
        if row < 0 || column < 0 {
            return self.nodata;
        }
        if row >= self.rows || column >= self.columns {
            return self.nodata;
        }
        self.data[(row * self.columns + column) as usize]
    }

    pub fn set_row_data(&mut self, row: isize, values: &[T]) {
        for column in 0..values.len() as isize {
            if row >= 0 {
                if column < self.columns && row < self.rows {
                    self.data[(row * self.columns + column) as usize] = values[column as usize];
                }
            }
        }
    }

    pub fn get_row_data(&self, row: isize) -> Vec<T> {
        let columns = self.columns as usize;
        let mut values: Vec<T> = vec![self.nodata; columns];
        if row >= 0 && row < self.rows {
            for column in 0..values.len() {
                values[column] = self.data[row as usize * columns + column];
            }
        }
        values
    }

    /// Sets every cell in the array to `value`.
    pub fn reinitialize(&mut self, value: T) {
        for cell in self.data.iter_mut() {
            *cell = value;
        }
    }

    pub fn num_cells(&self) -> usize {
        (self.rows * self.columns) as usize
    }
}

#[cfg(test)]
mod test {
    use super::Array2D;

    #[test]
    fn test_get_set() {
        let mut a: Array2D<u8> = Array2D::new(3, 4, 0u8, 0u8).unwrap();
        a.set_value(1, 2, 99);
        assert_eq!(a.get_value(1, 2), 99);
        assert_eq!(a.get_value(0, 0), 0);
        // out-of-range reads return nodata
        assert_eq!(a.get_value(-1, 0), 0);
        assert_eq!(a.get_value(3, 0), 0);
    }

    #[test]
    fn test_row_data() {
        let mut a: Array2D<u8> = Array2D::new(2, 3, 0u8, 0u8).unwrap();
        a.set_row_data(1, &[5, 6, 7]);
        assert_eq!(a.get_row_data(1), vec![5, 6, 7]);
        assert_eq!(a.get_row_data(0), vec![0, 0, 0]);
    }

    #[test]
    fn test_negative_dimensions() {
        assert!(Array2D::new(-1, 3, 0u8, 0u8).is_err());
    }
}

/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 02/06/2024
License: MIT
*/
pub mod algorithms;
pub mod io_utils;
pub mod raster;
pub mod structures;
pub mod tools;

#[macro_use]
extern crate serde_derive;

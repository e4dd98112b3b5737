/*
This tool is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 29/03/2024
Last Modified: 02/06/2024
License: MIT
*/
use super::{GrayTool, ParameterFileType, ParameterType, ToolParameter};
use crate::io_utils::get_formatted_elapsed_time;
use crate::raster::{compression_ratio, write_lzw, GrayscaleImage};
use std::env;
use std::io::{Error, ErrorKind};
use std::path;
use std::time::Instant;

/// This tool compresses a grayscale image (`--input`) into a
/// self-describing LZW-compressed file (`--output`). The compressed file
/// opens with the image dimensions, each stored as a 4-byte big-endian
/// integer, followed by a stream of fixed-width 16-bit codes over the
/// row-major samples. In verbose mode the achieved compression ratio is
/// reported.
pub struct LzwCompress {
    name: String,
    description: String,
    toolbox: String,
    parameters: Vec<ToolParameter>,
    example_usage: String,
}

impl LzwCompress {
    pub fn new() -> LzwCompress {
        // public constructor
        let name = "LzwCompress".to_string();
        let toolbox = "Compression Tools".to_string();
        let description = "Compresses a grayscale image into an LZW-coded file.".to_string();

        let mut parameters = vec![];
        parameters.push(ToolParameter {
            name: "Input File".to_owned(),
            flags: vec!["-i".to_owned(), "--input".to_owned()],
            description: "Input grayscale image file.".to_owned(),
            parameter_type: ParameterType::ExistingFile(ParameterFileType::Raster),
            default_value: None,
            optional: false,
        });

        parameters.push(ToolParameter {
            name: "Output File".to_owned(),
            flags: vec!["-o".to_owned(), "--output".to_owned()],
            description: "Output compressed file.".to_owned(),
            parameter_type: ParameterType::NewFile(ParameterFileType::Compressed),
            default_value: None,
            optional: false,
        });

        let sep: String = path::MAIN_SEPARATOR.to_string();
        let e = format!("{}", env::current_exe().unwrap().display());
        let p = format!("{}", env::current_dir().unwrap().display());
        let mut short_exe = e
            .replace(&p, "")
            .replace(".exe", "")
            .replace(".", "")
            .replace(&sep, "");
        if e.contains(".exe") {
            short_exe += ".exe";
        }
        let usage = format!(
            ">>.*{0} -r={1} -v --wd=\"*path*to*data*\" --input=image.pgm -o=image.lzw",
            short_exe, name
        )
        .replace("*", &sep);

        LzwCompress {
            name,
            description,
            toolbox,
            parameters,
            example_usage: usage,
        }
    }
}

impl GrayTool for LzwCompress {
    fn get_source_file(&self) -> String {
        String::from(file!())
    }

    fn get_tool_name(&self) -> String {
        self.name.clone()
    }

    fn get_tool_description(&self) -> String {
        self.description.clone()
    }

    fn get_tool_parameters(&self) -> String {
        match serde_json::to_string(&self.parameters) {
            Ok(json_str) => format!("{{\"parameters\":{}}}", json_str),
            Err(err) => format!("{:?}", err),
        }
    }

    fn get_example_usage(&self) -> String {
        self.example_usage.clone()
    }

    fn get_toolbox(&self) -> String {
        self.toolbox.clone()
    }

    fn run<'a>(
        &self,
        args: Vec<String>,
        working_directory: &'a str,
        verbose: bool,
    ) -> Result<(), Error> {
        let mut input_file = String::new();
        let mut output_file = String::new();

        if args.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Tool run with no parameters.",
            ));
        }
        for i in 0..args.len() {
            let mut arg = args[i].replace("\"", "");
            arg = arg.replace("\'", "");
            let cmd = arg.split("="); // in case an equals sign was used
            let vec = cmd.collect::<Vec<&str>>();
            let mut keyval = false;
            if vec.len() > 1 {
                keyval = true;
            }
            if vec[0].to_lowercase() == "-i" || vec[0].to_lowercase() == "--input" {
                if keyval {
                    input_file = vec[1].to_string();
                } else {
                    input_file = args[i + 1].to_string();
                }
            } else if vec[0].to_lowercase() == "-o" || vec[0].to_lowercase() == "--output" {
                if keyval {
                    output_file = vec[1].to_string();
                } else {
                    output_file = args[i + 1].to_string();
                }
            }
        }

        if verbose {
            println!("***************{}", "*".repeat(self.get_tool_name().len()));
            println!("* Welcome to {} *", self.get_tool_name());
            println!("***************{}", "*".repeat(self.get_tool_name().len()));
        }

        if output_file.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Output file not specified.",
            ));
        }

        let sep: String = path::MAIN_SEPARATOR.to_string();

        if !input_file.contains(&sep) && !input_file.contains("/") {
            input_file = format!("{}{}", working_directory, input_file);
        }
        if !output_file.contains(&sep) && !output_file.contains("/") {
            output_file = format!("{}{}", working_directory, output_file);
        }

        if verbose {
            println!("Reading data...")
        };
        let input = GrayscaleImage::from_file(&input_file)?;

        let start = Instant::now();

        if verbose {
            println!("Compressing image...")
        };
        write_lzw(&input, &output_file)?;

        let elapsed_time = get_formatted_elapsed_time(start);

        if verbose {
            if let Ok(ratio) = compression_ratio(&input) {
                println!("Compression ratio: {:.3}", ratio);
            }
            println!("Output file written");
            println!(
                "{}",
                &format!("Elapsed Time (excluding I/O): {}", elapsed_time)
            );
        }

        Ok(())
    }
}

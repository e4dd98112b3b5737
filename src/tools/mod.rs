/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 29/03/2024
Last Modified: 02/06/2024
License: MIT
*/

// private sub-modules defined in other files
mod lzw_compress;
mod lzw_compression_ratio;
mod lzw_decompress;

pub use self::lzw_compress::LzwCompress;
pub use self::lzw_compression_ratio::LzwCompressionRatio;
pub use self::lzw_decompress::LzwDecompress;

use crate::io_utils::wrapped_print;
use std::io::{Error, ErrorKind};

#[derive(Default)]
pub struct ToolManager {
    pub working_dir: String,
    pub verbose: bool,
    tool_names: Vec<String>,
}

impl ToolManager {
    pub fn new<'a>(
        working_directory: &'a str,
        verbose_mode: &'a bool,
    ) -> Result<ToolManager, Error> {
        let mut tool_names = vec![];
        tool_names.push("LzwCompress".to_string());
        tool_names.push("LzwCompressionRatio".to_string());
        tool_names.push("LzwDecompress".to_string());

        let tm = ToolManager {
            working_dir: working_directory.to_string(),
            verbose: *verbose_mode,
            tool_names,
        };
        Ok(tm)
    }

    fn get_tool(&self, tool_name: &str) -> Option<Box<dyn GrayTool + 'static>> {
        match tool_name.to_lowercase().replace("_", "").as_ref() {
            "lzwcompress" => Some(Box::new(LzwCompress::new())),
            "lzwcompressionratio" => Some(Box::new(LzwCompressionRatio::new())),
            "lzwdecompress" => Some(Box::new(LzwDecompress::new())),
            _ => None,
        }
    }

    pub fn run_tool(&self, tool_name: String, args: Vec<String>) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => tool.run(args, &self.working_dir, self.verbose),
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn tool_help(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                println!("{}", get_help(tool));
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn print_tool_parameters(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                println!("{}", tool.get_tool_parameters());
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn toolbox(&self, tool_name: String) -> Result<(), Error> {
        match self.get_tool(tool_name.as_ref()) {
            Some(tool) => {
                println!("{}", tool.get_toolbox());
                Ok(())
            }
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("Unrecognized tool name {}.", tool_name),
            )),
        }
    }

    pub fn list_tools(&self) {
        let mut tool_details: Vec<(String, String)> = Vec::new();

        for val in &self.tool_names {
            let tool = self
                .get_tool(val)
                .unwrap_or_else(|| panic!("Unrecognized tool name {}.", val));
            tool_details.push(get_name_and_description(tool));
        }

        tool_details.sort();

        println!("All {} Available Tools:", tool_details.len());
        for detail in &tool_details {
            println!("{}:", detail.0);
            wrapped_print(&detail.1, 70);
            println!();
        }
    }

    pub fn list_tools_with_keywords(&self, keywords: Vec<String>) {
        let mut tool_details: Vec<(String, String)> = Vec::new();
        for val in &self.tool_names {
            let tool = self
                .get_tool(val)
                .unwrap_or_else(|| panic!("Unrecognized tool name {}.", val));
            let toolbox = tool.get_toolbox();
            let (nm, des) = get_name_and_description(tool);
            for kw in &keywords {
                if nm.to_lowercase().contains(&(kw.to_lowercase()))
                    || des.to_lowercase().contains(&(kw.to_lowercase()))
                    || toolbox.to_lowercase().contains(&(kw.to_lowercase()))
                {
                    tool_details.push((nm.clone(), des.clone()));
                    break;
                }
            }
        }

        tool_details.sort();

        println!("All {} Tools containing keywords:", tool_details.len());
        for detail in &tool_details {
            println!("{}:", detail.0);
            wrapped_print(&detail.1, 70);
            println!();
        }
    }
}

pub trait GrayTool {
    fn get_tool_name(&self) -> String;
    fn get_tool_description(&self) -> String;
    fn get_tool_parameters(&self) -> String;
    fn get_example_usage(&self) -> String;
    fn get_toolbox(&self) -> String;
    fn get_source_file(&self) -> String;
    fn run<'a>(
        &self,
        args: Vec<String>,
        working_directory: &'a str,
        verbose: bool,
    ) -> Result<(), Error>;
}

fn get_help<'a>(wt: Box<dyn GrayTool + 'a>) -> String {
    let tool_name = wt.get_tool_name();
    let description = wt.get_tool_description();
    let parameters = wt.get_tool_parameters();
    let toolbox = wt.get_toolbox();
    let o: serde_json::Value = match serde_json::from_str(&parameters) {
        Ok(v) => v,
        Err(err) => return format!("{:?}", err),
    };
    let mut p = String::new();
    p.push_str("Flag               Description\n");
    p.push_str("-----------------  -----------\n");
    if let Some(a) = o["parameters"].as_array() {
        for d in a {
            let mut s = String::new();
            if let Some(flags) = d["flags"].as_array() {
                for f in flags {
                    s.push_str(&format!("{}, ", f.as_str().unwrap_or("")));
                }
            }
            p.push_str(&format!(
                "{:width$} {}\n",
                s.trim().trim_matches(','),
                d["description"].as_str().unwrap_or(""),
                width = 18
            ));
        }
    }
    let example = wt.get_example_usage();
    if example.len() <= 1 {
        format!(
            "{}\n\nDescription:\n{}\nToolbox: {}\nParameters:\n\n{}\n",
            tool_name, description, toolbox, p
        )
    } else {
        format!(
            "{}\nDescription:\n{}\nToolbox: {}\nParameters:\n\n{}\n\nExample usage:\n{}\n",
            tool_name, description, toolbox, p, example
        )
    }
}

fn get_name_and_description<'a>(wt: Box<dyn GrayTool + 'a>) -> (String, String) {
    (wt.get_tool_name(), wt.get_tool_description())
}

#[derive(Serialize, Deserialize, Debug)]
struct ToolParameter {
    name: String,
    flags: Vec<String>,
    description: String,
    parameter_type: ParameterType,
    default_value: Option<String>,
    optional: bool,
}

#[derive(Serialize, Deserialize, Debug)]
enum ParameterType {
    ExistingFile(ParameterFileType),
    NewFile(ParameterFileType),
}

#[derive(Serialize, Deserialize, Debug)]
enum ParameterFileType {
    Raster,
    Compressed,
}

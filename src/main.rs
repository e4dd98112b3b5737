/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 02/06/2024
License: MIT
*/

/*!
GrayTools is a command-line program for compressing and decompressing
grayscale raster imagery with a fixed-width LZW coder. It can be run either
by calling it, with appropriate commands and arguments, from a terminal
application, or by calling it from a script. The following commands are
recognized:

| Command           | Description                                                                 |
| ----------------- | --------------------------------------------------------------------------- |
| --cd, --wd        | Changes the working directory; used in conjunction with --run flag.         |
| -h, --help        | Prints help information.                                                    |
| -l, --license     | Prints the gray-tools license.                                              |
| --listtools       | Lists all available tools. Keywords may also be used, --listtools lzw.      |
| -r, --run         | Runs a tool; used in conjunction with --wd flag; -r="LzwCompress".          |
| --toolbox         | Prints the toolbox associated with a tool; --toolbox=LzwCompress.           |
| --toolhelp        | Prints the help associated with a tool; --toolhelp="LzwDecompress".         |
| --toolparameters  | Prints the parameters (in json form) for a specific tool.                   |
| -v                | Verbose mode. Without this flag, tool outputs will not be printed.          |
| --version         | Prints the version information.                                             |
*/

use gray_tools::tools::ToolManager;
use std::env;
use std::io::Error;
use std::path;

fn main() {
    match run() {
        Ok(()) => {}
        Err(err) => panic!("{}", err),
    }
}

fn run() -> Result<(), Error> {
    let sep: &str = &path::MAIN_SEPARATOR.to_string();
    let mut working_dir = String::new();
    let mut tool_name = String::new();
    let mut run_tool = false;
    let mut tool_help = false;
    let mut tool_parameters = false;
    let mut toolbox = false;
    let mut list_tools = false;
    let mut keywords: Vec<String> = vec![];
    let mut tool_args_vec: Vec<String> = vec![];
    let mut verbose = false;
    let mut finding_working_dir = false;
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        version();
        // print help
        help();
        // list tools
        let tm = ToolManager::new(&working_dir, &false)?;
        tm.list_tools();

        return Ok(());
    }

    for arg in &args[1..] {
        let flag_val = arg.to_lowercase().replace("--", "-");
        if flag_val == "-h" || flag_val == "-help" {
            help();
            return Ok(());
        } else if flag_val == "-version" {
            version();
            return Ok(());
        } else if flag_val == "-l" || flag_val == "-license" || flag_val == "-licence" {
            license();
            return Ok(());
        } else if flag_val == "-v" {
            verbose = true;
        } else if flag_val.starts_with("-cd")
            || flag_val.starts_with("-wd")
            || flag_val.starts_with("-working_directory")
        {
            let mut v = arg
                .replace("--cd", "")
                .replace("--wd", "")
                .replace("--working_directory", "")
                .replace("-cd", "")
                .replace("-wd", "")
                .replace("-working_directory", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            if v.trim().is_empty() {
                finding_working_dir = true;
            }
            if !v.is_empty() && !v.ends_with(sep) {
                v.push_str(sep);
            }
            working_dir = v.to_string();
        } else if arg.starts_with("-run") || arg.starts_with("--run") || arg.starts_with("-r") {
            let mut v = arg
                .replace("--run", "")
                .replace("-run", "")
                .replace("-r", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            run_tool = true;
        } else if arg.starts_with("-toolhelp") || arg.starts_with("--toolhelp") {
            let mut v = arg
                .replace("--toolhelp", "")
                .replace("-toolhelp", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            tool_help = true;
        } else if arg.starts_with("-toolparameters") || arg.starts_with("--toolparameters") {
            let mut v = arg
                .replace("--toolparameters", "")
                .replace("-toolparameters", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            tool_parameters = true;
        } else if arg.starts_with("-toolbox") || arg.starts_with("--toolbox") {
            let mut v = arg
                .replace("--toolbox", "")
                .replace("-toolbox", "")
                .replace("\"", "")
                .replace("\'", "");
            if v.starts_with("=") {
                v = v[1..v.len()].to_string();
            }
            tool_name = v;
            toolbox = true;
        } else if arg.starts_with("-listtools")
            || arg.starts_with("--listtools")
            || arg.starts_with("-list_tools")
            || arg.starts_with("--list_tools")
        {
            list_tools = true;
        } else if finding_working_dir {
            working_dir = arg.replace("\"", "").replace("\'", "");
            if !working_dir.ends_with(sep) {
                working_dir.push_str(sep);
            }
            finding_working_dir = false;
        } else {
            tool_args_vec.push(arg.trim().to_string().clone());
            if list_tools {
                keywords.push(arg.trim().replace("\"", "").replace("\'", ""));
            }
        }
    }

    let tm = ToolManager::new(&working_dir, &verbose)?;
    if run_tool {
        if verbose {
            tool_args_vec.push("-v".to_string());
        }
        return tm.run_tool(tool_name, tool_args_vec);
    } else if tool_help {
        return tm.tool_help(tool_name);
    } else if tool_parameters {
        return tm.print_tool_parameters(tool_name);
    } else if toolbox {
        return tm.toolbox(tool_name);
    } else if list_tools {
        if keywords.is_empty() {
            tm.list_tools();
        } else {
            tm.list_tools_with_keywords(keywords);
        }
    }

    Ok(())
}

fn help() {
    let mut ext = "";
    if cfg!(target_os = "windows") {
        ext = ".exe";
    }

    let exe_name = &format!("gray_tools{}", ext);
    let sep: String = path::MAIN_SEPARATOR.to_string();
    let s = "GrayTools Help

The following commands are recognized:
--cd, --wd          Changes the working directory; used in conjunction with --run flag.
-h, --help          Prints help information.
-l, --license       Prints the gray-tools license.
--listtools         Lists all available tools. Keywords may also be used, --listtools lzw.
-r, --run           Runs a tool; used in conjunction with --wd flag; -r=\"LzwCompress\".
--toolbox           Prints the toolbox associated with a tool; --toolbox=LzwCompress.
--toolhelp          Prints the help associated with a tool; --toolhelp=\"LzwDecompress\".
--toolparameters    Prints the parameters (in json form) for a specific tool; --toolparameters=\"LzwCompress\".
-v                  Verbose mode. Without this flag, tool outputs will not be printed.
--version           Prints the version information.

Example Usage:
>> .*EXE_NAME -r=LzwCompress --cd=\"*path*to*data*\" -i=image.pgm -o=image.lzw -v
"
    .replace("*", &sep)
    .replace("EXE_NAME", exe_name);
    println!("{}", s);
}

fn license() {
    let license_text = "GrayTools License
Copyright 2024 John Lindsay

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the \"Software\"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";
    println!("{}", license_text);
}

fn version() {
    const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
    println!(
        "GrayTools v{} by Dr. John B. Lindsay (c) 2024

GrayTools is a command-line platform for LZW compression and
decompression of grayscale raster imagery.",
        VERSION.unwrap_or("unknown")
    );
}

/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::path::PathBuf;
use std::process::exit;

use clap::{App, Arg};

use emoji_name_builder::generator;

fn main() {
    env_logger::init();

    let matches = App::new("emoji_name_builder")
        .version("0.1.0")
        .author("Constantin A. <emoji.builder@c1710.de>")
        .about("Generates the emoji name mapping module from the emoji name table")
        .arg(Arg::with_name("input_file")
            .long("input-file")
            .value_name("FILE")
            .help("The table containing the emoji codes, names, aliases and explanations")
            .takes_value(true)
            .default_value("emoji_names.csv")
            .required(false)
        )
        .arg(Arg::with_name("output_file")
            .long("output-file")
            .value_name("FILE")
            .help("The Python module to generate")
            .takes_value(true)
            .default_value("emoji_name_maps.py")
            .required(false)
        )
        .get_matches();

    let input = PathBuf::from(matches.value_of("input_file").unwrap());
    let output = PathBuf::from(matches.value_of("output_file").unwrap());

    match generator::write_name_maps(&input, &output) {
        Ok(_) => log::info!("Wrote the name mapping module to {}", output.display()),
        Err(error) => {
            eprintln!("Failed to generate the name mapping module: {}", error);
            exit(1);
        }
    }
}

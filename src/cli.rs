// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

pub fn build_cli() -> Command {
    Command::new("qifledger")
        .version(crate_version!())
        .about("Convert QIF exports into balanced hledger journals")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log progress (-v) or parser detail (-vv)"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert one or more QIF files, merged and sorted by date")
                .arg(
                    Arg::new("files")
                        .required(true)
                        .num_args(1..)
                        .help("Input files in QIF format"),
                )
                .arg(
                    Arg::new("out")
                        .short('o')
                        .long("out")
                        .help("Output file (default: stdout)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["hledger", "json", "csv"])
                        .default_value("hledger"),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .value_parser(value_parser!(usize))
                        .default_value("0")
                        .help("Maximum number of transactions to output (0 = all)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("JSON config with the category remapping table"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the raw records of a QIF file")
                .arg(Arg::new("file").required(true))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the record set as JSON"),
                ),
        )
}

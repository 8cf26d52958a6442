// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use clap::Parser;
use compat_matrix::cli::SelectArgs;
use compat_matrix::{matrix, ui};
use log::debug;

fn main() {
    env_logger::init();

    let args = SelectArgs::parse();

    // Filters are validated before the matrix is touched
    let selection = match args.selection() {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    let document = match matrix::load_matrix(&args.matrix) {
        Ok(d) => d,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };
    debug!("Matrix {} has {} rows", args.matrix.display(), document.rows.len());

    let rows = selection.select(document.rows);

    // One line, so it can be handed straight to a CI matrix output
    match matrix::to_compact_json(&rows) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    }
}

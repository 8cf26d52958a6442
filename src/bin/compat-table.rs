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
use compat_matrix::cli::ReportArgs;
use compat_matrix::report;
use log::debug;

fn main() {
    env_logger::init();

    let args = ReportArgs::parse();
    debug!("Generating compatibility table from {}", args.results_dir.display());

    print!("{}", report::generate_report(&args.results_dir));
}

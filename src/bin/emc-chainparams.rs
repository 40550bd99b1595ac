// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Prints the parameters of the selected EMC network.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use emc_chainparams::cli::ChainArgs;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() {
    init_logging();
    let args = ChainArgs::parse();

    match args.select_params() {
        Ok(params) => println!("{}", params),
        Err(e) => {
            error!(error = %e, fatal = e.is_fatal(), "cannot select chain parameters");
            process::exit(if e.is_fatal() { 2 } else { 1 });
        }
    }
}

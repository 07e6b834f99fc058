//! Quote CLI — prices a single insurance request with one or all of the
//! pricing models and prints each result as JSON to stdout.
//!
//! Usage example:
//! ```bash
//! quote --model all --birthdate 1995-06-15 --license-date 2015-08-20 \
//!     --car-brand Volkswagen --car-model Golf --postal-code "3014 NM"
//! ```
//!
//! `--today` pins the evaluation date and `--seed` makes the random draws
//! reproducible. `--health` prints the health check of the selected models.
#![warn(missing_docs)]
mod args;
mod report;

use crate::args::Args;
use clap::Parser;
use log::{debug, info};
use quote_common::calendar;
use quote_common::request::parse_date;
use quote_common::{QuoteRequest, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let documents = if args.health {
        report::render_health(args.model)?
    } else {
        let request = QuoteRequest::parse(
            args.birthdate.as_deref().unwrap_or_default(),
            args.license_date.as_deref().unwrap_or_default(),
            args.car_model.as_deref().unwrap_or_default(),
            args.car_brand.as_deref().unwrap_or_default(),
            args.postal_code.as_deref().unwrap_or_default(),
        )?;
        let today = match args.today.as_deref() {
            Some(raw) => parse_date("today", raw)?,
            None => calendar::today(),
        };
        info!("Pricing {} as of {} with model(s) {}", request.car(), today, args.model);

        match args.seed {
            Some(seed) => {
                report::render_quotes(args.model, &request, today, &mut StdRng::seed_from_u64(seed))?
            }
            None => report::render_quotes(args.model, &request, today, &mut rand::rng())?,
        }
    };

    let mut out = std::io::stdout().lock();
    for document in documents {
        writeln!(out, "{}", document)?;
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

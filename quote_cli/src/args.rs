//! Command-line arguments for the quote CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use strum_macros::Display;

/// Which pricing model(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[value(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum ModelKind {
    /// Age based pricing.
    A,
    /// Experience based pricing.
    B,
    /// Brand based pricing.
    C,
    /// All three models, in order.
    All,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Model to run.
    #[clap(long, value_enum, default_value_t = ModelKind::All)]
    pub model: ModelKind,

    /// Print health checks instead of quotes.
    #[clap(long)]
    pub health: bool,

    /// Driver date of birth, `YYYY-MM-DD`.
    #[clap(long, required_unless_present = "health")]
    pub birthdate: Option<String>,

    /// Driving license issue date, `YYYY-MM-DD`.
    #[clap(long, required_unless_present = "health")]
    pub license_date: Option<String>,

    /// Car brand, e.g. `Volkswagen`.
    #[clap(long, required_unless_present = "health")]
    pub car_brand: Option<String>,

    /// Car model, e.g. `Golf`.
    #[clap(long, required_unless_present = "health")]
    pub car_model: Option<String>,

    /// Postal code of the registered address.
    #[clap(long, required_unless_present = "health")]
    pub postal_code: Option<String>,

    /// Evaluate as of this date (`YYYY-MM-DD`) instead of today.
    #[clap(long)]
    pub today: Option<String>,

    /// Seed the random source for reproducible quotes.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl ModelKind {
    /// Whether this selection includes `other` (a single model).
    pub fn includes(&self, other: ModelKind) -> bool {
        *self == ModelKind::All || *self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_quote_invocation() {
        let args = Args::try_parse_from([
            "quote",
            "--model",
            "b",
            "--birthdate",
            "1995-06-15",
            "--license-date",
            "2015-08-20",
            "--car-brand",
            "Volkswagen",
            "--car-model",
            "Golf",
            "--postal-code",
            "3014 NM",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(args.model, ModelKind::B);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.postal_code.as_deref(), Some("3014 NM"));
        assert!(!args.health);
    }

    #[test]
    fn health_needs_no_request_fields() {
        let args = Args::try_parse_from(["quote", "--health"]).unwrap();
        assert!(args.health);
        assert_eq!(args.model, ModelKind::All);
    }

    #[test]
    fn quote_requires_request_fields() {
        assert!(Args::try_parse_from(["quote", "--model", "a"]).is_err());
    }

    #[test]
    fn all_includes_every_model() {
        assert!(ModelKind::All.includes(ModelKind::A));
        assert!(ModelKind::All.includes(ModelKind::C));
        assert!(ModelKind::B.includes(ModelKind::B));
        assert!(!ModelKind::B.includes(ModelKind::A));
    }
}

//! Command-line configuration.

use crate::session::SessionSettings;
use crate::triangle::Containment;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "triarea")]
#[command(about = "Compare two triangles by area and test a point against them")]
pub struct CliConfig {
    /// Digits after the decimal point when printing areas.
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(0..=12))]
    pub precision: u8,

    /// Rule used to decide whether the point lies inside a triangle.
    #[arg(long, value_enum, default_value_t = Containment::Placed)]
    pub containment: Containment,

    /// Give up after this many malformed answers to one prompt.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,

    /// Exit without waiting for Enter at the end.
    #[arg(long)]
    pub no_pause: bool,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            precision: usize::from(self.precision),
            containment: self.containment,
            max_attempts: self.max_attempts.map(|n| n as usize),
        }
    }
}

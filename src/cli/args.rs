//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};

use crate::domain::ApplyOrder;

const LONG_ABOUT: &str = "\
Replace strings in input streams.

Either you can provide mappings via command line arguments,
for example like following:

  cat data.txt | replace --map \"replace this\" --to \"With this\"

You can chain as many '--map' and '--to' bindings as you want
as long as the same amount of mappings as of replacements is
provided. The first mapping is replaced with the first
replacement and so on.
You can also provide a JSON file as mapping which looks like
following, for example:

  {
    \"Replace this\": \"With this\"
  }

Mappings from the file override command line mappings with the same key.";

/// Replace strings in input streams
#[derive(Parser, Debug)]
#[command(name = "replace")]
#[command(author, version = concat!("v", env!("CARGO_PKG_VERSION")), about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Input data (taken from STDIN when not provided)
    pub input: Option<String>,

    /// Value to be replaced (repeatable)
    #[arg(short = 'm', long = "map", value_name = "STR", allow_hyphen_values = true)]
    pub mappings: Vec<String>,

    /// Value to replace with (repeatable, paired with --map by position)
    #[arg(short = 't', long = "to", value_name = "STR", allow_hyphen_values = true)]
    pub replacements: Vec<String>,

    /// JSON file to read replacement mappings from
    #[arg(short = 'f', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub mapfile: Option<PathBuf>,

    /// Order in which mappings are applied
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Config file (default: $XDG_CONFIG_HOME/replace/replace.toml)
    #[arg(short = 'c', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completion: Option<clap_complete::Shell>,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Apply order as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderArg {
    /// Flag pairs in given order, then mapping file entries in file order
    Insertion,
    /// Longest search string first
    LongestFirst,
}

impl From<OrderArg> for ApplyOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Insertion => ApplyOrder::Insertion,
            OrderArg::LongestFirst => ApplyOrder::LongestFirst,
        }
    }
}

//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "gherbal", about = "Darija comment corpus cleaning tool.")]
pub enum Gherbal {
    #[structopt(about = "Clean and dialect-filter a raw comment dump")]
    Clean(Clean),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "raw comments (JSON array)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "accepted comments destination")]
    pub dst: PathBuf,
    #[structopt(parse(from_os_str), help = "rejected comments destination")]
    pub dropped: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "instagram",
        help = "secondary Instagram dump (optional, best-effort)"
    )]
    pub instagram: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "config",
        help = "cleaning configuration file (JSON, partial overrides allowed)"
    )]
    pub config: Option<PathBuf>,
    #[structopt(long = "min-tokens", help = "minimum token count for kept comments")]
    pub min_tokens: Option<usize>,
    #[structopt(
        long = "darija-ratio",
        help = "dialect evidence ratio threshold (0-1)"
    )]
    pub darija_ratio: Option<f64>,
}

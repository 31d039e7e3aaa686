use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "nv")]
pub struct Arguments {
    /// Directory of the repository whose tags are inspected
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use next_version::{arguments::Arguments, git::GitTags, version};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let tags = GitTags::new(&args.path).list()?;
    let next = version::next_version(&tags)?;

    // Logging goes to stderr, so stdout carries exactly the tag line.
    println!("{}", version::tag_name(&next));

    Ok(())
}

use structopt::StructOpt;

#[macro_use]
extern crate log;

use gherbal::cli;
use gherbal::config::CleaningConfig;
use gherbal::error::Error;
use gherbal::pipeline::CleaningPipeline;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Gherbal::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Gherbal::Clean(c) => {
            let mut config = match &c.config {
                Some(path) => CleaningConfig::from_path(path)?,
                None => CleaningConfig::default(),
            };
            if let Some(min_tokens) = c.min_tokens {
                config.min_tokens = min_tokens;
            }
            if let Some(ratio) = c.darija_ratio {
                config.darija_ratio_threshold = ratio;
            }

            let pipeline =
                CleaningPipeline::new(c.src, c.instagram, c.dst, c.dropped, config);
            let stats = pipeline.run()?;

            for (name, count) in stats.iter() {
                info!("{:<28} {:>8}", name, count);
            }
            println!(
                "kept {} comments ({} duplicates removed, {} dropped)",
                stats.get("final_count"),
                stats.get("duplicates_removed"),
                stats.get("dropped"),
            );
        }
    };
    Ok(())
}

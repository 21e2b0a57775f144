use std::path::PathBuf;
use std::process;

use anyhow::bail;
use clap::Parser;
use ipcnv_common::Endianness;
use log::{debug, info};

mod config;
mod output;

use config::RunConfig;
use output::Output;

#[derive(Debug, Parser)]
#[command(name = "ipcnv", version, about = "Simple IP address conversion tool")]
struct Opt {
    /// Input value: an IPv4 address or a base-10 integer, depending on mode
    #[clap(short, long, default_value = "", allow_negative_numbers = true)]
    input: String,

    /// 0 - ipv4 to int32, 1 - int32 to ipv4, 2 - ipv4 to uint32, 3 - uint32 to ipv4
    #[clap(short, long, allow_negative_numbers = true)]
    mode: Option<String>,

    /// Write the result to this file instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// YAML file with default `mode` and `output`
    #[clap(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let opt = Opt::parse();

    env_logger::init();

    if let Err(err) = run(opt) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(opt: Opt) -> anyhow::Result<()> {
    let host = Endianness::host()?;
    debug!("host byte order: {:?}", host);

    let config = match &opt.config {
        Some(path) => {
            let config = RunConfig::load(path)?;
            info!("loaded config from {}", path.display());
            config
        }
        None => RunConfig::default(),
    };

    let mode = config.mode(opt.mode.as_deref())?;
    debug!("mode: {:?}", mode);

    if opt.input.is_empty() {
        bail!("-i flag must not be empty");
    }

    let result = mode.convert(&opt.input)?;

    let output = Output::new(config.output(opt.output));
    if let Output::File(path) = &output {
        info!("writing result to {}", path.display());
    }
    output.write(&result)
}

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

use insurance_store::cli::Cli;
use insurance_store::company::{Company, CompanyReducer};
use insurance_store::config::Config;
use insurance_store::logging::init_tracing;
use insurance_store::report::render;
use insurance_store::script::Script;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = cli.format.unwrap_or(config.output.format);

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => Script::demo(config.company.policy_premium),
    };

    let mut company = Company::new(CompanyReducer::new(config.company.starting_balance));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    script.run(&mut company, |state| -> anyhow::Result<()> {
        let text = render(state, format).context("Failed to render snapshot")?;
        writeln!(out, "{}", text)?;
        Ok(())
    })?;
    out.flush()?;

    Ok(())
}

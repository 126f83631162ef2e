use anyhow::Context;
use bmpedit::EditOptions;
use bmpedit::cli::Args;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = EditOptions::from(Args::parse());
    log::debug!("options: {:?}", options);

    bmpedit::run(&options).with_context(|| {
        format!(
            "bmpedit could not produce {}\nTry bmpedit -h for help",
            options.output.display()
        )
    })?;
    Ok(())
}

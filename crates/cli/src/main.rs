use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config = storefront_cli::CliConfig::from_env().context("invalid configuration")?;
    storefront_observability::init_with(config.log_format);

    tracing::info!(
        seed = ?config.seed_path,
        confirm = ?config.confirm,
        "starting storefront"
    );

    let mut confirm = config.confirm.confirmer();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    storefront_cli::app::run(&config, &mut out, &mut *confirm)
}

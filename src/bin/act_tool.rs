//! act-tool binary entry point

fn main() -> anyhow::Result<()> {
    actfile::cli::run_cli()
}

//! TrayDrop command line entry point

fn main() -> anyhow::Result<()> {
    traydrop::cli::run_cli()
}

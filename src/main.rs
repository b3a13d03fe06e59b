use anyhow::Result;
use std::io;
use timetravel::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(cli.common.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.execute() {
        Err(err) if is_broken_pipe(&err) => Ok(()),
        other => other,
    }
}

/// A reader that closed stdout early (`| head`) ends the run quietly.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

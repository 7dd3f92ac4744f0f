use std::io;

use clap::Args;

use crate::cli::{connection::ConnectionArgs, render};

#[derive(Debug, Args)]
pub(crate) struct DashboardArgs {
    #[command(flatten)]
    connection: ConnectionArgs,
}

pub(crate) async fn run(args: DashboardArgs) -> Result<(), String> {
    let (app, session) = args.connection.connect().await?;

    let metrics = app
        .dashboard
        .metrics(&session)
        .await
        .map_err(|error| format!("failed to load dashboard: {error}"))?;

    render::dashboard(&mut io::stdout().lock(), &metrics)
        .map_err(|error| format!("failed to write output: {error}"))
}

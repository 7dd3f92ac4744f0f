use std::io;

use clap::{Args, Subcommand};
use shopdesk_app::domain::users::records::UserId;

use crate::cli::{confirm::confirm, connection::ConnectionArgs, render};

#[derive(Debug, Args)]
pub(crate) struct UsersCommand {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Debug, Subcommand)]
enum UsersSubcommand {
    List,
    /// Show a user's order history
    Orders { user: UserId },
    /// Delete a user; their orders are kept
    Delete {
        user: UserId,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub(crate) async fn run(command: UsersCommand) -> Result<(), String> {
    let (app, session) = command.connection.connect().await?;

    match command.command {
        UsersSubcommand::List => {
            let users = app
                .users
                .list_users(&session)
                .await
                .map_err(|error| format!("failed to list users: {error}"))?;

            render::users(&mut io::stdout().lock(), &users)
                .map_err(|error| format!("failed to write output: {error}"))
        }
        UsersSubcommand::Orders { user } => {
            let history = app
                .users
                .user_orders(&session, user)
                .await
                .map_err(|error| format!("failed to load orders: {error}"))?;

            println!("{} ({})", history.user.full_name(), history.user.id);

            if history.orders.is_empty() {
                println!("no orders");
                return Ok(());
            }

            render::orders(&mut io::stdout().lock(), &history.orders)
                .map_err(|error| format!("failed to write output: {error}"))
        }
        UsersSubcommand::Delete { user, yes } => {
            if !confirm(&format!("Delete user {user}? Their orders are kept."), yes)? {
                println!("aborted");
                return Ok(());
            }

            app.users
                .delete_user(&session, user)
                .await
                .map_err(|error| format!("failed to delete user: {error}"))?;

            println!("user {user} deleted");

            Ok(())
        }
    }
}

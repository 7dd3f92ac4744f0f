use clap::{Parser, Subcommand};

mod confirm;
mod connection;
mod dashboard;
mod orders;
mod products;
mod render;
mod users;

#[derive(Debug, Parser)]
#[command(name = "shopdesk", about = "Shopdesk admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Product, user and order counts with total sales
    Dashboard(dashboard::DashboardArgs),
    Products(products::ProductsCommand),
    Orders(orders::OrdersCommand),
    Users(users::UsersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Dashboard(args) => dashboard::run(args).await,
            Commands::Products(command) => products::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
            Commands::Users(command) => users::run(command).await,
        }
    }
}

use std::io;

use clap::{Args, Subcommand};
use shopdesk_app::domain::orders::{
    records::OrderId,
    status::{OrderStatus, PaymentStatus},
};

use crate::cli::{confirm::confirm, connection::ConnectionArgs, render};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    List {
        /// Only orders whose id or tracking number contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Set the order status (Pending, Processing, Shipped, Delivered, Cancelled)
    SetStatus { order: OrderId, status: OrderStatus },
    /// Set the payment status (Unpaid, Paid, Refunded)
    SetPayment { order: OrderId, status: PaymentStatus },
    Delete {
        order: OrderId,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    let (app, session) = command.connection.connect().await?;

    match command.command {
        OrdersSubcommand::List { search } => {
            let orders = app
                .orders
                .search_orders(&session, search.as_deref().unwrap_or_default())
                .await
                .map_err(|error| format!("failed to list orders: {error}"))?;

            render::orders(&mut io::stdout().lock(), &orders)
                .map_err(|error| format!("failed to write output: {error}"))
        }
        OrdersSubcommand::SetStatus { order, status } => {
            let updated = app
                .orders
                .set_order_status(&session, order, status)
                .await
                .map_err(|error| format!("failed to update order status: {error}"))?;

            println!("order {} is now {}", updated.id, updated.order_status);

            Ok(())
        }
        OrdersSubcommand::SetPayment { order, status } => {
            let updated = app
                .orders
                .set_payment_status(&session, order, status)
                .await
                .map_err(|error| format!("failed to update payment status: {error}"))?;

            println!("order {} is now {}", updated.id, updated.payment_status);

            Ok(())
        }
        OrdersSubcommand::Delete { order, yes } => {
            if !confirm(&format!("Delete order {order}?"), yes)? {
                println!("aborted");
                return Ok(());
            }

            app.orders
                .delete_order(&session, order)
                .await
                .map_err(|error| format!("failed to delete order: {error}"))?;

            println!("order {order} deleted");

            Ok(())
        }
    }
}

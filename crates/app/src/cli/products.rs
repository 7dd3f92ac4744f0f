use std::io;

use clap::{Args, Subcommand, ValueEnum};
use shopdesk_app::domain::{
    collections::records::{Collection, Membership},
    products::{listing::build_listings, records::ProductId, stock::low_stock},
};

use crate::cli::{confirm::confirm, connection::ConnectionArgs, render};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List products with stock status and collection flags
    List {
        /// Only products whose name contains this text (any case)
        #[arg(long)]
        search: Option<String>,
    },
    /// List products that need restocking soon
    LowStock,
    /// Add a product to a collection, or remove it when already present
    Toggle {
        product: ProductId,

        #[arg(value_enum)]
        collection: CollectionArg,
    },
    Delete {
        product: ProductId,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CollectionArg {
    Featured,
    Popular,
}

impl From<CollectionArg> for Collection {
    fn from(value: CollectionArg) -> Self {
        match value {
            CollectionArg::Featured => Self::Featured,
            CollectionArg::Popular => Self::Popular,
        }
    }
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    let (app, session) = command.connection.connect().await?;

    match command.command {
        ProductsSubcommand::List { search } => {
            let products = match search {
                Some(term) => app.products.search_products(&session, &term).await,
                None => app.products.list_products(&session).await,
            }
            .map_err(|error| format!("failed to list products: {error}"))?;

            let featured = app
                .collections
                .member_ids(&session, Collection::Featured)
                .await
                .map_err(|error| format!("failed to load featured products: {error}"))?;

            let popular = app
                .collections
                .member_ids(&session, Collection::Popular)
                .await
                .map_err(|error| format!("failed to load popular products: {error}"))?;

            render::products(
                &mut io::stdout().lock(),
                &build_listings(products, &featured, &popular),
            )
            .map_err(|error| format!("failed to write output: {error}"))
        }
        ProductsSubcommand::LowStock => {
            let products = app
                .products
                .list_products(&session)
                .await
                .map_err(|error| format!("failed to list products: {error}"))?;

            let low: Vec<_> = low_stock(&products).cloned().collect();

            if low.is_empty() {
                println!("every product has sufficient stock");
                return Ok(());
            }

            let none = Default::default();

            render::products(&mut io::stdout().lock(), &build_listings(low, &none, &none))
                .map_err(|error| format!("failed to write output: {error}"))
        }
        ProductsSubcommand::Toggle {
            product,
            collection,
        } => {
            let collection = Collection::from(collection);

            let membership = app
                .collections
                .toggle_product(&session, collection, product)
                .await
                .map_err(|error| format!("failed to update {collection} products: {error}"))?;

            match membership {
                Membership::Added => println!("product {product} added to {collection}"),
                Membership::Removed => println!("product {product} removed from {collection}"),
            }

            Ok(())
        }
        ProductsSubcommand::Delete { product, yes } => {
            if !confirm(&format!("Delete product {product}?"), yes)? {
                println!("aborted");
                return Ok(());
            }

            app.products
                .delete_product(&session, product)
                .await
                .map_err(|error| format!("failed to delete product: {error}"))?;

            println!("product {product} deleted");

            Ok(())
        }
    }
}

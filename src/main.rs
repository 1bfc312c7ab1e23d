//! Shopwire CLI - a terminal client for the Shopwire storefront backend.
//!
//! Thin command layer over the `shopwire` library: it signs in, browses the
//! catalog, and lists orders and transactions, leaving all credential and
//! request handling to the library.

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shopwire::models::{LoginRequest, TransactionStatus};
use shopwire::utils::{format_amount, format_date, format_optional, truncate_string};
use shopwire::{ApiClient, Config, FileCredentialStore, Session};

const USAGE: &str = "\
Shopwire storefront client

Usage: shopwire <command> [args]

Commands:
  login <email>         Sign in and store the bearer credential
  logout                Discard the stored credential
  status                Show whether a valid credential is stored
  catalog [id]          List categories, or one category with its products
  orders [id]           List your orders, or show one in detail
  transactions [state]  List payment transactions, optionally filtered by
                        state (success, pending, failed)
";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Session backed by the on-disk credential store.
fn open_session(config: &Config) -> Result<Session> {
    let storage_dir = config.storage_dir()?;
    Ok(Session::new(FileCredentialStore::new(storage_dir)))
}

fn build_client() -> Result<ApiClient> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    let client = ApiClient::new(&config, session).context("failed to build HTTP client")?;
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("help");

    match command {
        "login" => {
            let email = args.get(2).context("usage: shopwire login <email>")?;
            login(email).await
        }
        "logout" => logout(),
        "status" => status(),
        "catalog" => match args.get(2) {
            Some(id) => category_detail(id.parse().context("category id must be a number")?).await,
            None => catalog().await,
        },
        "orders" => match args.get(2) {
            Some(id) => order_detail(id.parse().context("order id must be a number")?).await,
            None => orders().await,
        },
        "transactions" => transactions(args.get(2).map(String::as_str)).await,
        _ => {
            print!("{USAGE}");
            Ok(())
        }
    }
}

async fn login(email: &str) -> Result<()> {
    let password = rpassword::prompt_password("Password: ").context("failed to read password")?;

    let client = build_client()?;
    let response = client
        .login(&LoginRequest {
            email: email.to_string(),
            password,
        })
        .await?;
    client.session().establish(&response.credential())?;
    info!("credential stored");

    match &response.user {
        Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
        None => println!("Signed in"),
    }
    Ok(())
}

fn logout() -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;
    session.clear()?;
    println!("Signed out");
    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load()?;
    let session = open_session(&config)?;

    // Reading the credential also evicts it if it turned stale.
    match session.credential() {
        Some(credential) => match credential.expires_at_utc() {
            Some(expiry) => println!("Signed in, credential expires {}", expiry),
            None => println!("Signed in"),
        },
        None => println!("Not signed in"),
    }
    Ok(())
}

async fn catalog() -> Result<()> {
    let client = build_client()?;
    let (categories, sliders) =
        futures::future::try_join(client.fetch_categories(), client.fetch_sliders()).await?;

    if !sliders.is_empty() {
        println!("Featured:");
        for slider in &sliders {
            println!("  {}", format_optional(&slider.heading, "(untitled)"));
        }
        println!();
    }

    println!("Categories:");
    for category in &categories {
        println!("  {:>4}  {}", category.id, category.name);
    }
    Ok(())
}

async fn category_detail(category_id: i64) -> Result<()> {
    let client = build_client()?;
    let category = client.fetch_category(category_id).await?;

    println!("{}", category.name);
    if category.products.is_empty() {
        println!("  (no products)");
        return Ok(());
    }
    for product in &category.products {
        let marker = if product.has_discount() { " (sale)" } else { "" };
        println!(
            "  {:>4}  {:<32} {:>10}{}",
            product.id,
            truncate_string(&product.name, 32),
            format_amount(product.effective_price()),
            marker,
        );
        if let Some(description) = &product.description {
            println!("        {}", truncate_string(description, 64));
        }
    }
    Ok(())
}

async fn orders() -> Result<()> {
    let client = build_client()?;
    let orders = client.fetch_orders().await?;

    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }
    for order in &orders {
        println!(
            "  #{:<6} {}  {:>10}  {} item(s)  {}",
            order.id,
            format_date(&order.created_at),
            format_amount(order.total_amount),
            order.item_count(),
            order.status,
        );
    }
    Ok(())
}

async fn order_detail(order_id: i64) -> Result<()> {
    let client = build_client()?;
    let order = client.fetch_order(order_id).await?;

    println!(
        "Order #{} - {} - {}",
        order.id,
        order.status,
        format_date(&order.created_at)
    );
    for item in &order.items {
        println!(
            "  {:>2} x {:<32} {:>10}",
            item.quantity,
            truncate_string(&item.name, 32),
            format_amount(item.price),
        );
    }
    println!("  Total: {}", format_amount(order.total_amount));
    Ok(())
}

async fn transactions(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(word) => Some(
            TransactionStatus::parse(word)
                .with_context(|| format!("unknown status filter: {word}"))?,
        ),
        None => None,
    };

    let client = build_client()?;
    let transactions = client.fetch_transactions().await?;

    let mut shown = 0;
    for transaction in &transactions {
        if let Some(wanted) = filter {
            if transaction.status != wanted {
                continue;
            }
        }
        shown += 1;
        println!(
            "  #{:<6} {}  {:>10}  {:<8} {}",
            transaction.id,
            format_date(&transaction.created_at),
            format_amount(transaction.amount),
            transaction.status.to_string(),
            format_optional(&transaction.reference, "-"),
        );
    }
    if shown == 0 {
        println!("No transactions");
    }
    Ok(())
}

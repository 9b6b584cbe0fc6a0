use std::env;
use std::str::FromStr;
use std::time::Duration;
use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "kiosk")]
#[command(
    about = "client cli for driving the kiosk server from a terminal",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// print the menu
    Menu,
    /// print tables and their status
    Tables,
    /// table related ops
    #[command(arg_required_else_help = true)]
    Table(TableArgs),
    /// print what the kitchen is working on
    Kitchen,
    /// print every order with its amount
    Orders,
    /// submit an order
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
    /// pay on the terminal and follow the payment until it settles
    #[command(arg_required_else_help = true)]
    Pay(PayArgs),
}

#[derive(Debug, Args)]
struct TableArgs {
    #[command(subcommand)]
    command: TableCmds,
}

#[derive(Debug, Subcommand)]
enum TableCmds {
    #[command(arg_required_else_help = true)]
    Free {
        id: i64,
    },
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[arg(
        long = "item",
        help = "Menu item and quantity.",
        value_name = "MENU_ITEM_ID:QTY",
        num_args = 1..,
        required = true
    )]
    items: Vec<OrderLineArg>,
    #[arg(long, help = "Total amount of the order.")]
    amount: f64,
    #[arg(long, help = "How the customer pays, e.g. card or cash.", default_value = "card")]
    payment_type: String,
}

#[derive(Debug, Args)]
struct PayArgs {
    #[arg(long, help = "Amount to charge.")]
    amount: f64,
    #[arg(
        long,
        help = "Delay between status queries.",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,
}

#[derive(Debug, Clone)]
struct OrderLineArg {
    item_id: i64,
    qty: i64,
}

impl FromStr for OrderLineArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, qty) = s.split_once(':').unwrap_or((s, "1"));
        match (id.parse(), qty.parse()) {
            (Ok(item_id), Ok(qty)) => Ok(Self { item_id, qty }),
            _ => Err(format!("Invalid order line: {s}, expected MENU_ITEM_ID:QTY")),
        }
    }
}

const DEFAULT_HOST: &str = "http://localhost:8000";
/// terminal states that mean the payment is still running
const PENDING_STATES: [&str; 2] = ["paying", "processing"];

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = env::var("KIOSK_HOST").unwrap_or(DEFAULT_HOST.to_string());
    let client = Client::new();

    match args.command {
        Commands::Menu => print_listing(&client, &host, "api/menu").await?,
        Commands::Tables => print_listing(&client, &host, "api/tables").await?,
        Commands::Kitchen => print_listing(&client, &host, "api/kitchen/orders").await?,
        Commands::Orders => print_listing(&client, &host, "api/orders/all").await?,
        Commands::Table(table) => match table.command {
            TableCmds::Free { id } => {
                println!("freeing table={}", id);
                let res = client
                    .post(format!("{}/api/tables/{}/free", host, id))
                    .send()
                    .await?;
                match res.status() {
                    StatusCode::OK => println!("table {} is free again", id),
                    unexpected => println!("got unexpected status code, {}", unexpected),
                }
            }
        },
        Commands::Order(order) => {
            let body = json!({
                "items": order.items.iter()
                    .map(|l| json!({"yemek_id": l.item_id, "qty": l.qty}))
                    .collect::<Vec<_>>(),
                "amount": order.amount,
                "payment_type": order.payment_type,
            });
            let res = client
                .post(format!("{}/api/orders", host))
                .json(&body)
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => println!("order accepted, {}", res.json::<Value>().await?),
                StatusCode::UNPROCESSABLE_ENTITY => {
                    println!("order rejected, {}", res.text().await?)
                }
                unexpected => println!("got unexpected status code, {}", unexpected),
            }
        }
        Commands::Pay(pay) => {
            let interval = Duration::from_millis(pay.interval_ms);
            follow_payment(&client, &host, pay.amount, interval).await?
        }
    };
    Ok(())
}

async fn print_listing(client: &Client, host: &str, path: &str) -> Result<(), anyhow::Error> {
    let res = client.get(format!("{}/{}", host, path)).send().await?;
    match res.status() {
        StatusCode::OK => {
            let listing = res.json::<Value>().await?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        unexpected => println!("got unexpected status code, {}", unexpected),
    }
    Ok(())
}

async fn follow_payment(
    client: &Client,
    host: &str,
    amount: f64,
    interval: Duration,
) -> Result<(), anyhow::Error> {
    println!("starting payment of {}", amount);
    let started = post_json(client, host, "api/payment", json!({ "amount": amount })).await?;
    let uuid = started
        .pointer("/data/uuid")
        .cloned()
        .ok_or_else(|| anyhow!("payment reply has no data.uuid, {}", started))?;
    println!("payment started, uuid={}", uuid);

    let mut ticker = tokio::time::interval(interval);
    ticker.tick().await; // first tick fires immediately
    loop {
        ticker.tick().await;
        let status = post_json(client, host, "api/query", json!({ "uuid": uuid })).await?;
        println!("{}", status);
        match payment_state(&status) {
            Some(state) if PENDING_STATES.contains(&state) => continue,
            state => {
                println!("payment finished with status={}", state.unwrap_or("unknown"));
                return Ok(());
            }
        }
    }
}

async fn post_json(
    client: &Client,
    host: &str,
    path: &str,
    body: Value,
) -> Result<Value, anyhow::Error> {
    let res = client
        .post(format!("{}/{}", host, path))
        .json(&body)
        .send()
        .await?;
    match res.status() {
        StatusCode::OK => res.json::<Value>().await.context("reply is not json"),
        unexpected => {
            let detail = res.text().await?;
            Err(anyhow!("{} failed with {}, {}", path, unexpected, detail))
        }
    }
}

fn payment_state(status: &Value) -> Option<&str> {
    status.pointer("/data/info/status").and_then(Value::as_str)
}

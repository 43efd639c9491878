//! Subcommand definitions and handlers

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Number, Value};

use labkit_core::domain::entities::DEFAULT_MAX_VALUE;
use labkit_core::{
    calculate_discount_value, BoundedCounter, Config, PostsQueryResult, PostsService,
    ReqwestHttpClient,
};

#[derive(Parser)]
#[command(name = "labkit", version, about = "Discounts, user posts and a bounded counter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a percentage discount to a price
    Discount {
        /// Price, must be positive
        #[arg(allow_hyphen_values = true)]
        price: String,
        /// Discount percentage between 0 and 100
        #[arg(allow_hyphen_values = true)]
        percent: String,
    },
    /// Fetch the posts of a user
    Posts {
        user_id: String,
        /// Print the whole result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay operations on a bounded counter
    Counter {
        #[arg(long, default_value_t = 0)]
        initial: u32,
        #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
        max: u32,
        #[arg(value_enum)]
        ops: Vec<CounterOp>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CounterOp {
    Inc,
    Dec,
    Reset,
}

/// Raw argument as an untyped value: a JSON number when it parses as a
/// finite float, the original string otherwise
pub fn parse_untyped(raw: &str) -> Value {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

pub fn discount(price: &str, percent: &str) -> Result<()> {
    let final_price = calculate_discount_value(&parse_untyped(price), &parse_untyped(percent))?;
    println!("{:.2}", final_price);
    Ok(())
}

pub async fn posts(user_id: &str, json: bool) -> Result<()> {
    let config = Config::from_env();
    let service = PostsService::from_config(Arc::new(ReqwestHttpClient::new()), &config);

    tracing::info!(user_id, api = %config.posts_api_url, "Fetching posts");

    let result = service
        .fetch_user_posts(user_id)
        .await
        .with_context(|| format!("Failed to fetch posts for user {}", user_id))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize result")?
        );
    } else {
        print!("{}", render_posts(&result));
    }
    Ok(())
}

pub fn render_posts(result: &PostsQueryResult) -> String {
    let mut out = format!("{}\n", result.message());
    for post in result.posts() {
        let id = match post.id() {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "?".to_string(),
        };
        out.push_str(&format!("  #{} {}\n", id, post.title().unwrap_or_default()));
    }
    out
}

pub fn counter(initial: u32, max: u32, ops: &[CounterOp]) -> Result<()> {
    let counter = replay(BoundedCounter::new(initial, max)?, ops);

    println!("{}", counter.count());
    for warning in counter.limit_warnings() {
        println!("{}", warning);
    }
    Ok(())
}

pub fn replay(mut counter: BoundedCounter, ops: &[CounterOp]) -> BoundedCounter {
    for op in ops {
        match op {
            CounterOp::Inc => {
                counter.increment();
            }
            CounterOp::Dec => {
                counter.decrement();
            }
            CounterOp::Reset => counter.reset(),
        }
    }
    counter
}

//! Builds a handful of statements and prints them.
//!
//! Run with `RUST_LOG=sqlchain=trace cargo run --example statement` to see
//! every appended fragment.

use sqlchain::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> SqlResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut q = statement("");
    q.select(["id", "email"])?
        .from("users")?
        .where_("")
        .eq("status", Joiner::And)?
        .and()
        .ge("created_at", Joiner::And)?
        .limit("20");
    println!("{q}");

    let mut q = statement("");
    q.insert("users")?.values("name, email")?;
    println!("{q}");

    let mut q = statement("");
    q.update("users")?
        .set(serde_json::json!({"name": "alice", "email": "a@example.com"}))?
        .where_("")
        .eq("id", Joiner::And)?;
    println!("{q}");

    let mut q = statement("");
    q.select_from("")?
        .left(["users", "orders"])?
        .where_("")
        .in_("users.status", Trusted(["'active'", "'trial'"]))?;
    println!("{q}");

    let mut q = statement("");
    if let Err(e) = q.select("id; DROP TABLE users") {
        println!("rejected: {e}");
    }

    let config = BuilderConfig::from_json_str(r#"{"isSafeByDefault": true}"#)?;
    let mut q = statement_with_config("", config);
    q.select("count(*) AS n")?.from("public.users")?;
    println!("{q}");

    Ok(())
}

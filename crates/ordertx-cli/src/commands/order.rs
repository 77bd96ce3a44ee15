//! Order commands
//!
//! Usage: ordertx-cli order register --date 2024-01-01 --time 12:00 --item 1:2 --item 2:1

use crate::commands::open_store;
use crate::GlobalArgs;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use ordertx_core::model::{OrderSubmission, OrderedMenu};
use ordertx_core::PriceMatching;
use ordertx_core_types::RequestContext;
use ordertx_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use ordertx_engine::RegistrationOptions;

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Register a new order
    Register(RegisterArgs),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Order date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Order time (HH:MM or HH:MM:SS)
    #[arg(long, value_parser = parse_time)]
    pub time: NaiveTime,

    /// Ordered menu as CODE:QTY; repeat for several items
    #[arg(long = "item", value_parser = parse_item)]
    pub items: Vec<OrderedMenu>,

    /// Pairing of looked-up prices with items: by-code or positional
    #[arg(long, default_value = "by-code")]
    pub matching: PriceMatching,
}

pub fn execute(args: OrderArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        OrderCommand::Register(register_args) => execute_register(register_args, global),
    }
}

fn execute_register(args: RegisterArgs, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_store(global)?;

    let cmd = EngineCommand::RegisterOrder {
        submission: OrderSubmission::new(args.date, args.time, args.items),
        options: RegistrationOptions::default().with_price_matching(args.matching),
    };

    if let EngineCommandResult::RegisterOrder(registered) =
        apply_engine_command(cmd, &mut conn, &RequestContext::new())?
    {
        println!(
            "Registered order {} (total: {}, line items: {})",
            registered.order_code, registered.total_price, registered.line_item_count
        );
    }
    Ok(())
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| format!("invalid time '{}': {}", s, e))
}

fn parse_item(s: &str) -> Result<OrderedMenu, String> {
    let (code, quantity) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid item '{}', expected CODE:QTY", s))?;
    let code = code
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid menu code in '{}': {}", s, e))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity in '{}': {}", s, e))?;
    Ok(OrderedMenu::new(code, quantity))
}

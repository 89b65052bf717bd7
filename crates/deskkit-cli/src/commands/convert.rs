use clap::Args;
use deskkit_core::tools::{format_result, UnitCategory};

use super::CmdResult;

#[derive(Args)]
pub struct ConvertArgs {
    /// length, weight or temperature
    category: UnitCategory,
    #[arg(allow_negative_numbers = true)]
    value: f64,
    /// Source unit symbol or name (m, ft, kg, lb, C, F, ...)
    from: String,
    /// Target unit symbol or name
    to: String,
}

pub fn run(args: ConvertArgs) -> CmdResult {
    let result = args.category.convert(args.value, &args.from, &args.to)?;
    let to = args.category.unit(&args.to)?;
    println!("{} {}", format_result(result), to.symbol);
    Ok(())
}

use clap::Args;
use deskkit_core::tools::Calculator;

use super::CmdResult;

#[derive(Args)]
pub struct CalcArgs {
    /// Key presses: digits, ".", + - * /, "=", "<" for backspace, "c" to
    /// clear. Operations chain left to right.
    #[arg(required = true, allow_hyphen_values = true)]
    keys: Vec<String>,
}

pub fn run(args: CalcArgs) -> CmdResult {
    let mut calc = Calculator::new();
    calc.press_all(&args.keys.concat())?;
    println!("{}", calc.display());
    Ok(())
}

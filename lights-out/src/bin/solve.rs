use miette::*;

use lights_out::report;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let input = include_str!("../../boards.txt");
    let result = report::process(input)?;
    println!("{}", result);
    Ok(())
}

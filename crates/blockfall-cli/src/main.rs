mod command;
mod schema;
mod script;
mod simulation;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}

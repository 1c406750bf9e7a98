mod command;
mod field_file;
mod render;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}

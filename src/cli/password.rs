use std::path::Path;

use roster::{
    Store,
    password::{Generator, parse_length},
};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Number of characters (at least 4); defaults to the configured length
    #[arg(long, short, value_parser = parse_length)]
    length: Option<usize>,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config = Store::load_config(root);
        let length = self.length.unwrap_or(config.password_length());

        let password = Generator::new(config.max_password_length()).generate(length)?;
        println!("{password}");
        Ok(())
    }
}

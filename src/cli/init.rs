use std::{fs, path::Path};

use roster::{Config, Store};
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Start with an empty registry instead of the sample records
    #[arg(long)]
    empty: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, root: &Path) -> anyhow::Result<()> {
        let config_path = root.join(Config::FILE_NAME);
        if config_path.exists() {
            anyhow::bail!(
                "Roster already initialized (found existing {})",
                Config::FILE_NAME
            );
        }

        fs::create_dir_all(root)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", root.display()))?;

        let mut config = Config::default();
        config.seed = !self.empty;
        config
            .save(&config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", Config::FILE_NAME))?;

        let store = Store::open_with_config(root.to_path_buf(), config)?;
        if store.data_path().exists() {
            tracing::info!(
                "Keeping existing registry at {}",
                store.data_path().display()
            );
        } else {
            store.flush()?;
        }

        let registry = store.registry();
        println!(
            "{}",
            format!("✅ Initialized roster in {}", store.root().display()).success()
        );
        println!("  Created: {}", Config::FILE_NAME);
        println!(
            "  Registry: {} ({} students, {} faculty, {} courses)",
            store.config().data_file().display(),
            registry.student_count(),
            registry.faculty_count(),
            registry.course_count()
        );

        println!();
        println!("Next steps:");
        println!("  roster student add S100 \"Ada Lovelace\" Mathematics");
        println!("  roster enroll S100 CS101");

        Ok(())
    }
}

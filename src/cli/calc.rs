use roster::calculator;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// The expression to evaluate, e.g. "2 * (3 + 4)"
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    expression: Vec<String>,
}

impl Command {
    #[instrument]
    pub fn run(self) {
        let expression = self.expression.join(" ");

        match calculator::evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                tracing::debug!("failed to evaluate '{expression}': {e}");
                eprintln!("{}", e.short_message());
                std::process::exit(1);
            }
        }
    }
}

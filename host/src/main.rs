use clap::Parser;
use tokio::io::BufReader;

use todo_search::Config;

fn main() -> anyhow::Result<()> {
    todo_search::init_tracing();

    let config = Config::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let summary = runtime.block_on(async {
        let input = BufReader::new(tokio::io::stdin());
        todo_search::run(&config, input, std::io::stdout()).await
    })?;

    // A stdin read or an orphaned fetch may still occupy the blocking pool.
    runtime.shutdown_background();

    tracing::info!(
        submissions = summary.submissions,
        blocked = summary.blocked,
        "session ended"
    );
    Ok(())
}

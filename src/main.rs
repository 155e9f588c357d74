use anyhow::Context;
use roomkit::{init_logging, BuilderState, ProjectSummary};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let path = match std::env::args_os().nth(1) {
        Some(path) => std::path::PathBuf::from(path),
        None => {
            eprintln!(
                "roomkit {} (built {})",
                env!("CARGO_PKG_VERSION"),
                env!("BUILD_DATE")
            );
            eprintln!("usage: roomkit <project.json>");
            std::process::exit(2);
        }
    };

    let mut state = BuilderState::new();
    state
        .load_from_file(&path)
        .with_context(|| format!("Cannot open project {}", path.display()))?;

    println!("{}", ProjectSummary::from_state(&state));
    Ok(())
}

use anyhow::Context;
use env_logger::Env;

use noticon::IconSpec;

fn run() -> anyhow::Result<()> {
    let spec = IconSpec::default();
    noticon::write_icon(&spec)
        .with_context(|| format!("failed to write {}", spec.output_path.display()))?;
    println!("Notification icon created successfully!");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Icon generation failed: {:?}", e);
        std::process::exit(1);
    }
}

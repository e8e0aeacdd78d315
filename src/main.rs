use clap::Parser;

use pwa_icons::IconGenerator;

#[derive(Parser)]
#[command(name = "pwa-icons")]
#[command(version)]
#[command(about = "Draw the dumbbell PWA icons into public/")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let generator = IconGenerator::new().with_verbose(args.verbose);
    let out_dir = pwa_icons::default_output_dir();

    pwa_icons::run(&generator, &out_dir)?;

    Ok(())
}

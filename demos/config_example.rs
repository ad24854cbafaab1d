use readability_examer::{Config, ReadabilityAnalyzer, Renderer};
use readability_examer::reporter::TerminalRenderer;

fn main() -> anyhow::Result<()> {
    println!("Readability Examer Configuration Example");
    println!("========================================");

    // Show default config path
    match Config::default_config_path() {
        Ok(path) => println!("📍 Default config location: {}", path.display()),
        Err(e) => println!("❌ Error getting config path: {}", e),
    }

    // Load config (will use defaults if no file exists)
    println!("\n🔧 Loading configuration...");
    let config = Config::load(None)?;

    println!("✅ Configuration loaded successfully!");
    println!("🎨 Theme preference: {}", config.theme);
    println!("🌓 Active theme: {}", config.theme.resolve());
    println!("🖨️  Output format: {:?}", config.output.format);

    let report = ReadabilityAnalyzer::new()
        .analyze("The cat sat on the mat. It was happy!")?;
    let renderer = TerminalRenderer::new(config.theme.resolve(), config.output.color);
    println!("\n{}", renderer.render(&report)?);

    Ok(())
}

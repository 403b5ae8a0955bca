mod bootstrap;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_data::reader::DatasetLoader;
use bikeshare_ui::app::App;
use bikeshare_ui::console::Console;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("bikeshare v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    let loader = DatasetLoader::new(&settings.data_dir);
    let mut app = App::new(loader, Console::stdio());
    app.run()?;

    tracing::info!("Goodbye");
    Ok(())
}

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use pwpreset::config::{DEFAULT_LENGTH, MAX_LENGTH};
use pwpreset::{
    CharacterClass, CharacterClasses, ChaChaKeystream, GenerationConfig, Preset, generate_password,
    pool_size, preset,
};

#[derive(Parser)]
#[command(
    name = "pwpreset",
    version,
    author,
    about = "Random password generator with character classes and presets"
)]
struct Cli {
    /// Preset name or alias (short, standard, strong, extra-strong)
    #[arg(
        short,
        long,
        conflicts_with_all = ["length", "no_uppercase", "no_lowercase", "no_numbers", "no_symbols"]
    )]
    preset: Option<String>,

    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LENGTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_LENGTH as u64)
    )]
    length: usize,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_symbols: bool,

    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    #[arg(short, long)]
    quiet: bool,

    #[arg(long)]
    list_presets: bool,
}

impl Cli {
    fn resolve(&self) -> Result<(GenerationConfig, Option<&'static Preset>)> {
        if let Some(name) = &self.preset {
            let preset = preset::lookup(name)?;
            return Ok((preset.config, Some(preset)));
        }

        let mut classes = CharacterClasses::ALL;
        classes.set(CharacterClass::Uppercase, !self.no_uppercase);
        classes.set(CharacterClass::Lowercase, !self.no_lowercase);
        classes.set(CharacterClass::Numbers, !self.no_numbers);
        classes.set(CharacterClass::Symbols, !self.no_symbols);

        Ok((GenerationConfig::new(self.length, classes), None))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let display_options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    if cli.list_presets {
        ui::display_presets(&display_options);
        return Ok(());
    }

    let (config, preset) = cli.resolve()?;
    debug!(
        "length={} classes=[{}] pool={} preset={}",
        config.length,
        config.classes,
        pool_size(&config.classes),
        preset.map_or("-", |p| p.alias)
    );

    let mut source =
        ChaChaKeystream::from_os_entropy().context("Failed to seed keystream from the OS")?;

    let passwords = (0..cli.count)
        .map(|_| generate_password(&config, &mut source))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate password")?;
    info!("generated {} password(s)", passwords.len());

    ui::display_output(&passwords, &config, preset, &display_options);

    Ok(())
}

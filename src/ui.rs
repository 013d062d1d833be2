use console::Style;
use pwpreset::{GenerationConfig, PRESETS, Preset, entropy_bits, pool_size};
use zeroize::Zeroizing;

pub const MIN_SAFE_ENTROPY: f64 = 80.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

pub fn rate_entropy(entropy: f64) -> (&'static str, bool) {
    if entropy >= PARANOID_ENTROPY {
        ("Paranoid", true)
    } else if entropy >= MIN_SAFE_ENTROPY {
        ("Strong", true)
    } else {
        ("Weak", false)
    }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

pub fn display_output(
    passwords: &[Zeroizing<String>],
    config: &GenerationConfig,
    preset: Option<&Preset>,
    options: &DisplayOptions,
) {
    if options.quiet {
        for password in passwords {
            println!("{}", &**password);
        }
        return;
    }

    for (i, password) in passwords.iter().enumerate() {
        println!("Out[{}]:\n{}", i, &**password);
    }
    println!();

    display_settings(config, preset);
    display_stats(config, passwords.len(), options);
}

fn display_settings(config: &GenerationConfig, preset: Option<&Preset>) {
    println!("Settings:");

    if let Some(preset) = preset {
        println!("  ├─ Preset     {} ({})", preset.name, preset.alias);
    }

    println!("  ├─ Classes    {}", config.classes);

    let size = pool_size(&config.classes);
    println!(
        "  ├─ Pool       {} {}",
        size,
        plural(size, "char", "chars")
    );
    println!("  ├─ Keystream  ChaCha20 (256-bit, OS-seeded)");
    println!("  └─ Sampling   Unbiased rejection");
    println!();
}

fn display_stats(config: &GenerationConfig, count: usize, options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    let entropy = entropy_bits(config);
    let (status_text, entropy_secure) = rate_entropy(entropy);
    let entropy_style = status_style(entropy_secure, options);
    let entropy_icon = if entropy_secure { check_ok } else { check_warn };

    let length_secure = config.length >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = status_style(length_secure, options);
    let length_icon = if length_secure { check_ok } else { check_warn };

    println!("Stats:");

    print!(
        "  ├─ Entropy    {} ",
        entropy_style.apply_to(format!("[{}]", entropy_icon))
    );
    print!("{}", entropy_style.apply_to(format!("{:.1}", entropy)));
    print!(" bits ({})", entropy_style.apply_to(status_text));
    println!();

    print!(
        "  ├─ Length     {} ",
        length_style.apply_to(format!("[{}]", length_icon))
    );
    print!("{}", length_style.apply_to(config.length));
    print!(" {}", plural(config.length, "char", "chars"));
    println!();

    println!(
        "  └─ Count      {} {}",
        count,
        plural(count, "password", "passwords")
    );

    println!(
        "\n{} Security: {}",
        entropy_style.apply_to(format!("[{}]", entropy_icon)),
        entropy_style.apply_to(status_text)
    );
}

pub fn display_presets(options: &DisplayOptions) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);

    println!("Presets:");
    for (i, preset) in PRESETS.iter().enumerate() {
        let prefix = if i == PRESETS.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        let entropy = entropy_bits(&preset.config);
        let (status_text, secure) = rate_entropy(entropy);
        let style = status_style(secure, options);

        println!(
            "  {} {:<13} {} {:>2} chars, {} ({:.1} bits, {})",
            prefix,
            preset.alias,
            style.apply_to(format!("[{}]", if secure { check_ok } else { check_warn })),
            preset.config.length,
            preset.config.classes,
            entropy,
            style.apply_to(status_text)
        );
    }
}

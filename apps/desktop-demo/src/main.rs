use desktop_app::FingerPickAppOptions;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Finger Picker ===");
    println!("Put two or more fingers on the screen, then press Start.");
    println!("Mouse: left button drags a finger, right button pins one.");
    println!("Keys: Space starts, R resets the selection, Esc lifts every finger.");
    println!();

    desktop_app::run(
        FingerPickAppOptions::default()
            .WithTitle("Finger Picker")
            .WithSize(720, 1280),
    )
}

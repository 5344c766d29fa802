//! About command handler

use anyhow::Result;

use sjphy::{banner, current_theme};

pub fn handle() -> Result<()> {
    let theme = current_theme();
    print!("{}", banner::render(&theme));
    let build = format!(
        "sjphy {} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        env!("SJPHY_BUILD_DATE"),
    );
    println!();
    println!("{}", theme.secondary_text(&build));
    Ok(())
}

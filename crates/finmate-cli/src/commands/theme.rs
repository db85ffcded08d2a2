//! Theme preference commands

use anyhow::Result;
use finmate_core::{Theme, ThemeStore};

pub fn cmd_theme_show(store: &dyn ThemeStore) -> Result<()> {
    println!("Current theme: {}", store.get());
    Ok(())
}

pub fn cmd_theme_set(store: &dyn ThemeStore, theme: &str) -> Result<()> {
    let theme: Theme = theme.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    if store.get() == theme {
        println!("Already using {} mode.", theme);
        return Ok(());
    }

    store.set(theme)?;
    println!("Theme set to {} mode.", theme);
    Ok(())
}

pub fn cmd_theme_toggle(store: &dyn ThemeStore) -> Result<()> {
    let next = store.get().flipped();
    store.set(next)?;
    println!("Theme switched to {} mode.", next);
    Ok(())
}

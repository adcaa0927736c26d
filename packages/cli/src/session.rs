use anyhow::Context;
use console::Style;

use common::session::{FileSessionStore, SessionStore};

use crate::config::AppConfig;

/// Print the persisted session record, if there is one.
pub fn show(config: &AppConfig) -> anyhow::Result<()> {
    let sessions =
        FileSessionStore::new(&config.data.dir).context("Failed to open session store")?;

    match sessions.load().context("Failed to read session record")? {
        Some(user) => {
            let label = Style::new().cyan();
            println!(
                "{} {} <{}>",
                label.apply_to("Signed in as"),
                user.username,
                user.email
            );
            println!("Role:   {}", user.role);
            println!("Score:  {}", user.score);
            println!("Joined: {}", user.join_date.format("%Y-%m-%d %H:%M UTC"));
        }
        None => println!("No session record. Run `trivium demo` first."),
    }
    Ok(())
}

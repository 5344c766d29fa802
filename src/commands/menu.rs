//! Interactive main menu

use anyhow::Result;

use sjphy::prompt::{select, SelectStyle};
use sjphy::{banner, current_theme};

use super::{init, list, me, open, Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Init,
    Open,
    List,
    Profile,
    About,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Init,
        Action::Open,
        Action::List,
        Action::Profile,
        Action::About,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Init => "Create experiment data (copy prompt, paste AI answer)",
            Action::Open => "Open an experiment notebook",
            Action::List => "List experiments",
            Action::Profile => "Set student name and ID",
            Action::About => "About SJPHY",
            Action::Quit => "Quit",
        }
    }
}

pub fn handle(workspace: &Workspace) -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.accent_bold_text("SJPHY"));
    println!("{}", theme.secondary_text(banner::TAGLINE));
    println!();

    me::ensure_profile(workspace)?;

    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut last = 0;
    loop {
        last = select("What would you like to do?", &labels, last, SelectStyle::List)?;
        let action = Action::ALL[last];
        tracing::debug!(?action, "menu action");
        let result = match action {
            Action::Init => init::handle(workspace, None, false),
            Action::Open => open::handle(workspace, None),
            Action::List => list::handle(workspace),
            Action::Profile => me::handle_set(workspace),
            Action::About => {
                print!("{}", banner::render(&theme));
                Ok(())
            }
            Action::Quit => return Ok(()),
        };
        // A failed action returns to the menu
        if let Err(e) = result {
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        }
        println!();
    }
}

//! Student profile handlers

use anyhow::Result;

use sjphy::profile::{is_student_id, parse_student_id};
use sjphy::prompt::LineInput;
use sjphy::{current_theme, Student};

use super::{relative, Workspace};

pub fn handle_show(workspace: &Workspace) -> Result<()> {
    let theme = current_theme();
    let student = workspace.profile().load()?;
    println!("{} {}", theme.secondary_text("Name:"), theme.accent_bold_text(&student.student_name));
    println!("{} {}", theme.secondary_text("ID:  "), theme.accent_bold_text(&student.id_string()));
    Ok(())
}

/// Ask for name and student ID, then write the profile.
pub fn handle_set(workspace: &Workspace) -> Result<()> {
    let theme = current_theme();
    let store = workspace.profile();

    let student_name = LineInput::new("Name").interact()?;
    let id = LineInput::new("Student ID (12 digits)")
        .validator(is_student_id)
        .interact()?;
    let student = Student {
        student_name,
        student_id: parse_student_id(&id)?,
    };

    store.save(&student)?;
    println!(
        "{}",
        theme.success_text(&format!(
            "✓ {} saved",
            relative(&workspace.root, store.path()).display()
        ))
    );
    Ok(())
}

/// Ask for the profile unless it already exists.
pub fn ensure_profile(workspace: &Workspace) -> Result<()> {
    if workspace.profile().exists() {
        return Ok(());
    }
    let theme = current_theme();
    println!("{}", theme.accent_text("No student profile yet. Let's create one."));
    handle_set(workspace)
}
